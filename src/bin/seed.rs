//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env).

use anyhow::Context;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

/// (name, email, image_url)
const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Evil Rabbit", "evil@rabbit.com", "/customers/evil-rabbit.png"),
    ("Delba de Oliveira", "delba@oliveira.com", "/customers/delba-de-oliveira.png"),
    ("Lee Robinson", "lee@robinson.com", "/customers/lee-robinson.png"),
    ("Michael Novotny", "michael@novotny.com", "/customers/michael-novotny.png"),
    ("Amy Burns", "amy@burns.com", "/customers/amy-burns.png"),
    ("Balazs Orban", "balazs@orban.com", "/customers/balazs-orban.png"),
];

/// (customer index, amount in cents, status, date)
const INVOICES: &[(usize, i64, &str, &str)] = &[
    (0, 15795, "pending", "2022-12-06"),
    (1, 20348, "pending", "2022-11-14"),
    (4, 3040, "paid", "2022-10-29"),
    (3, 44800, "paid", "2023-09-10"),
    (5, 34577, "pending", "2023-08-05"),
    (2, 54246, "pending", "2023-07-16"),
    (0, 666, "pending", "2023-06-27"),
    (3, 32545, "paid", "2023-06-09"),
    (4, 1250, "paid", "2023-06-17"),
    (5, 8546, "paid", "2023-06-07"),
    (1, 500, "paid", "2023-08-19"),
    (5, 8945, "paid", "2023-06-03"),
    (2, 1000, "paid", "2022-06-05"),
];

/// (month, revenue)
const REVENUE: &[(&str, i32)] = &[
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = invoice_dashboard::db::create_pool(&db_url, 5).await?;

    // Run migrations first
    invoice_dashboard::db::run_migrations(&pool).await?;

    println!("=== Invoice Dashboard Seed Script ===");

    let customer_ids = seed_customers(&pool).await?;
    seed_invoices(&pool, &customer_ids).await?;
    seed_revenue(&pool).await?;

    println!("\n=== Seed complete! ===");

    Ok(())
}

async fn seed_customers(pool: &PgPool) -> anyhow::Result<Vec<Uuid>> {
    let mut ids = Vec::with_capacity(CUSTOMERS.len());
    for (name, email, image_url) in CUSTOMERS {
        let existing: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM customers WHERE email = $1")
                .bind(email)
                .fetch_optional(pool)
                .await?;

        let id = match existing {
            Some(id) => id,
            None => {
                sqlx::query_scalar(
                    "INSERT INTO customers (name, email, image_url) VALUES ($1, $2, $3) RETURNING id",
                )
                .bind(name)
                .bind(email)
                .bind(image_url)
                .fetch_one(pool)
                .await?
            }
        };
        ids.push(id);
    }
    println!("[done] {} customers", ids.len());
    Ok(ids)
}

async fn seed_invoices(pool: &PgPool, customer_ids: &[Uuid]) -> anyhow::Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        println!("[skip] invoices already present ({existing})");
        return Ok(());
    }

    for (customer, amount, status, date) in INVOICES {
        let customer_id = customer_ids
            .get(*customer)
            .context("invoice references unknown customer")?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
        sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date) VALUES ($1, $2, $3, $4)",
        )
        .bind(customer_id)
        .bind(amount)
        .bind(status)
        .bind(date)
        .execute(pool)
        .await?;
    }
    println!("[done] {} invoices", INVOICES.len());
    Ok(())
}

async fn seed_revenue(pool: &PgPool) -> anyhow::Result<()> {
    for (month, revenue) in REVENUE {
        sqlx::query(
            "INSERT INTO revenue (month, revenue) VALUES ($1, $2) ON CONFLICT (month) DO NOTHING",
        )
        .bind(month)
        .bind(revenue)
        .execute(pool)
        .await?;
    }
    println!("[done] {} revenue months", REVENUE.len());
    Ok(())
}

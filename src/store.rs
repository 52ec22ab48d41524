//! Schema bootstrap: idempotent DDL for the four tables, run at startup.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        code TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id SERIAL PRIMARY KEY,
        comp_code TEXT NOT NULL REFERENCES companies(code) ON DELETE CASCADE,
        amt NUMERIC(12, 2) NOT NULL,
        paid BOOLEAN NOT NULL DEFAULT false,
        add_date DATE NOT NULL DEFAULT CURRENT_DATE,
        paid_date DATE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS industries (
        code TEXT PRIMARY KEY,
        industry TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS company_industries (
        comp_code TEXT NOT NULL REFERENCES companies(code) ON DELETE CASCADE,
        ind_code TEXT NOT NULL REFERENCES industries(code) ON DELETE CASCADE,
        PRIMARY KEY (comp_code, ind_code)
    )
    "#,
];

/// Create the application tables if they do not exist. Call before serving.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

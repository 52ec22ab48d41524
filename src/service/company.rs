//! Company queries.

use crate::error::AppError;
use crate::models::{Company, CompanySummary, NewCompany, UpdateCompany};
use sqlx::PgPool;

pub struct CompanyService;

impl CompanyService {
    /// All companies as (code, name), ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<CompanySummary>, AppError> {
        let rows = sqlx::query_as::<_, CompanySummary>(
            "SELECT code, name FROM companies ORDER BY code",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Fetch one company by code, or None.
    pub async fn get(pool: &PgPool, code: &str) -> Result<Option<Company>, AppError> {
        let row = sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// True if a company with this code exists.
    pub async fn exists(pool: &PgPool, code: &str) -> Result<bool, AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT code FROM companies WHERE code = $1")
            .bind(code)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    /// Ids of the invoices referencing this company, ordered by id.
    pub async fn invoice_ids(pool: &PgPool, code: &str) -> Result<Vec<i32>, AppError> {
        let rows: Vec<(i32,)> =
            sqlx::query_as("SELECT id FROM invoices WHERE comp_code = $1 ORDER BY id")
                .bind(code)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Insert one company. Duplicate codes surface as a database error.
    pub async fn create(pool: &PgPool, new: &NewCompany) -> Result<Company, AppError> {
        tracing::debug!(code = %new.code, "insert company");
        let row = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3) \
             RETURNING code, name, description",
        )
        .bind(&new.code)
        .bind(&new.name)
        .bind(&new.description)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Update name/description by code. Returns None when no row matched.
    pub async fn update(
        pool: &PgPool,
        code: &str,
        body: &UpdateCompany,
    ) -> Result<Option<Company>, AppError> {
        let row = sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $1, description = $2 WHERE code = $3 \
             RETURNING code, name, description",
        )
        .bind(&body.name)
        .bind(&body.description)
        .bind(code)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Delete by code. Returns false when no row matched.
    pub async fn delete(pool: &PgPool, code: &str) -> Result<bool, AppError> {
        let row: Option<(String,)> =
            sqlx::query_as("DELETE FROM companies WHERE code = $1 RETURNING code")
                .bind(code)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }
}

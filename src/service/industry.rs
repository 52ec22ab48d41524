//! Industry and join-relation queries.

use crate::error::AppError;
use crate::models::{Company, Industry, NewIndustry, Relation};
use sqlx::PgPool;

pub struct IndustryService;

impl IndustryService {
    /// All industries, ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Industry>, AppError> {
        let rows = sqlx::query_as::<_, Industry>(
            "SELECT code, industry FROM industries ORDER BY code",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// True if an industry with this code exists.
    pub async fn exists(pool: &PgPool, code: &str) -> Result<bool, AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT code FROM industries WHERE code = $1")
            .bind(code)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    /// Full company rows associated with this industry via the join relation.
    pub async fn companies_for(pool: &PgPool, code: &str) -> Result<Vec<Company>, AppError> {
        let rows = sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code IN ( \
                 SELECT comp_code FROM company_industries WHERE ind_code = $1 \
             )",
        )
        .bind(code)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert one industry. Duplicate codes surface as a database error.
    pub async fn create(pool: &PgPool, new: &NewIndustry) -> Result<Industry, AppError> {
        tracing::debug!(code = %new.code, "insert industry");
        let row = sqlx::query_as::<_, Industry>(
            "INSERT INTO industries (code, industry) VALUES ($1, $2) RETURNING code, industry",
        )
        .bind(&new.code)
        .bind(&new.industry)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// True if the (comp_code, ind_code) pair is already in the join relation.
    pub async fn relation_exists(
        pool: &PgPool,
        comp_code: &str,
        ind_code: &str,
    ) -> Result<bool, AppError> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT comp_code FROM company_industries WHERE comp_code = $1 AND ind_code = $2",
        )
        .bind(comp_code)
        .bind(ind_code)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }

    /// Insert one join-relation pair. A concurrent duplicate insert surfaces
    /// the unique violation as a database error.
    pub async fn associate(
        pool: &PgPool,
        comp_code: &str,
        ind_code: &str,
    ) -> Result<Relation, AppError> {
        let row = sqlx::query_as::<_, Relation>(
            "INSERT INTO company_industries (comp_code, ind_code) VALUES ($1, $2) \
             RETURNING comp_code, ind_code",
        )
        .bind(comp_code)
        .bind(ind_code)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }
}

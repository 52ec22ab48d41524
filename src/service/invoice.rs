//! Invoice queries and the paid-state transition rule.

use crate::error::AppError;
use crate::models::{Invoice, InvoiceSummary, NewInvoice, UpdateInvoice};
use sqlx::PgPool;

/// What an update does to the paid state, decided from the current row and
/// the requested flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaidTransition {
    /// unpaid → paid: stamp paid_date with the current date.
    MarkPaid,
    /// paid → unpaid: clear paid_date.
    MarkUnpaid,
    /// Requested state equals current, or the flag was omitted.
    AmountOnly,
}

pub fn paid_transition(current: bool, requested: Option<bool>) -> PaidTransition {
    match (current, requested) {
        (false, Some(true)) => PaidTransition::MarkPaid,
        (true, Some(false)) => PaidTransition::MarkUnpaid,
        _ => PaidTransition::AmountOnly,
    }
}

const RETURNING: &str = "RETURNING id, comp_code, amt, paid, add_date, paid_date";

pub struct InvoiceService;

impl InvoiceService {
    /// All invoices as (id, comp_code), ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<InvoiceSummary>, AppError> {
        let rows = sqlx::query_as::<_, InvoiceSummary>(
            "SELECT id, comp_code FROM invoices ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Fetch one invoice by id, or None.
    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<Invoice>, AppError> {
        let row = sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Insert one invoice; paid, paid_date, and add_date come from column
    /// defaults. A missing company surfaces as a database error.
    pub async fn create(pool: &PgPool, new: &NewInvoice) -> Result<Invoice, AppError> {
        tracing::debug!(comp_code = %new.comp_code, "insert invoice");
        let row = sqlx::query_as::<_, Invoice>(&format!(
            "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) {RETURNING}"
        ))
        .bind(&new.comp_code)
        .bind(new.amt)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Update the amount and, when the requested paid flag flips the current
    /// state, the paid/paid_date pair. Returns None when no row matched.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        body: &UpdateInvoice,
    ) -> Result<Option<Invoice>, AppError> {
        let current: Option<(i32, bool)> =
            sqlx::query_as("SELECT id, paid FROM invoices WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        let Some((_, paid)) = current else {
            return Ok(None);
        };

        let sql = match paid_transition(paid, body.paid) {
            PaidTransition::MarkPaid => format!(
                "UPDATE invoices SET amt = $1, paid = true, paid_date = CURRENT_DATE \
                 WHERE id = $2 {RETURNING}"
            ),
            PaidTransition::MarkUnpaid => format!(
                "UPDATE invoices SET amt = $1, paid = false, paid_date = NULL \
                 WHERE id = $2 {RETURNING}"
            ),
            PaidTransition::AmountOnly => {
                format!("UPDATE invoices SET amt = $1 WHERE id = $2 {RETURNING}")
            }
        };
        let row = sqlx::query_as::<_, Invoice>(&sql)
            .bind(body.amt)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete by id. Returns false when no row matched.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let row: Option<(i32,)> =
            sqlx::query_as("DELETE FROM invoices WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaid_to_paid() {
        assert_eq!(paid_transition(false, Some(true)), PaidTransition::MarkPaid);
    }

    #[test]
    fn paid_to_unpaid() {
        assert_eq!(paid_transition(true, Some(false)), PaidTransition::MarkUnpaid);
    }

    #[test]
    fn same_state_is_amount_only() {
        assert_eq!(paid_transition(true, Some(true)), PaidTransition::AmountOnly);
        assert_eq!(paid_transition(false, Some(false)), PaidTransition::AmountOnly);
    }

    #[test]
    fn omitted_flag_is_amount_only() {
        assert_eq!(paid_transition(true, None), PaidTransition::AmountOnly);
        assert_eq!(paid_transition(false, None), PaidTransition::AmountOnly);
    }
}

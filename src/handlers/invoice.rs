//! Invoice handlers: list, get (with company), create, update, delete.
//! The update path applies the paid-state transition rule.

use crate::error::AppError;
use crate::models::{InvoiceDetail, NewInvoice, UpdateInvoice};
use crate::response::{InvoiceBody, InvoicesBody, DELETED};
use crate::service::{CompanyService, InvoiceService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let invoices = InvoiceService::list(&state.pool).await?;
    Ok(Json(InvoicesBody { invoices }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = InvoiceService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Invoice {id} not found")))?;
    // The FK guarantees the company row; a missing one is a storage-level fault.
    let company = CompanyService::get(&state.pool, &invoice.comp_code)
        .await?
        .ok_or_else(|| AppError::Internal(format!("company {} missing for invoice {id}", invoice.comp_code)))?;
    Ok(Json(InvoiceBody {
        invoice: InvoiceDetail {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        },
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewInvoice>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = InvoiceService::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(InvoiceBody { invoice })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateInvoice>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = InvoiceService::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Invoice {id} not found")))?;
    Ok(Json(InvoiceBody { invoice }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !InvoiceService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("Invoice {id} not found")));
    }
    Ok(Json(DELETED))
}

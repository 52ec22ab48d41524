//! Company handlers: list, get (with invoice ids), create, update, delete.

use crate::error::AppError;
use crate::models::{CompanyDetail, NewCompany, UpdateCompany};
use crate::response::{CompaniesBody, CompanyBody, DELETED};
use crate::service::CompanyService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let companies = CompanyService::list(&state.pool).await?;
    Ok(Json(CompaniesBody { companies }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::get(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {code} not found")))?;
    let invoices = CompanyService::invoice_ids(&state.pool, &company.code).await?;
    Ok(Json(CompanyBody {
        company: CompanyDetail {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices,
        },
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCompany>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(CompanyBody { company })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(body): Json<UpdateCompany>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::update(&state.pool, &code, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {code} not found")))?;
    Ok(Json(CompanyBody { company }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !CompanyService::delete(&state.pool, &code).await? {
        return Err(AppError::NotFound(format!("Company {code} not found")));
    }
    Ok(Json(DELETED))
}

//! Industry handlers: list (with concurrent company enrichment), create,
//! and company association.

use crate::error::AppError;
use crate::models::{AssociateCompany, IndustryDetail, NewIndustry};
use crate::response::{IndustriesBody, IndustryBody, RelationBody, RELATION_EXISTS};
use crate::service::{CompanyService, IndustryService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Lists industries with their associated companies. Enrichment fans out one
/// task per industry row; handles are awaited in row order, so the response
/// keeps the by-code ordering and is only emitted once every fetch resolved.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = IndustryService::list(&state.pool).await?;
    let mut tasks = Vec::with_capacity(rows.len());
    for row in rows {
        let pool = state.pool.clone();
        tasks.push(tokio::spawn(async move {
            let companies = IndustryService::companies_for(&pool, &row.code).await?;
            Ok::<_, AppError>(IndustryDetail {
                code: row.code,
                industry: row.industry,
                companies,
            })
        }));
    }
    let mut industries = Vec::with_capacity(tasks.len());
    for task in tasks {
        let detail = task
            .await
            .map_err(|e| AppError::Internal(format!("enrichment task failed: {e}")))??;
        industries.push(detail);
    }
    Ok(Json(IndustriesBody { industries }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewIndustry>,
) -> Result<impl IntoResponse, AppError> {
    let industry = IndustryService::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(IndustryBody { industry })))
}

/// Associates a company with an industry. Re-associating an existing pair
/// reports "Relation already exists" instead of failing.
pub async fn associate(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(body): Json<AssociateCompany>,
) -> Result<Response, AppError> {
    if !IndustryService::exists(&state.pool, &code).await? {
        return Err(AppError::NotFound(format!("Industry {code} not found")));
    }
    if !CompanyService::exists(&state.pool, &body.comp_code).await? {
        return Err(AppError::NotFound(format!(
            "Company {} not found",
            body.comp_code
        )));
    }
    if IndustryService::relation_exists(&state.pool, &body.comp_code, &code).await? {
        return Ok(Json(RELATION_EXISTS).into_response());
    }
    let relation = IndustryService::associate(&state.pool, &body.comp_code, &code).await?;
    Ok(Json(RelationBody { relation }).into_response())
}

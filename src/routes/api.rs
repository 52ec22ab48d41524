//! Resource routes: /companies, /invoices, /industries.

use crate::handlers::{company, industry, invoice};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/companies", get(company::list).post(company::create))
        .route(
            "/companies/:code",
            get(company::get).put(company::update).delete(company::delete),
        )
        .route("/invoices", get(invoice::list).post(invoice::create))
        .route(
            "/invoices/:id",
            get(invoice::get).put(invoice::update).delete(invoice::delete),
        )
        .route("/industries", get(industry::list).post(industry::create))
        .route("/industries/:code", axum::routing::put(industry::associate))
        .with_state(state)
}

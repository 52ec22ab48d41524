//! biztime: REST API over companies, invoices, and industries.

pub mod error;
pub mod models;
pub mod response;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use error::AppError;
pub use state::AppState;
pub use store::ensure_schema;
pub use routes::{api_routes, common_routes, common_routes_with_ready};
pub use service::{CompanyService, IndustryService, InvoiceService};

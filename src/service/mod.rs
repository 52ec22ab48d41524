//! SQL execution per resource against PostgreSQL.

mod company;
mod industry;
mod invoice;

pub use company::CompanyService;
pub use industry::IndustryService;
pub use invoice::{paid_transition, InvoiceService, PaidTransition};

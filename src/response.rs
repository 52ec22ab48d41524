//! Response envelopes, one per endpoint shape.

use crate::models::{CompanySummary, Industry, IndustryDetail, InvoiceSummary, Relation};
use serde::Serialize;

#[derive(Serialize)]
pub struct CompaniesBody {
    pub companies: Vec<CompanySummary>,
}

#[derive(Serialize)]
pub struct CompanyBody<T> {
    pub company: T,
}

#[derive(Serialize)]
pub struct InvoicesBody {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Serialize)]
pub struct InvoiceBody<T> {
    pub invoice: T,
}

#[derive(Serialize)]
pub struct IndustriesBody {
    pub industries: Vec<IndustryDetail>,
}

#[derive(Serialize)]
pub struct IndustryBody {
    pub industry: Industry,
}

#[derive(Serialize)]
pub struct RelationBody {
    pub relation: Relation,
}

#[derive(Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

pub const DELETED: StatusBody = StatusBody { status: "deleted" };
pub const RELATION_EXISTS: StatusBody = StatusBody {
    status: "Relation already exists",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Company;

    #[test]
    fn envelopes_use_singular_and_plural_keys() {
        let one = CompanyBody {
            company: Company {
                code: "ibm".into(),
                name: "IBM".into(),
                description: None,
            },
        };
        let json = serde_json::to_value(&one).unwrap();
        assert!(json.get("company").is_some());

        let many = CompaniesBody { companies: vec![] };
        let json = serde_json::to_value(&many).unwrap();
        assert!(json.get("companies").is_some());
    }

    #[test]
    fn status_bodies() {
        assert_eq!(serde_json::to_value(&DELETED).unwrap()["status"], "deleted");
        assert_eq!(
            serde_json::to_value(&RELATION_EXISTS).unwrap()["status"],
            "Relation already exists"
        );
    }
}

//! Row types and request payloads for the three resources.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Listing shape: code and name only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// Company enriched with the ids of its invoices (get-by-code shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Listing shape: id and company code only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// Invoice enriched with the full referenced company (get-by-id shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

/// Industry enriched with its associated companies (listing shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryDetail {
    pub code: String,
    pub industry: String,
    pub companies: Vec<Company>,
}

/// One row of the company↔industry join relation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Relation {
    pub comp_code: String,
    pub ind_code: String,
}

#[derive(Debug, Deserialize)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCompany {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: Decimal,
}

/// Update payload; omitting `paid` leaves the paid state untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateInvoice {
    pub amt: Decimal,
    #[serde(default)]
    pub paid: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct NewIndustry {
    pub code: String,
    pub industry: String,
}

/// Associate payload; camelCase on the wire.
#[derive(Debug, Deserialize)]
pub struct AssociateCompany {
    #[serde(rename = "compCode")]
    pub comp_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn associate_payload_uses_camel_case() {
        let payload: AssociateCompany = serde_json::from_value(json!({"compCode": "apple"})).unwrap();
        assert_eq!(payload.comp_code, "apple");
    }

    #[test]
    fn update_invoice_paid_is_optional() {
        let amount_only: UpdateInvoice = serde_json::from_value(json!({"amt": 800})).unwrap();
        assert_eq!(amount_only.paid, None);
        assert_eq!(amount_only.amt, Decimal::from(800));

        let with_paid: UpdateInvoice =
            serde_json::from_value(json!({"amt": 800.5, "paid": true})).unwrap();
        assert_eq!(with_paid.paid, Some(true));
    }

    #[test]
    fn new_company_description_defaults_to_none() {
        let payload: NewCompany =
            serde_json::from_value(json!({"code": "ibm", "name": "IBM"})).unwrap();
        assert_eq!(payload.description, None);
    }

    #[test]
    fn invoice_detail_serializes_with_nested_company() {
        let detail = InvoiceDetail {
            id: 1,
            amt: Decimal::from(1000),
            paid: false,
            add_date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
            paid_date: None,
            company: Company {
                code: "apple".into(),
                name: "Apple Computer".into(),
                description: Some("Maker of OSX.".into()),
            },
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["amt"], 1000.0);
        assert_eq!(json["paid_date"], serde_json::Value::Null);
        assert_eq!(json["company"]["code"], "apple");
    }
}

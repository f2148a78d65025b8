//! Lending models: public loan order books, own offers, active loans.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use super::Base;
use crate::coerce::f64_str;

/// Format of the loan date strings, e.g. `"2018-01-02 15:04:05"`.
const LOAN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Public loan offers and demands for one currency
/// (`returnLoanOrders`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoanOrders {
    #[serde(default)]
    pub offers: Vec<LoanOrder>,
    #[serde(default)]
    pub demands: Vec<LoanOrder>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOrder {
    #[serde(with = "f64_str")]
    pub rate: f64,
    #[serde(with = "f64_str")]
    pub amount: f64,
    pub range_min: f64,
    pub range_max: f64,
}

/// Acknowledgement of a `createLoanOffer` call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoanOfferResult {
    #[serde(flatten)]
    pub base: Base,
    #[serde(rename = "orderID", default)]
    pub order_id: i64,
}

/// Your open loan offers, keyed by currency (`returnOpenLoanOffers`).
pub type OpenLoanOffers = HashMap<String, Vec<OpenLoanOffer>>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenLoanOffer {
    pub id: i64,
    #[serde(with = "f64_str")]
    pub rate: f64,
    #[serde(with = "f64_str")]
    pub amount: f64,
    pub duration: i64,
    #[serde(rename = "autoRenew")]
    pub auto_renew: i64,
    pub date: String,
}

/// Your active loans (`returnActiveLoans`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActiveLoans {
    #[serde(default)]
    pub provided: Vec<ActiveLoan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActiveLoan {
    pub id: i64,
    pub currency: String,
    #[serde(with = "f64_str")]
    pub rate: f64,
    #[serde(with = "f64_str")]
    pub amount: f64,
    pub range: i64,
    #[serde(rename = "autoRenew")]
    pub auto_renew: i64,
    /// Raw server date string, server-local time zone.
    pub date: String,
    #[serde(with = "f64_str")]
    pub fees: f64,
    /// Derived after decoding: `auto_renew == 1`.
    #[serde(skip)]
    pub renewable: bool,
    /// [`date`](Self::date) parsed into a timestamp, when it parses.
    #[serde(skip)]
    pub date_taken: Option<DateTime<Utc>>,
}

impl ActiveLoan {
    /// Fills the derived fields from their wire counterparts.
    pub(crate) fn finalize(&mut self) {
        self.renewable = self.auto_renew == 1;
        self.date_taken = NaiveDateTime::parse_from_str(&self.date, LOAN_DATE_FORMAT)
            .ok()
            .map(|naive| naive.and_utc());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_derives_renewable_and_date() {
        let mut loan = ActiveLoan {
            auto_renew: 1,
            date: "2018-05-10 23:45:05".to_string(),
            ..ActiveLoan::default()
        };
        loan.finalize();
        assert!(loan.renewable);
        let taken = loan.date_taken.unwrap();
        assert_eq!(taken.format(LOAN_DATE_FORMAT).to_string(), loan.date);
    }

    #[test]
    fn finalize_leaves_unparseable_dates_unset() {
        let mut loan = ActiveLoan {
            auto_renew: 0,
            date: "not a date".to_string(),
            ..ActiveLoan::default()
        };
        loan.finalize();
        assert!(!loan.renewable);
        assert!(loan.date_taken.is_none());
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use twdata_types::Exchange;

/// One listing application and the milestones it has reached.
///
/// Milestones progress roughly applied, reviewed, approved, contracted,
/// listed. Any of them may be `None` because the stage has not been reached
/// yet or never will be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingApplication {
    /// Security code reserved for the applicant.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// Portal the application was filed with.
    pub exchange: Exchange,
    /// Filing date.
    pub application_date: NaiveDate,
    /// Chairman of the applicant.
    pub chairman: String,
    /// Paid-in capital at the time of the application.
    pub capital_at_application: Option<Decimal>,
    /// Listing review committee meeting.
    pub review_committee_date: Option<NaiveDate>,
    /// Exchange board approval.
    pub board_approval_date: Option<NaiveDate>,
    /// Listing contract filed with the regulator (TWSE only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_filing_date: Option<NaiveDate>,
    /// Listing contract approved by the exchange (TPEx only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_approval_date: Option<NaiveDate>,
    /// First trading day.
    pub listed_date: Option<NaiveDate>,
    /// Lead underwriter, when one has been appointed.
    pub underwriter: Option<String>,
    /// Underwriting price.
    pub underwriting_price: Option<Decimal>,
    /// Free-text remarks.
    pub remarks: String,
}

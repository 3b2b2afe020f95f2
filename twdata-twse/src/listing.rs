use twdata_core::decode::TwseEnvelope;
use twdata_core::{Exchange, ListingApplication, decode_rows};
use twdata_types::TwdataError;

pub(crate) const APPLYLISTING: &str = "company/applylisting";

/// Decode `applylisting` rows.
///
/// Column 0 is a running index and is ignored. Milestone cells that are blank
/// or not yet a date decode to `None`; a blank underwriter is `None`.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_listing_applications(
    env: &TwseEnvelope,
) -> Result<Vec<ListingApplication>, TwdataError> {
    if !env.is_ok() {
        return Ok(Vec::new());
    }
    decode_rows("applylisting", &env.data, |c| {
        Ok(ListingApplication {
            symbol: c.text(1)?,
            name: c.text(2)?,
            exchange: Exchange::Twse,
            application_date: c.date(3)?,
            chairman: c.text(4)?,
            capital_at_application: c.num(5)?,
            review_committee_date: c.opt_date(6)?,
            board_approval_date: c.opt_date(7)?,
            contract_filing_date: c.opt_date(8)?,
            contract_approval_date: None,
            listed_date: c.opt_date(9)?,
            underwriter: c.opt_text(10)?,
            underwriting_price: c.html_num(11)?,
            remarks: c.text(12)?,
        })
    })
}

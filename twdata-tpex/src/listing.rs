use twdata_core::decode::TpexEnvelope;
use twdata_core::{Exchange, ListingApplication, decode_rows};
use twdata_types::TwdataError;

pub(crate) const APPLICANT: &str = "company/applicant";

/// Decode `company/applicant` rows.
///
/// Same column order as the TWSE listing page, except that column 8 is the
/// contract approval date rather than the filing date. Trailing link columns
/// are ignored.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_listing_applications(
    env: &TpexEnvelope,
) -> Result<Vec<ListingApplication>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(Vec::new());
    }
    decode_rows("applicant", &env.table("applicant", 0)?.data, |c| {
        Ok(ListingApplication {
            symbol: c.text(1)?,
            name: c.text(2)?,
            exchange: Exchange::Tpex,
            application_date: c.date(3)?,
            chairman: c.text(4)?,
            capital_at_application: c.num(5)?,
            review_committee_date: c.opt_date(6)?,
            board_approval_date: c.opt_date(7)?,
            contract_filing_date: None,
            contract_approval_date: c.opt_date(8)?,
            listed_date: c.opt_date(9)?,
            underwriter: c.opt_text(10)?,
            underwriting_price: c.num(11)?,
            remarks: c.text(12)?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use twdata_core::Payload;
    use twdata_core::decode::parse_envelope;

    #[test]
    fn contract_approval_replaces_filing() {
        let env: TpexEnvelope = parse_envelope(
            "applicant",
            Payload::Json(serde_json::json!({
                "tables": [{
                    "totalCount": 1,
                    "data": [[
                        "1", " 7780 ", "大研生醫", "112/10/02", "王某", "450,000", "112/11/15",
                        "112/12/01", "112/12/20", "", "元大證券", "58.00", "", "http://a", "http://b"
                    ]]
                }]
            })),
        )
        .unwrap();
        let r = &decode_listing_applications(&env).unwrap()[0];
        assert_eq!(r.symbol, "7780");
        assert_eq!(r.exchange, Exchange::Tpex);
        assert_eq!(r.contract_filing_date, None);
        assert_eq!(r.contract_approval_date, NaiveDate::from_ymd_opt(2023, 12, 20));
        assert_eq!(r.listed_date, None);
        assert_eq!(r.underwriter.as_deref(), Some("元大證券"));
        assert_eq!(r.underwriting_price, Some(Decimal::from(58)));
    }
}

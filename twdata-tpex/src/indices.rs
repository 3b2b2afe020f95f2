//! `sectRatio` sector trading with the electronics basket built from it, and
//! `sectinx` closing levels.

use chrono::NaiveDate;
use twdata_core::decode::TpexEnvelope;
use twdata_core::index_catalog::{TPEX_ELECTRONICS, TPEX_ELECTRONICS_MEMBERS};
use twdata_core::{
    Basket, Exchange, IndexHistorical, IndexTrades, decode_rows, index_symbol, synthesize_basket,
};
use twdata_types::TwdataError;

pub(crate) const SECT_RATIO: &str = "afterTrading/sectRatio";
pub(crate) const SECTINX: &str = "indexInfo/sectinx";

/// TPEx publishes the electronics sub-sectors but not their aggregate.
pub const ELECTRONICS_BASKET: Basket = Basket {
    target: TPEX_ELECTRONICS,
    name: "櫃買電子類指數",
    members: TPEX_ELECTRONICS_MEMBERS,
};

/// Decode `sectRatio` rows (`[sector, value, weight, volume]`).
///
/// Sector labels are expanded to their index names (`櫃買{sector}類指數`) and
/// mapped through the catalog; rows without a catalog entry are dropped. The
/// electronics aggregate is appended when the page lacks it and every
/// member is present.
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_index_trades(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<IndexTrades>>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(None);
    }
    let decoded = decode_rows("sectRatio", &env.table("sectRatio", 0)?.data, |c| {
        let name = format!("櫃買{}類指數", c.text(0)?);
        let Some(symbol) = index_symbol(&name) else {
            tracing::debug!(target: "twdata::tpex", name = %name, "uncatalogued index row dropped");
            return Ok(None);
        };
        Ok(Some(IndexTrades {
            date,
            exchange: Exchange::Tpex,
            symbol: symbol.to_string(),
            name,
            trade_volume: c.num(3)?,
            trade_value: c.num(1)?,
            trade_weight: c.num(2)?,
        }))
    })?;
    let mut rows: Vec<IndexTrades> = decoded.into_iter().flatten().collect();
    synthesize_basket(&mut rows, &ELECTRONICS_BASKET);
    Ok(Some(rows))
}

/// Index name of a `sectinx` label: the main index keeps its label, sector
/// labels (`半導體類`, `生技醫療`) become `櫃買{sector}類指數`.
fn sector_index_name(label: &str) -> String {
    if label == "櫃買指數" {
        return label.to_string();
    }
    format!("櫃買{}類指數", label.trim_end_matches('類'))
}

/// Decode `sectinx` rows (`[index, close, change, open, high, low]`).
///
/// # Errors
/// `SchemaMismatch` when a row is short.
pub fn decode_index_historical(
    env: &TpexEnvelope,
    date: NaiveDate,
) -> Result<Option<Vec<IndexHistorical>>, TwdataError> {
    if !env.has_rows(0) {
        return Ok(None);
    }
    let decoded = decode_rows("sectinx", &env.table("sectinx", 0)?.data, |c| {
        let (head, v) = c.split(1)?;
        let name = sector_index_name(&head.text(0)?);
        let Some(symbol) = index_symbol(&name) else {
            tracing::debug!(target: "twdata::tpex", name = %name, "uncatalogued index row dropped");
            return Ok(None);
        };
        Ok(Some(IndexHistorical {
            date,
            exchange: Exchange::Tpex,
            symbol: symbol.to_string(),
            name,
            open: v.num(2)?,
            high: v.num(3)?,
            low: v.num(4)?,
            close: v.num(0)?,
            change: v.num(1)?,
        }))
    })?;
    Ok(Some(decoded.into_iter().flatten().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use twdata_core::Payload;
    use twdata_core::decode::parse_envelope;

    fn sector_rows() -> Vec<[&'static str; 4]> {
        vec![
            ["半導體", "10,000", "10.00", "100"],
            ["電腦及週邊設備", "2,000", "2.00", "20"],
            ["光電", "3,000", "3.00", "30"],
            ["通信網路", "4,000", "4.00", "40"],
            ["電子零組件", "5,000", "5.00", "50"],
            ["電子通路", "600", "0.60", "6"],
            ["資訊服務", "700", "0.70", "7"],
            ["其他電子", "800", "0.80", "8"],
            ["生技醫療", "9,000", "9.00", "90"],
            ["神秘", "1", "0.00", "1"],
        ]
    }

    fn envelope(rows: &[[&str; 4]]) -> TpexEnvelope {
        parse_envelope(
            "sectRatio",
            Payload::Json(serde_json::json!({
                "tables": [{ "totalCount": rows.len(), "data": rows }]
            })),
        )
        .unwrap()
    }

    #[test]
    fn electronics_basket_is_appended() {
        let rows = decode_index_trades(&envelope(&sector_rows()), NaiveDate::MIN)
            .unwrap()
            .unwrap();
        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|r| r.name != "櫃買神秘類指數"));
        let electronics = rows.last().unwrap();
        assert_eq!(electronics.symbol, "IX0047");
        assert_eq!(electronics.name, "櫃買電子類指數");
        assert_eq!(electronics.trade_value, Some(Decimal::from(26_100)));
        assert_eq!(electronics.trade_volume, Some(Decimal::from(261)));
        assert_eq!(electronics.trade_weight, Some(Decimal::new(2610, 2)));
    }

    #[test]
    fn missing_member_skips_basket() {
        let mut rows = sector_rows();
        rows.remove(1);
        let out = decode_index_trades(&envelope(&rows), NaiveDate::MIN)
            .unwrap()
            .unwrap();
        assert!(out.iter().all(|r| r.symbol != "IX0047"));
    }

    #[test]
    fn empty_page_is_none() {
        assert_eq!(decode_index_trades(&envelope(&[]), NaiveDate::MIN).unwrap(), None);
        assert_eq!(
            decode_index_historical(&envelope(&[]), NaiveDate::MIN).unwrap(),
            None
        );
    }

    #[test]
    fn closing_levels_name_sectors() {
        let env: TpexEnvelope = parse_envelope(
            "sectinx",
            Payload::Json(serde_json::json!({
                "tables": [{
                    "totalCount": 3,
                    "data": [
                        ["櫃買指數", "245.10", "1.20", "244.00", "246.00", "243.50"],
                        ["半導體類", "612.30", "-3.10", "615.00", "616.20", "610.00"],
                        ["神秘類", "1.00", "0.00", "1.00", "1.00", "1.00"]
                    ]
                }]
            })),
        )
        .unwrap();
        let rows = decode_index_historical(&env, NaiveDate::MIN).unwrap().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].symbol, "IX0043");
        assert_eq!(rows[0].close, Some(Decimal::new(24_510, 2)));
        assert_eq!(rows[0].open, Some(Decimal::new(24_400, 2)));
        assert_eq!(rows[1].name, "櫃買半導體類指數");
        assert_eq!(rows[1].change, Some(Decimal::new(-310, 2)));
        assert_eq!(rows[1].low, Some(Decimal::new(61_000, 2)));
    }
}

//! Serde models of the two portals' JSON envelopes.
//!
//! Row cells arrive as strings, numbers or `null` depending on the endpoint;
//! they are all read as strings so the positional decoders see one shape.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use twdata_types::TwdataError;

use crate::fetch::Payload;

/// Rows of string cells.
pub type Rows = Vec<Vec<String>>;

/// Deserialize a payload into an envelope model.
///
/// # Errors
/// `Data` when the payload is not JSON or does not have the envelope shape.
pub fn parse_envelope<T: DeserializeOwned>(endpoint: &str, payload: Payload) -> Result<T, TwdataError> {
    let value = payload.into_json(endpoint)?;
    serde_json::from_value(value)
        .map_err(|e| TwdataError::Data(format!("{endpoint}: malformed envelope: {e}")))
}

/// TWSE `rwd` envelope.
///
/// Single-table endpoints put rows in `data`; `MI_INDEX` and `MI_MARGN` use
/// `tables`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TwseEnvelope {
    /// `OK` (or `ok` on detail endpoints) when data was found; otherwise a
    /// human-readable message.
    #[serde(default)]
    pub stat: String,
    /// Column headings of single-table endpoints.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<String>,
    /// Rows of single-table endpoints.
    #[serde(default, deserialize_with = "string_rows")]
    pub data: Rows,
    /// Tables of multi-table endpoints.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tables: Vec<Table>,
}

impl TwseEnvelope {
    /// True when the portal reports data for the request.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.stat.trim().eq_ignore_ascii_case("OK")
    }

    /// Table at `index`.
    ///
    /// # Errors
    /// `SchemaMismatch` when the envelope has fewer tables.
    pub fn table(&self, endpoint: &str, index: usize) -> Result<&Table, TwdataError> {
        table_at(&self.tables, endpoint, index)
    }
}

/// TPEx `www/zh-tw` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TpexEnvelope {
    /// Status text; only some endpoints set it.
    #[serde(default)]
    pub stat: Option<String>,
    /// Result tables.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tables: Vec<Table>,
}

impl TpexEnvelope {
    /// True when table `index` exists and reports a positive `totalCount`.
    #[must_use]
    pub fn has_rows(&self, index: usize) -> bool {
        self.tables.get(index).is_some_and(|t| t.total_count > 0)
    }

    /// Table at `index`.
    ///
    /// # Errors
    /// `SchemaMismatch` when the envelope has fewer tables.
    pub fn table(&self, endpoint: &str, index: usize) -> Result<&Table, TwdataError> {
        table_at(&self.tables, endpoint, index)
    }
}

/// One table of an envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Table caption.
    #[serde(default)]
    pub title: Option<String>,
    /// Row count reported by TPEx (0 when absent).
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_count: u64,
    /// Body rows.
    #[serde(default, deserialize_with = "string_rows")]
    pub data: Rows,
    /// Footer rows.
    #[serde(default, deserialize_with = "string_rows")]
    pub summary: Rows,
}

fn table_at<'a>(tables: &'a [Table], endpoint: &str, index: usize) -> Result<&'a Table, TwdataError> {
    tables.get(index).ok_or_else(|| {
        TwdataError::schema_mismatch(
            endpoint,
            format!("expected table {index}, envelope has {}", tables.len()),
        )
    })
}

fn cell_text(v: Value) -> String {
    match v {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_rows<'de, D: Deserializer<'de>>(de: D) -> Result<Rows, D::Error> {
    let rows: Option<Vec<Vec<Value>>> = Option::deserialize(de)?;
    Ok(rows
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect())
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

fn lenient_count<'de, D: Deserializer<'de>>(de: D) -> Result<u64, D::Error> {
    Ok(match Option::<Value>::deserialize(de)? {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().replace(',', "").parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn twse_cells_of_any_scalar_type_become_strings() {
        let env: TwseEnvelope = parse_envelope(
            "T86",
            Payload::Json(json!({
                "stat": "OK",
                "data": [["2330", "台積電", 1_000, null, true]]
            })),
        )
        .unwrap();
        assert!(env.is_ok());
        assert_eq!(env.data[0], vec!["2330", "台積電", "1000", "", "true"]);
        assert!(env.tables.is_empty());
    }

    #[test]
    fn twse_stat_is_case_insensitive() {
        let env: TwseEnvelope =
            parse_envelope("TWT49UDetail", Payload::Json(json!({"stat": "ok"}))).unwrap();
        assert!(env.is_ok());
        let env: TwseEnvelope = parse_envelope(
            "T86",
            Payload::Json(json!({"stat": "很抱歉，沒有符合條件的資料!"})),
        )
        .unwrap();
        assert!(!env.is_ok());
    }

    #[test]
    fn tpex_total_count_gates_rows() {
        let env: TpexEnvelope = parse_envelope(
            "dailyQuotes",
            Payload::Text(r#"{"tables":[{"totalCount":0,"data":[]},{"totalCount":"2","data":null}]}"#.into()),
        )
        .unwrap();
        assert!(!env.has_rows(0));
        assert!(env.has_rows(1));
        assert!(!env.has_rows(2));
        assert!(env.table("dailyQuotes", 1).unwrap().data.is_empty());
        assert!(matches!(
            env.table("dailyQuotes", 2),
            Err(TwdataError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn malformed_envelope_is_a_data_error() {
        let err = parse_envelope::<TpexEnvelope>("sectRatio", Payload::Json(json!({"tables": 3})))
            .unwrap_err();
        assert!(matches!(err, TwdataError::Data(_)));
        let err = parse_envelope::<TwseEnvelope>("T86", Payload::Text("<html>".into())).unwrap_err();
        assert!(matches!(err, TwdataError::Data(_)));
    }
}

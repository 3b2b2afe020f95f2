//! Canned portal responses keyed by endpoint and request parameters.

pub(crate) mod mops;
pub(crate) mod tpex;
pub(crate) mod twse;

/// Trading day every daily fixture is recorded for, as TWSE spells it.
pub(crate) const TWSE_DAY: &str = "20240102";
/// Same day in the TPEx request format.
pub(crate) const TPEX_DAY: &str = "2024/01/02";

/// True when the request's `startDate..=endDate` covers `day`.
///
/// Both portals use fixed-width, most-significant-first date strings, so a
/// lexical comparison is a date comparison.
pub(crate) fn in_range(req: &twdata_core::FetchRequest, day: &str) -> bool {
    match (req.param_value("startDate"), req.param_value("endDate")) {
        (Some(start), Some(end)) => start <= day && day <= end,
        _ => false,
    }
}

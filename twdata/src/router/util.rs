use twdata_core::{MarketBreadth, MarketInstitutional, MarketMargin, MarketTrades};
use twdata_types::{Capability, FetchReport, TwdataError};

use crate::core::tag_err;

/// Flatten a connector answer into the rows it contributes to a fan-out
/// report. "No data" answers contribute nothing.
pub trait IntoRows {
    /// Row type.
    type Row;

    /// The rows of this answer.
    fn into_rows(self) -> Vec<Self::Row>;
}

impl<T> IntoRows for Vec<T> {
    type Row = T;

    fn into_rows(self) -> Vec<T> {
        self
    }
}

impl<T> IntoRows for Option<Vec<T>> {
    type Row = T;

    fn into_rows(self) -> Vec<T> {
        self.unwrap_or_default()
    }
}

/// Single-record daily answers contribute their record, if any.
macro_rules! single_record_rows {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoRows for Option<$ty> {
                type Row = $ty;

                fn into_rows(self) -> Vec<$ty> {
                    self.into_iter().collect()
                }
            }
        )+
    };
}

single_record_rows!(MarketTrades, MarketInstitutional, MarketMargin, MarketBreadth);

/// Collapse the failures of a fan-out into one error.
///
/// Rules:
/// - no connector attempted → `Unsupported(capability)`,
/// - otherwise → `AllProvidersFailed(errors)`, nested aggregates flattened.
#[must_use]
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<TwdataError>,
) -> TwdataError {
    if !attempted_any {
        return TwdataError::unsupported(capability.to_string());
    }
    TwdataError::AllProvidersFailed(errors.into_iter().flat_map(TwdataError::flatten).collect())
}

/// Outcome of one connector in a fan-out: its name and, when it has the
/// capability, what it answered.
pub(crate) type Outcome<T> = (&'static str, Option<Result<Vec<T>, TwdataError>>);

/// Merge fan-out outcomes in registration order.
///
/// Succeeds when at least one attempted connector answered; the failures of
/// the others become warnings.
pub(crate) fn collect_report<T>(
    capability: Capability,
    outcomes: Vec<Outcome<T>>,
) -> Result<FetchReport<Vec<T>>, TwdataError> {
    let mut data: Vec<T> = Vec::new();
    let mut warnings: Vec<TwdataError> = Vec::new();
    let mut attempted_any = false;
    let mut any_ok = false;

    for (name, outcome) in outcomes {
        let Some(res) = outcome else {
            continue;
        };
        attempted_any = true;
        match res {
            Ok(rows) => {
                any_ok = true;
                data.extend(rows);
            }
            Err(e) => {
                tracing::warn!(target: "twdata::router", connector = name, %capability, error = %e, "connector failed");
                warnings.push(tag_err(name, e));
            }
        }
    }

    if !any_ok {
        return Err(collapse_errors(capability, attempted_any, warnings));
    }
    Ok(FetchReport { data, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_when_nobody_attempted() {
        let outcomes: Vec<Outcome<u8>> = vec![("a", None), ("b", None)];
        let err = collect_report(Capability::Quotes, outcomes).unwrap_err();
        assert_eq!(err, TwdataError::unsupported("quotes"));
    }

    #[test]
    fn partial_failure_is_a_warning() {
        let outcomes: Vec<Outcome<u8>> = vec![
            ("a", Some(Ok(vec![1, 2]))),
            ("b", Some(Err(TwdataError::Other("boom".into())))),
            ("c", Some(Ok(vec![3]))),
        ];
        let report = collect_report(Capability::Quotes, outcomes).unwrap();
        assert_eq!(report.data, vec![1, 2, 3]);
        assert_eq!(
            report.warnings,
            vec![TwdataError::connector("b", "unknown error: boom")]
        );
    }

    #[test]
    fn every_failure_is_fatal_and_flattened() {
        let outcomes: Vec<Outcome<u8>> = vec![
            ("a", Some(Err(TwdataError::provider_timeout("a", "quotes")))),
            (
                "b",
                Some(Err(TwdataError::AllProvidersFailed(vec![TwdataError::not_found("x")]))),
            ),
        ];
        match collect_report(Capability::Quotes, outcomes).unwrap_err() {
            TwdataError::AllProvidersFailed(es) => {
                assert_eq!(es.len(), 2);
                assert!(matches!(es[1], TwdataError::NotFound { .. }));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn empty_answers_still_count_as_success() {
        let outcomes: Vec<Outcome<u8>> = vec![("a", Some(Ok(vec![])))];
        let report = collect_report(Capability::Quotes, outcomes).unwrap();
        assert!(report.data.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn no_data_contributes_no_rows() {
        assert!(Option::<Vec<u8>>::None.into_rows().is_empty());
        assert_eq!(Some(vec![1u8]).into_rows(), vec![1]);
    }
}

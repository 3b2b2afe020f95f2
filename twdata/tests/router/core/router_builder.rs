use std::sync::Arc;

use twdata::{Exchange, ExchangeConnector, Twdata, TwdataConfig, TwdataError};

use crate::helpers::{Bare, fixture_tpex, fixture_twdata};

#[test]
fn build_requires_a_connector() {
    let err = Twdata::builder().build().err().unwrap();
    assert!(matches!(err, TwdataError::InvalidArg(_)));
}

#[test]
fn one_connector_per_exchange() {
    let err = Twdata::builder()
        .with_connector(fixture_tpex())
        .with_connector(Arc::new(Bare(Exchange::Tpex)))
        .build()
        .err()
        .unwrap();
    match err {
        TwdataError::InvalidArg(msg) => assert!(msg.contains("TPEx"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn exchanges_in_registration_order() {
    let (twdata, _) = fixture_twdata();
    assert_eq!(twdata.exchanges(), vec![Exchange::Twse, Exchange::Tpex]);
    assert_eq!(twdata.config(), &TwdataConfig::default());

    let tpex_first = Twdata::builder()
        .with_connector(fixture_tpex())
        .with_connector(Arc::new(Bare(Exchange::Twse)))
        .provider_timeout(std::time::Duration::from_secs(3))
        .build()
        .unwrap();
    assert_eq!(tpex_first.exchanges(), vec![Exchange::Tpex, Exchange::Twse]);
    assert_eq!(
        tpex_first.config().provider_timeout,
        Some(std::time::Duration::from_secs(3))
    );
}

#[test]
fn connector_keys_match_their_names() {
    let tpex = fixture_tpex();
    assert_eq!(tpex.key(), twdata_tpex::TpexConnector::KEY);
    assert_eq!(tpex.key().to_string(), "twdata-tpex");
    assert_eq!(Bare(Exchange::Twse).key().as_str(), "bare");
}

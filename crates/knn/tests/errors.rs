//! Integration tests for KnnError variants and data-level failures.

use carval_knn::{
    CarSample, DistanceWeights, KnnConfig, KnnError, KnnResult, QueryInput, suggest_price,
};
use carval_market::{AgeBracket, MarketError, MarketModel};

fn data() -> Vec<CarSample> {
    vec![
        CarSample::new("Toyota", "Corolla", 2021, 3_000_000.0),
        CarSample::new("Toyota", "Camry", 2019, 3_400_000.0),
    ]
}

fn query() -> QueryInput {
    QueryInput::new()
        .with_make("Toyota")
        .with_model("Corolla")
        .with_year(2021)
}

#[test]
fn error_invalid_round_step() {
    let config = KnnConfig::default().with_round_step(-50_000.0);
    let result = suggest_price(&query(), &data(), &config);
    assert!(matches!(result, Err(KnnError::InvalidRoundStep { step }) if step == -50_000.0));
}

#[test]
fn error_round_step_exceeds_band() {
    let exact = vec![CarSample::new("Toyota", "Corolla", 2021, 3_000_000.0)];
    let config = KnnConfig::new(1).with_round_step(5_000_000.0);
    let result = suggest_price(&query(), &exact, &config);
    assert!(matches!(
        result,
        Err(KnnError::RoundStepExceedsBand { step, min, max })
            if step == 5_000_000.0 && min == 2_700_000.0 && max == 4_700_000.0
    ));
}

#[test]
fn round_step_equal_to_band_max_is_accepted() {
    let config = KnnConfig::new(1).with_round_step(4_700_000.0);
    let r = suggest_price(&query(), &data(), &config).unwrap();
    assert_eq!(r.suggested_price(), Some(4_700_000.0));
}

#[test]
fn error_invalid_epsilon() {
    let config = KnnConfig::default().with_epsilon(f64::NAN);
    let result = suggest_price(&query(), &data(), &config);
    assert!(matches!(result, Err(KnnError::InvalidEpsilon { .. })));
}

#[test]
fn error_invalid_weight() {
    let weights = DistanceWeights {
        year: f64::INFINITY,
        ..Default::default()
    };
    let config = KnnConfig::default().with_weights(weights);
    let result = suggest_price(&query(), &data(), &config);
    assert!(matches!(
        result,
        Err(KnnError::InvalidWeight { name: "year", .. })
    ));
}

#[test]
fn error_invalid_market() {
    let market = MarketModel::default().with_age_brackets(vec![AgeBracket::up_to(3, 2.0)]);
    let config = KnnConfig::default().with_market(market);
    let result = suggest_price(&query(), &data(), &config);
    assert!(matches!(
        result,
        Err(KnnError::Market(MarketError::OpenBracketNotLast))
    ));
}

/// Config errors are reported even when the query would be gated anyway.
#[test]
fn config_checked_before_gating() {
    let config = KnnConfig::default().with_round_step(0.0);
    let result = suggest_price(&QueryInput::new(), &[], &config);
    assert!(result.is_err());
}

#[test]
fn missing_make_is_empty() {
    let q = QueryInput::new().with_model("Corolla").with_year(2021);
    let r = suggest_price(&q, &data(), &KnnConfig::default()).unwrap();
    assert_eq!(r, KnnResult::empty());
}

#[test]
fn missing_model_is_empty() {
    let q = QueryInput::new().with_make("Toyota").with_year(2021);
    let r = suggest_price(&q, &data(), &KnnConfig::default()).unwrap();
    assert_eq!(r.suggested_price(), None);
    assert!(r.neighbors().is_empty());
    assert_eq!(r.confidence(), 0.0);
}

#[test]
fn blank_model_is_empty() {
    let q = query().with_model("   ");
    let r = suggest_price(&q, &data(), &KnnConfig::default()).unwrap();
    assert_eq!(r, KnnResult::empty());
}

#[test]
fn unparsable_year_is_empty() {
    for year in ["", "twenty-twenty", "NaN", "inf"] {
        let q = query().with_year(year);
        let r = suggest_price(&q, &data(), &KnnConfig::default()).unwrap();
        assert_eq!(r, KnnResult::empty(), "year {year:?}");
    }
    let q = query().with_year(f64::NAN);
    let r = suggest_price(&q, &data(), &KnnConfig::default()).unwrap();
    assert_eq!(r, KnnResult::empty());
}

//! Property checks over a mixed dataset.

use carval_knn::{
    CarSample, DistanceWeights, KnnConfig, QueryInput, YearRange, distance, suggest_price,
};
use carval_market::MarketModel;

const MAKES: &[(&str, &str)] = &[
    ("Toyota", "Corolla"),
    ("Toyota", "Camry"),
    ("Honda", "Civic"),
    ("Hyundai", "Elantra"),
    ("Kia", "Rio"),
];
const CONDITIONS: &[&str] = &["poor", "fair", "good", "excellent", "like_new", "new", "mint"];
const FUELS: &[&str] = &["petrol", "diesel", "hybrid"];
const DESCRIPTIONS: &[&str] = &[
    "One owner, full service history",
    "Leather seats, sunroof, navigation",
    "Minor scratches on the rear bumper",
    "",
];

/// Deterministic spread of records across every field.
fn dataset() -> Vec<CarSample> {
    (0..60)
        .map(|i: usize| {
            let (make, model) = MAKES[i % MAKES.len()];
            let year = 2008 + (i * 7 % 17) as i32;
            let price = 1_500_000.0 + (i * 97_331 % 3_000_000) as f64;
            let mut s = CarSample::new(make, model, year, price)
                .with_condition(CONDITIONS[i % CONDITIONS.len()]);
            if i % 3 != 0 {
                s = s.with_fuel_type(FUELS[i % FUELS.len()]);
            }
            if i % 4 != 3 {
                s = s.with_description(DESCRIPTIONS[i % DESCRIPTIONS.len()]);
            }
            s
        })
        .collect()
}

fn queries() -> Vec<QueryInput> {
    let mut out = Vec::new();
    for (i, (make, model)) in MAKES.iter().enumerate() {
        for year in [2009, 2016, 2024, 2030] {
            let mut q = QueryInput::new()
                .with_make(*make)
                .with_model(*model)
                .with_year(year)
                .with_condition(CONDITIONS[(i + year as usize) % CONDITIONS.len()]);
            if year % 2 == 0 {
                q = q.with_fuel_type(FUELS[i % FUELS.len()]);
                q = q.with_description(DESCRIPTIONS[i % DESCRIPTIONS.len()]);
            }
            out.push(q);
        }
    }
    out
}

fn config(k: usize, step: f64) -> KnnConfig {
    KnnConfig::new(k)
        .with_round_step(step)
        .with_market(MarketModel::default().with_reference_year(2025))
}

#[test]
fn deterministic() {
    let data = dataset();
    for q in queries() {
        let a = suggest_price(&q, &data, &config(5, 50_000.0)).unwrap();
        let b = suggest_price(&q, &data, &config(5, 50_000.0)).unwrap();
        assert_eq!(
            a.suggested_price().map(f64::to_bits),
            b.suggested_price().map(f64::to_bits)
        );
        let da: Vec<u64> = a.neighbors().iter().map(|n| n.distance().to_bits()).collect();
        let db: Vec<u64> = b.neighbors().iter().map(|n| n.distance().to_bits()).collect();
        assert_eq!(da, db);
        assert_eq!(a, b);
    }
}

#[test]
fn inputs_not_mutated() {
    let data = dataset();
    let before_data = data.clone();
    for q in queries() {
        let before_q = q.clone();
        suggest_price(&q, &data, &config(7, 1_000.0)).unwrap();
        assert_eq!(q, before_q);
    }
    assert_eq!(data, before_data);
}

#[test]
fn neighbors_sorted_and_counted() {
    let data = dataset();
    for k in [1, 5, 59, 60, 500] {
        for q in queries() {
            let r = suggest_price(&q, &data, &config(k, 50_000.0)).unwrap();
            assert_eq!(r.neighbors().len(), k.min(data.len()));
            for pair in r.neighbors().windows(2) {
                assert!(pair[0].distance() <= pair[1].distance());
                if pair[0].distance() == pair[1].distance() {
                    assert!(pair[0].index() < pair[1].index());
                }
            }
        }
    }
}

#[test]
fn suggestion_in_band_and_on_step() {
    let data = dataset();
    for step in [1_000.0, 50_000.0, 100_000.0, 300_000.0] {
        for q in queries() {
            let r = suggest_price(&q, &data, &config(5, step)).unwrap();
            let price = r.suggested_price().expect("complete query");
            assert!((2_700_000.0..=4_700_000.0).contains(&price), "price {price}");
            assert_eq!(price % step, 0.0, "price {price} step {step}");
            assert_eq!(r.confidence(), 0.85);
        }
    }
}

#[test]
fn distances_non_negative_and_self_zero() {
    let data = dataset();
    let range = YearRange::from_samples(&data);
    let weights = DistanceWeights::default();
    for q in queries() {
        for s in &data {
            assert!(distance(&q, s, range, &weights) >= 0.0);
        }
    }
    for s in &data {
        let mut twin = s.clone();
        twin.price *= 2.0;
        assert_eq!(distance(&QueryInput::from(s), &twin, range, &weights), 0.0);
    }
}

#[test]
fn neighbor_distances_match_public_metric() {
    let data = dataset();
    let range = YearRange::from_samples(&data);
    let weights = DistanceWeights::default();
    for q in queries() {
        let r = suggest_price(&q, &data, &config(10, 1_000.0)).unwrap();
        for n in r.neighbors() {
            assert_eq!(n.distance(), distance(&q, &data[n.index()], range, &weights));
        }
    }
}

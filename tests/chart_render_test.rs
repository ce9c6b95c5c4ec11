//! Chart rendering round-trips: every chart must come back as a decodable
//! PNG with the documented fixed dimensions.

use std::sync::Arc;

use image::GenericImageView;
use purser::analysis::charts::{CHART_HEIGHT, CHART_WIDTH, PIE_SIZE};
use purser::analysis::Analyzer;
use purser::dataset::{Dataset, Passenger};
use purser::error::PurserError;

fn passenger(
    id: u32,
    sex: &str,
    age: Option<f64>,
    fare: f64,
    pclass: u8,
    embarked: Option<&str>,
    survived: u8,
) -> Passenger {
    Passenger {
        passenger_id: id,
        survived,
        pclass,
        name: format!("Passenger {id}"),
        sex: sex.to_string(),
        age,
        sibsp: 0,
        parch: 0,
        ticket: format!("T{id}"),
        fare,
        cabin: None,
        embarked: embarked.map(|s| s.to_string()),
    }
}

fn fixture() -> Analyzer {
    let records = vec![
        passenger(1, "male", Some(10.0), 10.0, 1, Some("S"), 0),
        passenger(2, "male", Some(20.0), 10.0, 3, Some("S"), 0),
        passenger(3, "male", Some(30.0), 20.0, 3, Some("S"), 1),
        passenger(4, "male", Some(40.0), 20.0, 3, Some("C"), 1),
        passenger(5, "male", None, 30.0, 2, Some("C"), 0),
        passenger(6, "male", None, 30.0, 3, Some("Q"), 0),
        passenger(7, "female", None, 40.0, 1, Some("S"), 1),
        passenger(8, "female", None, 40.0, 2, Some("S"), 1),
        passenger(9, "female", None, 50.0, 2, Some("C"), 1),
        passenger(10, "female", None, 50.0, 3, Some("S"), 0),
    ];
    Analyzer::new(Arc::new(Dataset::from_records(records)))
}

fn assert_png_dimensions(bytes: &[u8], width: u32, height: u32) {
    let img = image::load_from_memory(bytes).expect("chart bytes must decode as an image");
    assert_eq!(img.dimensions(), (width, height));
}

#[test]
fn test_age_histogram_dimensions() {
    let png = fixture().age_histogram().unwrap();
    assert_png_dimensions(&png, CHART_WIDTH, CHART_HEIGHT);
}

#[test]
fn test_fare_histogram_dimensions() {
    let png = fixture().fare_histogram().unwrap();
    assert_png_dimensions(&png, CHART_WIDTH, CHART_HEIGHT);
}

#[test]
fn test_gender_pie_chart_is_square() {
    let png = fixture().gender_pie_chart().unwrap();
    assert_png_dimensions(&png, PIE_SIZE, PIE_SIZE);
}

#[test]
fn test_embarkation_bar_chart_dimensions() {
    let png = fixture().embarkation_bar_chart().unwrap();
    assert_png_dimensions(&png, CHART_WIDTH, CHART_HEIGHT);
}

#[test]
fn test_survival_by_class_bar_chart_dimensions() {
    let png = fixture().survival_by_class_bar_chart().unwrap();
    assert_png_dimensions(&png, CHART_WIDTH, CHART_HEIGHT);
}

#[test]
fn test_rendering_is_deterministic_across_calls() {
    // No drawing state may leak between invocations
    let analyzer = fixture();
    let first = analyzer.gender_pie_chart().unwrap();
    analyzer.age_histogram().unwrap();
    let second = analyzer.gender_pie_chart().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_histogram_of_empty_column_fails_cleanly() {
    let records = vec![passenger(1, "male", None, 10.0, 3, Some("S"), 0)];
    let analyzer = Analyzer::new(Arc::new(Dataset::from_records(records)));
    assert!(matches!(
        analyzer.age_histogram(),
        Err(PurserError::DataIntegrity(_))
    ));
}

#[test]
fn test_single_distinct_fare_still_renders() {
    // Degenerate histogram input: all values identical
    let records = vec![
        passenger(1, "male", Some(30.0), 8.05, 3, Some("S"), 0),
        passenger(2, "male", Some(30.0), 8.05, 3, Some("S"), 1),
    ];
    let analyzer = Analyzer::new(Arc::new(Dataset::from_records(records)));
    let png = analyzer.fare_histogram().unwrap();
    assert_png_dimensions(&png, CHART_WIDTH, CHART_HEIGHT);
}

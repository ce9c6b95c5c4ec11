//! Dataset loading and metadata tests.

use std::fs;

use purser::dataset::Dataset;
use purser::error::PurserError;
use tempfile::TempDir;

const SAMPLE_CSV: &str = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S
2,1,1,\"Cumings, Mrs. John Bradley (Florence Briggs Thayer)\",female,38,1,0,PC 17599,71.2833,C85,C
6,0,3,\"Moran, Mr. James\",male,,0,0,330877,8.4583,,Q
";

#[test]
fn test_load_from_explicit_path() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("manifest.csv");
    fs::write(&path, SAMPLE_CSV)?;

    let dataset = Dataset::load_from(&path)?;
    assert_eq!(dataset.len(), 3);

    let records = dataset.records();
    assert_eq!(records[0].sex, "male");
    assert_eq!(records[1].cabin.as_deref(), Some("C85"));
    assert_eq!(records[2].age, None);
    Ok(())
}

#[test]
fn test_missing_file_is_dataset_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-file.csv");

    match Dataset::load_from(&path) {
        Err(PurserError::DatasetNotFound(msg)) => {
            assert!(msg.contains("no-such-file.csv"));
        }
        other => panic!("expected DatasetNotFound, got {other:?}"),
    }
}

#[test]
fn test_malformed_csv_is_csv_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.csv");
    fs::write(&path, "PassengerId,Survived\nnot-a-number,0\n").unwrap();

    assert!(matches!(
        Dataset::load_from(&path),
        Err(PurserError::Csv(_))
    ));
}

#[test]
fn test_bundled_dataset_loads() {
    // The sample manifest ships with the crate and resolves from the
    // manifest directory.
    let dataset = Dataset::load().unwrap();
    assert_eq!(dataset.len(), 20);

    let info = dataset.info();
    assert_eq!(info.shape, [20, 12]);
    assert_eq!(info.columns[0], "PassengerId");
    assert_eq!(info.columns[11], "Embarked");
    // Rows 6, 18 and 20 of the sample have no age
    assert_eq!(info.missing_values["Age"], 3);
    assert_eq!(info.missing_values["Embarked"], 0);
}

#[test]
fn test_info_serializes_to_json() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("manifest.csv");
    fs::write(&path, SAMPLE_CSV)?;

    let info = Dataset::load_from(&path)?.info();
    let json = serde_json::to_value(&info)?;
    assert_eq!(json["shape"][0], 3);
    assert_eq!(json["dtypes"]["Fare"], "float");
    assert_eq!(json["missing_values"]["Cabin"], 2);
    Ok(())
}

//! The passenger record type, one per CSV row.

use serde::{Deserialize, Serialize};

/// A single passenger record from the Titanic manifest.
///
/// Field names follow the CSV header of the Kaggle-style dataset. `Age`,
/// `Cabin`, and `Embarked` may be empty in the source file and are modeled
/// as `Option`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(rename = "PassengerId")]
    pub passenger_id: u32,
    /// Survival flag stored as 0/1 in the source data.
    #[serde(rename = "Survived")]
    pub survived: u8,
    /// Ordinal ticket class: 1, 2 or 3.
    #[serde(rename = "Pclass")]
    pub pclass: u8,
    #[serde(rename = "Name")]
    pub name: String,
    /// "male" or "female".
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Age")]
    pub age: Option<f64>,
    /// Number of siblings/spouses aboard.
    #[serde(rename = "SibSp")]
    pub sibsp: u32,
    /// Number of parents/children aboard.
    #[serde(rename = "Parch")]
    pub parch: u32,
    #[serde(rename = "Ticket")]
    pub ticket: String,
    #[serde(rename = "Fare")]
    pub fare: f64,
    #[serde(rename = "Cabin")]
    pub cabin: Option<String>,
    /// Embarkation port code: "S", "C" or "Q".
    #[serde(rename = "Embarked")]
    pub embarked: Option<String>,
}

impl Passenger {
    /// Whether this passenger survived.
    pub fn survived(&self) -> bool {
        self.survived != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_row_parse() {
        let data = "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
                    1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S\n\
                    6,0,3,\"Moran, Mr. James\",male,,0,0,330877,8.4583,,Q\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<Passenger> = reader.deserialize().collect::<Result<_, _>>().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Braund, Mr. Owen Harris");
        assert_eq!(rows[0].age, Some(22.0));
        assert_eq!(rows[0].embarked.as_deref(), Some("S"));
        assert!(!rows[0].survived());
        // Empty Age cell deserializes to None
        assert_eq!(rows[1].age, None);
        assert!(rows[1].cabin.is_none());
    }
}

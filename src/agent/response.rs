//! The structured result of processing one query.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Response to a single query: a text answer plus an optional rendered
/// chart.
///
/// `answer` may legitimately be empty when a topic matched but no intent
/// keyword did. On the wire, `visualization` is base64-encoded PNG bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub answer: String,
    #[serde(with = "base64_bytes")]
    pub visualization: Option<Vec<u8>>,
}

impl Response {
    /// A text-only response.
    pub fn text<S: Into<String>>(answer: S) -> Self {
        Response {
            answer: answer.into(),
            visualization: None,
        }
    }

    /// Whether this response carries a rendered chart.
    pub fn has_visualization(&self) -> bool {
        self.visualization.is_some()
    }
}

/// Serde adapter encoding `Option<Vec<u8>>` as a base64 string.
mod base64_bytes {
    use super::*;
    use serde::{Deserializer, Serializer, de};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_only_serialization() {
        let response = Response::text("Gender Distribution:\n");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["answer"], "Gender Distribution:\n");
        assert!(json["visualization"].is_null());
    }

    #[test]
    fn test_visualization_base64_round_trip() {
        let response = Response {
            answer: "Here is the histogram of passenger ages:".to_string(),
            visualization: Some(vec![0x89, b'P', b'N', b'G']),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(&STANDARD.encode([0x89, b'P', b'N', b'G'])));

        let decoded: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_empty_answer_is_legal() {
        let response = Response::default();
        assert_eq!(response.answer, "");
        assert!(!response.has_visualization());
    }
}

//! Query topic classification.
//!
//! A query is matched against an ordered chain of keyword lists; the first
//! list with a hit decides the topic. The chain is a fixed priority order,
//! not a scored classifier: "how old were the male passengers" is a Gender
//! query because Gender is checked first.
//!
//! Matching is plain case-insensitive substring containment, so "male" also
//! matches inside "female". That is the intended behavior.

/// The primary subject category a query is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Gender,
    Age,
    Fare,
    Embarkation,
    Survival,
    Summary,
    Unrecognized,
}

const GENDER_KEYWORDS: [&str; 5] = ["male", "male percentage", "male passengers", "gender", "sex"];
const AGE_KEYWORDS: [&str; 3] = ["age", "ages", "old"];
const FARE_KEYWORDS: [&str; 4] = ["fare", "ticket", "price", "cost"];
const EMBARKATION_KEYWORDS: [&str; 4] = ["embark", "port", "board", "from"];
const SURVIVAL_KEYWORDS: [&str; 3] = ["surviv", "died", "dead"];
const SUMMARY_KEYWORDS: [&str; 3] = ["summary", "overview", "info"];

/// Whether any of the keywords occurs in the (already lower-cased) query.
pub(crate) fn contains_any(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| query.contains(k))
}

impl Topic {
    /// Classify a lower-cased query into exactly one topic.
    pub fn classify(query: &str) -> Topic {
        if contains_any(query, &GENDER_KEYWORDS) {
            Topic::Gender
        } else if contains_any(query, &AGE_KEYWORDS) {
            Topic::Age
        } else if contains_any(query, &FARE_KEYWORDS) {
            Topic::Fare
        } else if contains_any(query, &EMBARKATION_KEYWORDS) {
            Topic::Embarkation
        } else if contains_any(query, &SURVIVAL_KEYWORDS) {
            Topic::Survival
        } else if contains_any(query, &SUMMARY_KEYWORDS) {
            Topic::Summary
        } else {
            Topic::Unrecognized
        }
    }
}

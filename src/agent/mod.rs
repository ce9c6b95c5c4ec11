//! The query dispatcher.
//!
//! [`QueryAgent`] maps a raw query string to a [`Topic`] plus per-topic
//! intent keywords, invokes the matching [`Analyzer`] operations, and
//! assembles the [`Response`]. It is stateless across calls: each
//! `process_query` is an independent classify → route → compute pass.

use log::{debug, warn};

use crate::analysis::Analyzer;
use crate::error::Result;

pub mod response;
pub mod topic;

pub use response::Response;
pub use topic::Topic;

use topic::contains_any;

/// Caption accompanying the age histogram.
pub const AGE_HISTOGRAM_CAPTION: &str = "Here is the histogram of passenger ages:";
/// Caption accompanying the fare histogram.
pub const FARE_HISTOGRAM_CAPTION: &str = "Here is the histogram of ticket fares:";

/// Stateless dispatcher from free-text queries to analyzer operations.
#[derive(Debug, Clone)]
pub struct QueryAgent {
    analyzer: Analyzer,
}

impl QueryAgent {
    /// Create an agent over an analyzer.
    pub fn new(analyzer: Analyzer) -> Self {
        QueryAgent { analyzer }
    }

    /// The underlying analyzer.
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Process one query. Analyzer failures never escape: they are
    /// converted into a user-visible message in the answer text.
    pub fn process_query(&self, query: &str) -> Response {
        match self.dispatch(query) {
            Ok(response) => response,
            Err(e) => {
                warn!("query '{query}' failed: {e}");
                Response::text(format!("Sorry, I could not answer that: {e}"))
            }
        }
    }

    fn dispatch(&self, query: &str) -> Result<Response> {
        let query = query.to_lowercase();
        let topic = Topic::classify(&query);
        debug!("classified query as {topic:?}");

        let mut response = Response::default();
        match topic {
            Topic::Gender => {
                // Text and chart fire independently; neither may fire,
                // leaving an empty answer.
                if query.contains("percentage") || query.contains("what") {
                    response.answer = self.analyzer.gender_breakdown()?;
                }
                if contains_any(&query, &["show", "pie", "chart", "visual"]) {
                    response.visualization = Some(self.analyzer.gender_pie_chart()?);
                }
            }
            Topic::Age => {
                if contains_any(&query, &["average", "mean", "median"]) {
                    response.answer = self.analyzer.age_statistics()?;
                } else if contains_any(&query, &["histogram", "show", "distribution"]) {
                    response.answer = AGE_HISTOGRAM_CAPTION.to_string();
                    response.visualization = Some(self.analyzer.age_histogram()?);
                } else {
                    response.answer = self.analyzer.age_statistics()?;
                }
            }
            Topic::Fare => {
                if contains_any(&query, &["average", "mean", "what"]) {
                    response.answer = self.analyzer.fare_statistics()?;
                } else if contains_any(&query, &["histogram", "show", "distribution"]) {
                    response.answer = FARE_HISTOGRAM_CAPTION.to_string();
                    response.visualization = Some(self.analyzer.fare_histogram()?);
                } else {
                    response.answer = self.analyzer.fare_statistics()?;
                }
            }
            Topic::Embarkation => {
                // Same independent text/chart rule set as Gender
                if query.contains("how many")
                    || query.contains("count")
                    || query.contains("each")
                {
                    response.answer = self.analyzer.embarkation_breakdown()?;
                }
                if contains_any(&query, &["show", "bar", "chart", "visual"]) {
                    response.visualization = Some(self.analyzer.embarkation_bar_chart()?);
                }
            }
            Topic::Survival => {
                response.answer = self.analyzer.survival_breakdown()?;
                if contains_any(&query, &["show", "chart", "class"]) {
                    response.visualization = Some(self.analyzer.survival_by_class_bar_chart()?);
                }
            }
            Topic::Summary => {
                response.answer = self.analyzer.summary()?;
            }
            Topic::Unrecognized => {
                response.answer = help_message(self.analyzer.dataset().len());
            }
        }

        Ok(response)
    }
}

/// Fixed help text for unrecognized queries, ending with the live
/// passenger count.
pub fn help_message(passenger_count: usize) -> String {
    format!(
        "I can help you analyze the Titanic dataset! Try asking about:\n\
         - Gender distribution (e.g., 'What percentage were male?')\n\
         - Age analysis (e.g., 'Show me a histogram of ages')\n\
         - Ticket fares (e.g., 'What was the average fare?')\n\
         - Embarkation ports (e.g., 'How many from each port?')\n\
         \nCurrent dataset has {passenger_count} passengers."
    )
}

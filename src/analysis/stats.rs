//! Formatted statistical operations.
//!
//! Each operation returns ready-to-display text. Percentages and currency
//! values are rounded to two decimal places; currency is prefixed with `$`.
//!
//! Two denominators are in play and deliberately differ: gender percentages
//! are computed over the total record count, while embarkation percentages
//! are computed over the count of records with a non-null port.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::dataset::COLUMNS;
use crate::error::{PurserError, Result};

use super::Analyzer;

lazy_static! {
    /// Expansion of embarkation port codes to full names. Unmapped codes
    /// pass through unchanged.
    pub static ref PORT_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("S", "Southampton");
        m.insert("C", "Cherbourg");
        m.insert("Q", "Queenstown");
        m
    };
}

/// Five-number summary of a numeric column.
#[derive(Debug, Clone, Copy)]
pub struct NumericSummary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std: f64,
}

/// Arithmetic mean. `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median: middle value, or the mean of the two middle values for an even
/// count. `None` for an empty slice.
pub(crate) fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation (N-1 denominator). `None` for fewer than two
/// values.
pub(crate) fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let variance =
        values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Count distinct values, ordered by descending count with ties broken by
/// first appearance in the input.
pub(crate) fn value_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Summarize a numeric column. Fails with a data integrity error if the
/// column is empty or has too few values for a standard deviation.
pub(crate) fn describe(values: &[f64], column: &str) -> Result<NumericSummary> {
    let mean = mean(values).ok_or_else(|| {
        PurserError::data_integrity(format!("column '{column}' has no values to summarize"))
    })?;
    let median = median(values).unwrap_or(mean);
    let std = sample_std(values).ok_or_else(|| {
        PurserError::data_integrity(format!(
            "column '{column}' has too few values for a standard deviation"
        ))
    })?;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(NumericSummary {
        mean,
        median,
        min,
        max,
        std,
    })
}

/// Capitalize the first character, lowercasing the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

impl Analyzer {
    /// Dataset summary: record count, column list, overall survival rate.
    pub fn summary(&self) -> Result<String> {
        let rate = self.survival_rate()?;
        Ok(format!(
            "\nTitanic Dataset Summary:\n- Total Passengers: {}\n- Columns: {}\n- Survival Rate: {:.2}%\n",
            self.dataset().len(),
            COLUMNS.join(", "),
            rate
        ))
    }

    /// Count and percentage of each sex, percentages over the total record
    /// count.
    pub fn gender_breakdown(&self) -> Result<String> {
        let records = self.dataset().records();
        if records.is_empty() {
            return Err(PurserError::data_integrity(
                "cannot compute gender distribution over an empty dataset",
            ));
        }

        let total = records.len() as f64;
        let male_count = records.iter().filter(|r| r.sex == "male").count();
        let female_count = records.iter().filter(|r| r.sex == "female").count();
        let male_pct = male_count as f64 / total * 100.0;
        let female_pct = female_count as f64 / total * 100.0;

        Ok(format!(
            "Gender Distribution:\n- Male: {male_count} ({male_pct:.2}%)\n- Female: {female_count} ({female_pct:.2}%)\n"
        ))
    }

    /// Mean, median, min, max, and sample standard deviation of the
    /// non-null ages.
    pub fn age_statistics(&self) -> Result<String> {
        let ages = self.ages();
        let s = describe(&ages, "Age")?;
        Ok(format!(
            "Age Statistics:\n- Mean Age: {:.2} years\n- Median Age: {:.2} years\n- Min Age: {:.2} years\n- Max Age: {:.2} years\n- Std Dev: {:.2}\n",
            s.mean, s.median, s.min, s.max, s.std
        ))
    }

    /// Mean, median, min, max, and sample standard deviation of the fares.
    pub fn fare_statistics(&self) -> Result<String> {
        let fares = self.fares();
        let s = describe(&fares, "Fare")?;
        Ok(format!(
            "Ticket Fare Statistics:\n- Mean Fare: ${:.2}\n- Median Fare: ${:.2}\n- Min Fare: ${:.2}\n- Max Fare: ${:.2}\n- Std Dev: ${:.2}\n",
            s.mean, s.median, s.min, s.max, s.std
        ))
    }

    /// Count and percentage of each embarkation port, most common first.
    /// Percentages are over the non-null port count.
    pub fn embarkation_breakdown(&self) -> Result<String> {
        let ports: Vec<&str> = self
            .dataset()
            .records()
            .iter()
            .filter_map(|r| r.embarked.as_deref())
            .collect();
        if ports.is_empty() {
            return Err(PurserError::data_integrity(
                "column 'Embarked' has no values to summarize",
            ));
        }

        let total = ports.len() as f64;
        let mut result = String::from("Embarkation Port Distribution:\n");
        for (code, count) in value_counts(ports.iter().copied()) {
            let pct = count as f64 / total * 100.0;
            let name: &str = match PORT_NAMES.get(code.as_str()) {
                Some(name) => name,
                None => &code,
            };
            result.push_str(&format!(
                "- {name} ({code}): {count} passengers ({pct:.2}%)\n"
            ));
        }
        Ok(result)
    }

    /// Overall survival rate, then rates grouped by sex and by class.
    pub fn survival_breakdown(&self) -> Result<String> {
        let overall = self.survival_rate()?;
        let records = self.dataset().records();

        let mut result = String::from("Survival Analysis:\n");
        result.push_str(&format!("- Overall Survival Rate: {overall:.2}%\n\n"));

        result.push_str("By Sex:\n");
        for (sex, rate) in grouped_rates(records.iter().map(|r| (r.sex.clone(), r.survived()))) {
            result.push_str(&format!("  - {}: {rate:.2}%\n", capitalize(&sex)));
        }

        result.push_str("\nBy Class:\n");
        for (class, rate) in
            grouped_rates(records.iter().map(|r| (r.pclass, r.survived())))
        {
            result.push_str(&format!("  - Class {class}: {rate:.2}%\n"));
        }

        Ok(result)
    }
}

/// Mean survival percentage per group key, in ascending key order.
fn grouped_rates<K, I>(pairs: I) -> Vec<(K, f64)>
where
    K: Ord,
    I: IntoIterator<Item = (K, bool)>,
{
    let mut groups: Vec<(K, usize, usize)> = Vec::new();
    for (key, survived) in pairs {
        match groups.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, total, hits)) => {
                *total += 1;
                if survived {
                    *hits += 1;
                }
            }
            None => groups.push((key, 1, usize::from(survived))),
        }
    }
    groups.sort_by(|a, b| a.0.cmp(&b.0));
    groups
        .into_iter()
        .map(|(k, total, hits)| (k, hits as f64 / total as f64 * 100.0))
        .collect()
}

//! # Purser
//!
//! A natural-language analytics engine for the Titanic passenger manifest.
//!
//! Free-text questions are classified into a fixed set of topics by an
//! ordered keyword chain, routed to precomputed statistical summaries and
//! chart renderings over the in-memory dataset, and answered with text plus
//! an optional PNG image.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Rule-based topic and intent classification
//! - Statistical summaries with exact, stable text formatting
//! - Self-contained PNG chart rendering
//! - Read-only dataset shared across queries, no locking
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use purser::agent::QueryAgent;
//! use purser::analysis::Analyzer;
//! use purser::dataset::Dataset;
//!
//! let dataset = Arc::new(Dataset::load()?);
//! let agent = QueryAgent::new(Analyzer::new(dataset));
//!
//! let response = agent.process_query("What percentage of passengers were male?");
//! println!("{}", response.answer);
//! # Ok::<(), purser::error::PurserError>(())
//! ```

pub mod agent;
pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Flavour table loading for the dramwise recommender.
//!
//! Responsibilities:
//! - Open tables with capability-scoped filesystem access.
//! - Parse delimited text into a validated [`Dataset`](dramwise_core::Dataset).
//!
//! Boundaries:
//! - Do not encode recommendation rules (live in `dramwise-scorer`).
//!
//! # Examples
//! ```no_run
//! use camino::Utf8Path;
//! use dramwise_core::AttributeSet;
//! use dramwise_data::CsvDatasetLoader;
//!
//! # fn main() -> Result<(), dramwise_data::LoadError> {
//! let dataset = CsvDatasetLoader::default()
//!     .load(Utf8Path::new("whiskies.txt"), &AttributeSet::default())?;
//! println!("{} distilleries", dataset.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod csv_loader;
mod error;
pub mod fs;

pub use csv_loader::{CsvDatasetLoader, DEFAULT_KEY_COLUMN};
pub use error::LoadError;

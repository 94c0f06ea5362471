// File: crates/hoverplot-core/src/dataset.rs
// Summary: Raw dataset records as supplied by the loader, JSON parsing, and versioned handles.
// Numeric fields are optional on the wire; views turn a missing value into NaN.

use std::ops::Deref;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::error::{ChartError, Result};

/// One month of the incident summary.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MonthRecord {
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub count: Option<f64>,
    #[serde(default)]
    pub highest_death: Option<f64>,
    /// Chronological position of the month; band order follows this, not input order.
    #[serde(default)]
    pub order: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MonthsDataset {
    pub months: Vec<MonthRecord>,
}

/// One state of the per-state summary. Field names follow the upstream feed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct StateRecord {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub abreviation: Option<String>,
    #[serde(default)]
    pub count: Option<f64>,
    #[serde(default)]
    pub male_count: Option<f64>,
    #[serde(default)]
    pub female_count: Option<f64>,
    #[serde(default)]
    pub twelve_count: Option<f64>,
    #[serde(default)]
    pub thirt_count: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct StatesDataset {
    pub states: Vec<StateRecord>,
}

/// A top-level dataset object holding its rows under one key.
pub trait RawDataset: DeserializeOwned {
    const KEY: &'static str;
    fn row_count(&self) -> usize;
}

impl RawDataset for MonthsDataset {
    const KEY: &'static str = "months";
    fn row_count(&self) -> usize { self.months.len() }
}

impl RawDataset for StatesDataset {
    const KEY: &'static str = "states";
    fn row_count(&self) -> usize { self.states.len() }
}

/// Parse a dataset, rejecting objects without the expected row array.
pub fn parse_dataset<D: RawDataset>(json: &str) -> Result<D> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| {
        warn!(key = D::KEY, error = %e, "dataset is not valid json");
        ChartError::Json(e)
    })?;
    if !value.get(D::KEY).is_some_and(serde_json::Value::is_array) {
        warn!(key = D::KEY, "dataset has no row array");
        return Err(ChartError::InvalidDatasetShape { key: D::KEY });
    }
    Ok(serde_json::from_value(value)?)
}

impl MonthsDataset {
    pub fn from_json(json: &str) -> Result<Self> {
        parse_dataset(json)
    }
}

impl StatesDataset {
    pub fn from_json(json: &str) -> Result<Self> {
        parse_dataset(json)
    }
}

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

/// Immutable dataset plus the version that identifies it for change detection.
///
/// Clones share data and version; wrapping data again, even equal data, yields a new version.
#[derive(Debug)]
pub struct DatasetHandle<T> {
    version: u64,
    data: Rc<T>,
}

impl<T> DatasetHandle<T> {
    pub fn new(data: T) -> Self {
        Self { version: NEXT_VERSION.fetch_add(1, Ordering::Relaxed), data: Rc::new(data) }
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

impl<T> Clone for DatasetHandle<T> {
    fn clone(&self) -> Self {
        Self { version: self.version, data: Rc::clone(&self.data) }
    }
}

impl<T> Deref for DatasetHandle<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.data
    }
}

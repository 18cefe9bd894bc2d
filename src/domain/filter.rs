// src/domain/filter.rs

use crate::domain::property::{valid, PropertySummary};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("payload must be an array of properties")]
    NotAnArray,

    #[error(
        "property at index {index} is missing one or more required keys \
         (address, propertyTypeId, readyState, reference, shortId, status, type, workflow)"
    )]
    MissingRequiredKeys { index: usize },
}

/// Field/value pairs a property must match to be included in the output.
///
/// Values are compared with strict JSON equality: `"3"` does not match `3`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    fields: Vec<(String, Value)>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required `field == value` pair.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    /// Completed home valuations: `type == "htv"` and `workflow == "completed"`.
    pub fn completed_htv() -> Self {
        Self::new().with("type", "htv").with("workflow", "completed")
    }

    /// True when every pair is present on `property` with an equal value.
    /// An empty criteria set matches everything.
    pub fn matches(&self, property: &Value) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| property.get(field) == Some(expected))
    }
}

/// Validates every property in `properties` and summarises the ones matching `criteria`.
///
/// Processing stops at the first invalid property and no partial results are
/// returned. Output order follows input order.
pub fn filter_properties(
    properties: &Value,
    criteria: Option<&FilterCriteria>,
) -> Result<Vec<PropertySummary>, FilterError> {
    let properties = properties.as_array().ok_or(FilterError::NotAnArray)?;

    let mut results = Vec::new();
    for (index, property) in properties.iter().enumerate() {
        if !valid(property) {
            debug!(index, "property failed required-key validation");
            return Err(FilterError::MissingRequiredKeys { index });
        }

        if criteria.map_or(true, |c| c.matches(property)) {
            // valid() guarantees an object here
            if let Some(obj) = property.as_object() {
                results.push(PropertySummary::from_property(obj));
            }
        }
    }

    debug!(
        total = properties.len(),
        matched = results.len(),
        "filtered properties"
    );
    Ok(results)
}

// src/domain/property.rs

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Top-level keys every property in a payload must carry.
/// A key counts as present even when its value is `null`, `0`, `false` or `""`.
pub const REQUIRED_KEYS: [&str; 8] = [
    "address",
    "propertyTypeId",
    "readyState",
    "reference",
    "shortId",
    "status",
    "type",
    "workflow",
];

/// Address fields joined into `concataddress`, in output order.
pub const ADDRESS_PARTS: [&str; 5] = ["unitNumber", "buildingNumber", "street", "suburb", "postcode"];

/// The summary returned for every property that satisfies the filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySummary {
    pub concataddress: String,
    #[serde(rename = "type")]
    pub property_type: Value,
    pub workflow: Value,
}

impl PropertySummary {
    /// Builds the summary for an already validated property object.
    pub fn from_property(property: &Map<String, Value>) -> Self {
        PropertySummary {
            concataddress: property
                .get("address")
                .map(concat_address)
                .unwrap_or_default(),
            property_type: property.get("type").cloned().unwrap_or(Value::Null),
            workflow: property.get("workflow").cloned().unwrap_or(Value::Null),
        }
    }
}

/// Returns true if `property` is a JSON object holding every key in [`REQUIRED_KEYS`].
pub fn valid(property: &Value) -> bool {
    match property.as_object() {
        Some(obj) => REQUIRED_KEYS.iter().all(|key| obj.contains_key(*key)),
        None => false,
    }
}

/// Joins the truthy address parts with single spaces.
///
/// Anything other than an object yields an empty string.
pub fn concat_address(address: &Value) -> String {
    let Some(address) = address.as_object() else {
        return String::new();
    };

    let mut out = String::new();
    for key in ADDRESS_PARTS {
        if let Some(part) = address.get(key).and_then(address_part) {
            out.push_str(&part);
            out.push(' ');
        }
    }

    out.trim().to_string()
}

// null, false, 0, "" and nested structures contribute nothing.
fn address_part(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => render_number(n),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

// Whole floats within the exactly representable range print without a
// fractional part, so `2198.0` and `1e3` read as `2198` and `1000`.
fn render_number(n: &Number) -> Option<String> {
    const MAX_SAFE: f64 = 9_007_199_254_740_992.0;

    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }

    let f = n.as_f64().filter(|f| *f != 0.0 && f.is_finite())?;
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE {
        Some((f as i64).to_string())
    } else {
        Some(f.to_string())
    }
}

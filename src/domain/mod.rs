pub mod filter;
pub mod property;

pub use filter::{filter_properties, FilterCriteria};
pub use property::PropertySummary;

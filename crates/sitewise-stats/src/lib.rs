//! Small descriptive-statistics helpers for search reporting.

pub mod descriptive;

pub use self::descriptive::DescriptiveStats;

//! Domain model for weighted-criteria site search.
//!
//! This crate defines the two inputs every other part of the system works
//! with:
//!
//! 1. **Criteria configuration** ([`config`]) - the scored dimensions of a
//!    search: ordered criterion ids, display labels, a shared value range,
//!    polarity flags, and default weights. Supplied raw (e.g. from a JSON
//!    file), validated once, and passed around as an immutable
//!    [`CriteriaConfig`].
//!
//! 2. **Candidates** ([`candidate`]) - a [`Location`] (one attribute value
//!    per criterion) and a [`WeightVector`] (one importance multiplier per
//!    criterion), plus their random generation.
//!
//! Configuration is explicit, never ambient: generators, evaluators, and
//! genetic operators all receive a `&CriteriaConfig`, so independent
//! configurations can run side by side and every piece is testable in
//! isolation.
//!
//! All random generation goes through a caller-supplied `rand::Rng`, which
//! keeps runs reproducible when the caller seeds the source.

pub use self::{
    candidate::{Location, WeightVector},
    config::{ConfigError, CriteriaConfig, Criterion, Polarity, RawCriteriaConfig, ValueRange},
};

pub mod candidate;
pub mod config;

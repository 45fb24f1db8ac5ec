//! Core data models for the geocoding vocabulary.

pub mod precision;
pub mod region;
pub mod scope;

pub use precision::Precision;
pub use region::{GeoPoint, RectangularRegion};
pub use scope::{Scope, UnknownScopeError};

//! Placemark - classification vocabulary for geocoding clients
//!
//! This library provides the typed value space shared by the request-building
//! and response-reading halves of a geocoding client: the scope of a result,
//! the precision of its coordinate, and the rectangular regions used to
//! restrict a query. It defines no transport; collaborators serialize these
//! values into query parameters and read them back out of response metadata.

pub mod models;

pub use models::{GeoPoint, Precision, RectangularRegion, Scope, UnknownScopeError};

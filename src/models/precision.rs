//! Placemark precision classification.
//!
//! A placemark's scope indicates a feature's size or importance, whereas its
//! precision indicates how far the reported coordinate may be from the actual
//! real-world location. The service adds precision tags over time, so the
//! vocabulary is open: tags this version does not know are carried through
//! as [`Precision::Unrecognized`] instead of failing the response.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// How closely a placemark's coordinate matches the real-world feature.
///
/// Values are opaque tags compared for equality only; declaration order
/// implies no ranking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Precision {
    /// A specific building, located on its rooftop or at one of its entrances.
    Building,
    /// A tract or parcel of land, located at the centroid.
    Parcel,
    /// An address interpolated from an address range. The actual location is
    /// generally somewhere along the same block of the same street.
    Interpolated,
    /// A block along a street or an intersection between two or more streets.
    Intersection,
    /// An entire street, located at its midpoint.
    Street,
    /// A tag introduced by the service after this vocabulary was written.
    Unrecognized(String),
}

impl Precision {
    /// The tag as it appears in service responses.
    pub fn as_str(&self) -> &str {
        match self {
            Precision::Building => "rooftop",
            Precision::Parcel => "parcel",
            Precision::Interpolated => "interpolated",
            Precision::Intersection => "intersection",
            Precision::Street => "street",
            Precision::Unrecognized(tag) => tag,
        }
    }

    /// Whether the tag is part of the fixed declared set. Only useful for
    /// diagnostics; unrecognized tags are still valid values.
    pub fn is_known(&self) -> bool {
        !matches!(self, Precision::Unrecognized(_))
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(match tag {
            "rooftop" => Precision::Building,
            "parcel" => Precision::Parcel,
            "interpolated" => Precision::Interpolated,
            "intersection" => Precision::Intersection,
            "street" => Precision::Street,
            other => {
                debug!(tag = other, "unrecognized precision tag");
                Precision::Unrecognized(other.to_string())
            }
        })
    }
}

impl Serialize for Precision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Precision {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(tag.parse().unwrap_or(Precision::Unrecognized(tag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_parse() {
        assert_eq!("rooftop".parse::<Precision>(), Ok(Precision::Building));
        assert_eq!("parcel".parse::<Precision>(), Ok(Precision::Parcel));
        assert_eq!("street".parse::<Precision>(), Ok(Precision::Street));
        assert!("rooftop".parse::<Precision>().unwrap().is_known());
    }

    #[test]
    fn test_unknown_tag_degrades_without_error() {
        let precision: Precision = "centroid".parse().unwrap();
        assert_eq!(precision, Precision::Unrecognized("centroid".to_string()));
        assert!(!precision.is_known());
        assert_eq!(precision.as_str(), "centroid");
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        // "Rooftop" is not the declared "rooftop" tag.
        let precision: Precision = "Rooftop".parse().unwrap();
        assert!(!precision.is_known());
        assert_ne!(precision, Precision::Building);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Precision::Building).unwrap();
        assert_eq!(json, "\"rooftop\"");
        assert_eq!(
            serde_json::from_str::<Precision>(&json).unwrap(),
            Precision::Building
        );
        assert_eq!(
            serde_json::from_str::<Precision>("\"plus_code\"").unwrap(),
            Precision::Unrecognized("plus_code".to_string())
        );
    }
}

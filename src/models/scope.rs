//! Placemark scope classification.
//!
//! Every placemark has a scope: the kind of administrative area, settlement,
//! or addressable location it represents. Scopes are bit flags so that a
//! query filter can name several kinds at once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

bitflags::bitflags! {
    /// Geographic/administrative kind of a placemark.
    ///
    /// The scope offers a general indication of the size or importance of
    /// the feature represented by the placemark. Flags combine with `|` to
    /// express a filter matching any of the named kinds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Scope: u32 {
        /// A country or dependent territory, such as Switzerland or New Caledonia.
        const COUNTRY = 1 << 1;
        /// A top-level administrative region within a country, such as a state or province.
        const REGION = 1 << 2;
        /// A subdivision of a top-level administrative region.
        const DISTRICT = 1 << 3;
        /// A region defined by a postal code.
        const POSTAL_CODE = 1 << 4;
        /// A municipality, such as a city or village.
        const PLACE = 1 << 5;
        /// A major subdivision within a municipality.
        const LOCALITY = 1 << 6;
        /// A minor subdivision within a municipality.
        const NEIGHBORHOOD = 1 << 7;
        /// A physical address, such as to a business or residence.
        const ADDRESS = 1 << 8;
        /// A particularly notable or long-lived point of interest, such as a
        /// park, museum, or place of worship.
        const LANDMARK = 1 << 10;
        /// Any point of interest, such as a business or store. Landmarks are
        /// points of interest, so this flag matches landmarks too.
        const POINT_OF_INTEREST = 1 << 9 | 1 << 10;
        /// All scopes. Covers the reserved bit range rather than only the
        /// flags named above, so a filter built from it keeps matching kinds
        /// introduced by the service later.
        const ALL = 0xFFFE;
    }
}

/// A scope identifier that this vocabulary does not define.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized scope identifier: {0:?}")]
pub struct UnknownScopeError(pub String);

impl Scope {
    /// Maps a dotted feature-type identifier from a service response (e.g.
    /// `poi.landmark.museum`) to the closest scope flag. Unrecognized
    /// identifiers map to the empty set.
    pub fn from_feature_type(identifier: &str) -> Scope {
        let components: Vec<&str> = identifier.split('.').collect();
        components[..components.len().min(2)]
            .join(".")
            .parse()
            .or_else(|_| components[0].parse())
            .unwrap_or_else(|_| Scope::empty())
    }

    /// Service identifiers for the named flags contained in this set.
    pub fn descriptions(self) -> Vec<&'static str> {
        let mut descriptions = Vec::new();
        if self.contains(Scope::COUNTRY) {
            descriptions.push("country");
        }
        if self.contains(Scope::REGION) {
            descriptions.push("region");
        }
        if self.contains(Scope::DISTRICT) {
            descriptions.push("district");
        }
        if self.contains(Scope::POSTAL_CODE) {
            descriptions.push("postcode");
        }
        if self.contains(Scope::PLACE) {
            descriptions.push("place");
        }
        if self.contains(Scope::LOCALITY) {
            descriptions.push("locality");
        }
        if self.contains(Scope::NEIGHBORHOOD) {
            descriptions.push("neighborhood");
        }
        if self.contains(Scope::ADDRESS) {
            descriptions.push("address");
        }
        if self.contains(Scope::LANDMARK) {
            descriptions.push(if self.contains(Scope::POINT_OF_INTEREST) {
                "poi"
            } else {
                "poi.landmark"
            });
        }
        descriptions
    }
}

impl fmt::Display for Scope {
    /// Comma-separated service identifiers, the encoding used by the
    /// service's `types` query parameter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptions().join(","))
    }
}

impl FromStr for Scope {
    type Err = UnknownScopeError;

    /// Parses one or more comma-separated scope identifiers. An empty string
    /// parses to the empty set; any unrecognized identifier is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scope = Scope::empty();
        if s.is_empty() {
            return Ok(scope);
        }
        for description in s.split(',') {
            scope |= match description {
                "country" => Scope::COUNTRY,
                "region" => Scope::REGION,
                "district" => Scope::DISTRICT,
                "postcode" => Scope::POSTAL_CODE,
                "place" => Scope::PLACE,
                "locality" => Scope::LOCALITY,
                "neighborhood" => Scope::NEIGHBORHOOD,
                "address" => Scope::ADDRESS,
                "poi.landmark" => Scope::LANDMARK,
                "poi" => Scope::POINT_OF_INTEREST,
                other => return Err(UnknownScopeError(other.to_string())),
            };
        }
        Ok(scope)
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

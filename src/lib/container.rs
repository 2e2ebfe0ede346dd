use super::geometry::Geometry;
use serde_json::{Map, Value};

/// Arbitrary per-feature properties, as found in the input.
pub type Properties = Map<String, Value>;

/// Any decoded GeoJSON object, top-level or nested.
#[derive(PartialEq, Debug, Clone)]
pub enum Container {
    Geometry(Geometry),
    Feature {
        properties: Option<Properties>,
        geometry: Geometry,
    },
    FeatureCollection {
        features: Vec<Container>,
    },
}

impl Container {
    pub fn type_name(&self) -> &str {
        match self {
            Container::Geometry(geometry) => geometry.type_name(),
            Container::Feature { .. } => "Feature",
            Container::FeatureCollection { .. } => "FeatureCollection",
        }
    }

    /// The geometry of a feature or of a bare geometry object.
    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            Container::Geometry(geometry) | Container::Feature { geometry, .. } => Some(geometry),
            Container::FeatureCollection { .. } => None,
        }
    }

    pub fn features(&self) -> &[Container] {
        match self {
            Container::FeatureCollection { features } => features,
            _ => &[],
        }
    }

    pub fn properties(&self) -> Option<&Properties> {
        match self {
            Container::Feature { properties, .. } => properties.as_ref(),
            _ => None,
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties()?.get(key)
    }
}

use super::container::Container;
use super::error::DecodeError;
use super::geometry::{Geometry, GeometryKind, Line, Point, Polygon};
use super::raw::{RawContainer, RawGeometry};
use itertools::Itertools;
use log::{debug, trace, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// A collection entry whose geometry could not be resolved. The entry itself
/// is still part of the result, with an unresolved geometry.
#[derive(Debug)]
pub struct Diagnostic {
    /// Indices into `features`, outermost collection first.
    pub path: Vec<usize>,
    pub geometry_type: String,
    pub error: DecodeError,
}

impl Diagnostic {
    pub fn location(&self) -> String {
        self.path
            .iter()
            .map(|index| format!("features[{}]", index))
            .join(".")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "failed to convert {} at {}: {}",
            self.geometry_type,
            self.location(),
            self.error
        )
    }
}

fn shaped<T: DeserializeOwned>(kind: GeometryKind, coordinates: Value) -> Result<T, DecodeError> {
    serde_json::from_value(coordinates).map_err(|err| DecodeError::CoordinateShapeMismatch {
        geometry_type: kind.to_string(),
        reason: err.to_string(),
    })
}

/// Turns raw coordinates into the geometry its declared type calls for.
/// Without coordinates there is nothing to resolve, whatever the type.
pub fn resolve_coordinates(
    type_name: &str,
    coordinates: Option<Value>,
) -> Result<Geometry, DecodeError> {
    let coordinates = match coordinates {
        Some(coordinates) => coordinates,
        None => return Ok(Geometry::Unresolved(type_name.into())),
    };

    let kind: GeometryKind = type_name.parse()?;
    trace!("resolving {} coordinates", kind);
    let geometry = match kind {
        GeometryKind::Point => Geometry::Point(shaped::<Point>(kind, coordinates)?),
        GeometryKind::MultiPoint => Geometry::MultiPoint(shaped::<Line>(kind, coordinates)?),
        GeometryKind::LineString => Geometry::LineString(shaped::<Line>(kind, coordinates)?),
        GeometryKind::Polygon => Geometry::Polygon(shaped::<Polygon>(kind, coordinates)?),
        GeometryKind::MultiPolygon => {
            Geometry::MultiPolygon(shaped::<Vec<Polygon>>(kind, coordinates)?)
        }
    };
    Ok(geometry)
}

fn resolve_geometry(raw: Option<RawGeometry>) -> Result<Geometry, DecodeError> {
    match raw {
        Some(raw) => resolve_coordinates(&raw.type_name, raw.coordinates),
        None => Ok(Geometry::Null),
    }
}

/// Walks a raw tree and resolves every coordinate payload in it.
///
/// Failures propagate, except for entries of a feature collection: those are
/// collected as [`Diagnostic`]s and the entry keeps an unresolved geometry.
#[derive(Default)]
pub struct Resolver {
    path: Vec<usize>,
    diagnostics: Vec<Diagnostic>,
}

impl Resolver {
    pub fn resolve(
        mut self,
        raw: RawContainer,
    ) -> Result<(Container, Vec<Diagnostic>), DecodeError> {
        let container = self.container(raw)?;
        Ok((container, self.diagnostics))
    }

    fn container(&mut self, raw: RawContainer) -> Result<Container, DecodeError> {
        let container = match raw.type_name.as_str() {
            "Feature" => Container::Feature {
                properties: raw.properties,
                geometry: resolve_geometry(raw.geometry)?,
            },
            "FeatureCollection" => self.collection(raw.features),
            _ => Container::Geometry(resolve_coordinates(&raw.type_name, raw.coordinates)?),
        };
        Ok(container)
    }

    fn collection(&mut self, features: Option<Vec<RawContainer>>) -> Container {
        let before = self.diagnostics.len();
        let features: Vec<Container> = features
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, feature)| self.member(index, feature))
            .collect();
        debug!(
            "resolved collection of {} features, {} failed",
            features.len(),
            self.diagnostics.len() - before
        );
        Container::FeatureCollection { features }
    }

    fn member(&mut self, index: usize, raw: RawContainer) -> Container {
        self.path.push(index);
        let container = match raw.type_name.as_str() {
            "Feature" => {
                let declared = raw.geometry.as_ref().map(|g| g.type_name.clone());
                let geometry = self.reported(declared, resolve_geometry(raw.geometry));
                Container::Feature {
                    properties: raw.properties,
                    geometry,
                }
            }
            "FeatureCollection" => self.collection(raw.features),
            _ => {
                let declared = Some(raw.type_name.clone());
                let result = resolve_coordinates(&raw.type_name, raw.coordinates);
                Container::Geometry(self.reported(declared, result))
            }
        };
        self.path.pop();
        container
    }

    fn reported(
        &mut self,
        declared: Option<String>,
        result: Result<Geometry, DecodeError>,
    ) -> Geometry {
        match result {
            Ok(geometry) => geometry,
            Err(error) => {
                let geometry_type = declared.unwrap_or_default();
                let diagnostic = Diagnostic {
                    path: self.path.clone(),
                    geometry_type: geometry_type.clone(),
                    error,
                };
                warn!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
                Geometry::Unresolved(geometry_type)
            }
        }
    }
}

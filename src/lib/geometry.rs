use super::error::DecodeError;
use std::fmt;
use std::str::FromStr;

/// A position as `(longitude, latitude)`.
pub type Point = (f64, f64);

/// A series of points, used for LineStrings and MultiPoints alike.
pub type Line = Vec<Point>;

/// A series of rings. The first one is the exterior, the rest are holes.
pub type Polygon = Vec<Line>;

/// The geometry types the resolver knows how to shape coordinates for.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    Polygon,
    MultiPolygon,
}

impl GeometryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
        }
    }
}

impl FromStr for GeometryKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(GeometryKind::Point),
            "MultiPoint" => Ok(GeometryKind::MultiPoint),
            "LineString" => Ok(GeometryKind::LineString),
            "Polygon" => Ok(GeometryKind::Polygon),
            "MultiPolygon" => Ok(GeometryKind::MultiPolygon),
            other => Err(DecodeError::UnknownGeometryType(other.into())),
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded geometry.
///
/// `Unresolved` keeps the declared type of a geometry that carries no
/// coordinates, either because the input omitted them or because they failed
/// to resolve inside a feature collection. `Null` stands for a feature
/// without any geometry object.
#[derive(PartialEq, Debug, Clone)]
pub enum Geometry {
    Point(Point),
    LineString(Line),
    MultiPoint(Line),
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
    Unresolved(String),
    Null,
}

impl Geometry {
    pub fn type_name(&self) -> &str {
        match self {
            Geometry::Point(_) => GeometryKind::Point.as_str(),
            Geometry::LineString(_) => GeometryKind::LineString.as_str(),
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint.as_str(),
            Geometry::Polygon(_) => GeometryKind::Polygon.as_str(),
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon.as_str(),
            Geometry::Unresolved(type_name) => type_name,
            Geometry::Null => "",
        }
    }

    pub fn kind(&self) -> Option<GeometryKind> {
        match self {
            Geometry::Point(_) => Some(GeometryKind::Point),
            Geometry::LineString(_) => Some(GeometryKind::LineString),
            Geometry::MultiPoint(_) => Some(GeometryKind::MultiPoint),
            Geometry::Polygon(_) => Some(GeometryKind::Polygon),
            Geometry::MultiPolygon(_) => Some(GeometryKind::MultiPolygon),
            Geometry::Unresolved(_) | Geometry::Null => None,
        }
    }

    /// True if no coordinate payload is populated.
    pub fn is_empty(&self) -> bool {
        self.kind().is_none()
    }

    pub fn point(&self) -> Option<Point> {
        match self {
            Geometry::Point(point) => Some(*point),
            _ => None,
        }
    }

    /// The points of a LineString or a MultiPoint.
    pub fn line(&self) -> Option<&Line> {
        match self {
            Geometry::LineString(line) | Geometry::MultiPoint(line) => Some(line),
            _ => None,
        }
    }

    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    pub fn multi_polygon(&self) -> Option<&[Polygon]> {
        match self {
            Geometry::MultiPolygon(polygons) => Some(polygons),
            _ => None,
        }
    }
}

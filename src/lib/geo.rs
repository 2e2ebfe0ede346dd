use super::geometry::{Geometry, Line, Polygon};
use geo_types::{LineString, MultiPoint, MultiPolygon, Point};
use std::convert::TryFrom;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConversionError {
    #[error("geometry '{0}' has no coordinates to convert")]
    UnconvertibleGeometry(String),
}

fn line_string(line: &Line) -> LineString<f64> {
    line.clone().into()
}

// geo-types closes rings on construction, so open rings come out closed.
fn polygon(rings: &Polygon) -> geo_types::Polygon<f64> {
    let mut rings = rings.iter().map(line_string);
    let exterior = rings.next().unwrap_or_else(|| LineString(vec![]));
    geo_types::Polygon::new(exterior, rings.collect())
}

impl TryFrom<&Geometry> for geo_types::Geometry<f64> {
    type Error = ConversionError;

    fn try_from(geometry: &Geometry) -> Result<Self, Self::Error> {
        let converted = match geometry {
            Geometry::Point(point) => geo_types::Geometry::Point(Point::from(*point)),
            Geometry::LineString(line) => geo_types::Geometry::LineString(line_string(line)),
            Geometry::MultiPoint(line) => {
                let multi_point: MultiPoint<f64> = line.clone().into();
                geo_types::Geometry::MultiPoint(multi_point)
            }
            Geometry::Polygon(rings) => geo_types::Geometry::Polygon(polygon(rings)),
            Geometry::MultiPolygon(polygons) => geo_types::Geometry::MultiPolygon(MultiPolygon(
                polygons.iter().map(polygon).collect(),
            )),
            Geometry::Unresolved(_) | Geometry::Null => {
                return Err(ConversionError::UnconvertibleGeometry(
                    geometry.type_name().into(),
                ))
            }
        };
        Ok(converted)
    }
}

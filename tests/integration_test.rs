extern crate geojson_container;

use approx::assert_relative_eq;
use geojson::{GeoJson, Value};
use geojson_container::{
    decode, decode_batch_stream, decode_stream, decode_with_diagnostics, Container, DecodeError,
    Geometry, Line,
};
use serde_json::json;
use std::fs::{self, File};
use std::io::BufReader;

fn read(path: &str) -> Vec<u8> {
    fs::read(path).unwrap()
}

fn assert_line_eq(line: &Line, positions: &[Vec<f64>]) {
    assert_eq!(line.len(), positions.len());
    for (point, position) in line.iter().zip(positions) {
        assert_relative_eq!(point.0, position[0], epsilon = f64::EPSILON);
        assert_relative_eq!(point.1, position[1], epsilon = f64::EPSILON);
    }
}

#[test]
fn block_groups() {
    let file = File::open("./tests/data/block_groups.geojson").unwrap();
    let collection = decode_stream(BufReader::new(file)).unwrap();

    assert_eq!(collection.type_name(), "FeatureCollection");
    let features = collection.features();
    assert_eq!(features.len(), 3);

    let first = &features[0];
    assert_eq!(first.type_name(), "Feature");
    assert_eq!(first.geometry().unwrap().type_name(), "Polygon");
    let polygon = first.geometry().and_then(Geometry::polygon).unwrap();
    assert_eq!(polygon[0].len(), 53);
    assert_eq!(first.property("STATEFP"), Some(&json!("12")));
    assert_eq!(
        first.property("ALAND").and_then(|value| value.as_f64()),
        Some(1_818_632.)
    );

    let second = &features[1];
    assert_eq!(second.property("COUNTYFP"), Some(&json!("103")));
    let polygons = second.geometry().and_then(Geometry::multi_polygon).unwrap();
    assert_eq!(polygons.len(), 1);
    assert_eq!(polygons[0][0].len(), 8);
}

#[test]
fn block_groups_agree_with_geojson_crate() {
    let bytes = read("./tests/data/block_groups.geojson");
    let collection = decode(&bytes).unwrap();
    let reference = match String::from_utf8(bytes).unwrap().parse::<GeoJson>().unwrap() {
        GeoJson::FeatureCollection(fc) => fc,
        other => panic!("unexpected geojson {:?}", other),
    };

    assert_eq!(collection.features().len(), reference.features.len());
    for (feature, expected) in collection.features().iter().zip(&reference.features) {
        let geometry = feature.geometry().unwrap();
        match &expected.geometry.as_ref().unwrap().value {
            Value::Polygon(rings) => {
                let polygon = geometry.polygon().unwrap();
                assert_eq!(polygon.len(), rings.len());
                for (line, ring) in polygon.iter().zip(rings) {
                    assert_line_eq(line, ring);
                }
            }
            Value::MultiPolygon(polygons) => {
                let decoded = geometry.multi_polygon().unwrap();
                assert_eq!(decoded.len(), polygons.len());
                for (polygon, rings) in decoded.iter().zip(polygons) {
                    for (line, ring) in polygon.iter().zip(rings) {
                        assert_line_eq(line, ring);
                    }
                }
            }
            other => panic!("unexpected value {:?}", other),
        }
        let properties = feature.properties().unwrap();
        let expected_properties = expected.properties.as_ref().unwrap();
        assert_eq!(properties, expected_properties);
    }
}

#[test]
fn damaged_feature_does_not_fail_collection() {
    let bytes = read("./tests/data/block_groups_damaged.geojson");
    let decoded = decode_with_diagnostics(&bytes).unwrap();

    let features = decoded.container.features();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0].geometry().unwrap().type_name(), "Polygon");
    assert_eq!(features[2].geometry().unwrap().type_name(), "Polygon");

    let damaged = &features[1];
    assert_eq!(
        damaged.geometry(),
        Some(&Geometry::Unresolved("Circle".into()))
    );
    assert_eq!(damaged.property("GEOID"), Some(&json!("121030248041")));

    assert_eq!(decoded.diagnostics.len(), 1);
    let diagnostic = &decoded.diagnostics[0];
    assert_eq!(diagnostic.path, vec![1]);
    assert_eq!(diagnostic.geometry_type, "Circle");
    assert!(matches!(
        diagnostic.error,
        DecodeError::UnknownGeometryType(_)
    ));
}

#[test]
fn batch_of_mixed_objects() {
    let file = File::open("./tests/data/batch.geojson").unwrap();
    let decoded = decode_batch_stream(BufReader::new(file)).unwrap();
    let names: Vec<&str> = decoded.iter().map(|d| d.container.type_name()).collect();
    assert_eq!(
        names,
        vec![
            "Point",
            "LineString",
            "Polygon",
            "MultiPolygon",
            "FeatureCollection"
        ]
    );
    assert!(decoded.iter().all(|d| d.diagnostics.is_empty()));
    assert_eq!(
        decoded[0].container,
        Container::Geometry(Geometry::Point((1.1, 2.0)))
    );
    assert_eq!(decoded[4].container.features().len(), 3);
}

#[test]
fn truncated_input_is_malformed() {
    let bytes = read("./tests/data/block_groups.geojson");
    let truncated = &bytes[..bytes.len() / 2];
    assert!(matches!(
        decode(truncated),
        Err(DecodeError::MalformedInput(_))
    ));
}

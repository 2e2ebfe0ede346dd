use itertools::Itertools;

/// A feature with the given geometry and a `kind` property naming its type.
pub fn feature(geometry_type: &str, coordinates: &str) -> String {
    format!(
        r#"{{"type":"Feature","properties":{{"kind":"{}"}},"geometry":{{"type":"{}","coordinates":{}}}}}"#,
        geometry_type, geometry_type, coordinates
    )
}

pub fn feature_collection(features: &[String]) -> String {
    format!(
        r#"{{"type":"FeatureCollection","features":[{}]}}"#,
        features.iter().join(",")
    )
}

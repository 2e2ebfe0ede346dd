//! Two-phase GeoJSON decoding.
//!
//! The input is first read into a raw tree, in which every `coordinates`
//! member is kept as an uninterpreted JSON value. The resolver then walks that
//! tree and turns each payload into the geometry its `type` declares.
//!
//! ```
//! use geojson_container::{decode, Geometry};
//!
//! let container = decode(br#"{"type":"Point","coordinates":[1.1,2]}"#).unwrap();
//! assert_eq!(container.type_name(), "Point");
//! assert_eq!(container.geometry(), Some(&Geometry::Point((1.1, 2.0))));
//! ```

use log::debug;
use std::io::Read;

mod container;
mod error;
pub mod geo;
mod geometry;
mod raw;
mod resolve;

#[cfg(test)]
mod test_helpers;

pub use container::{Container, Properties};
pub use error::DecodeError;
pub use geometry::{Geometry, GeometryKind, Line, Point, Polygon};
pub use resolve::Diagnostic;

use raw::RawContainer;
use resolve::Resolver;

/// A decoded container together with the collection entries that failed to
/// resolve along the way.
#[derive(Debug)]
pub struct Decoded {
    /// The fully resolved tree.
    pub container: Container,
    /// One entry per failed collection member, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Decoded {
    fn resolve(raw: RawContainer) -> Result<Self, DecodeError> {
        let (container, diagnostics) = Resolver::default().resolve(raw)?;
        debug!(
            "decoded {} with {} diagnostics",
            container.type_name(),
            diagnostics.len()
        );
        Ok(Decoded {
            container,
            diagnostics,
        })
    }
}

/// Decode a single GeoJSON object.
///
/// Entries of a feature collection that fail to resolve are logged and left
/// with an unresolved geometry. [`decode_with_diagnostics`] returns them too.
pub fn decode(bytes: &[u8]) -> Result<Container, DecodeError> {
    decode_with_diagnostics(bytes).map(|decoded| decoded.container)
}

/// Like [`decode`], reading from a stream.
///
/// The reader is consumed byte by byte, so wrap files and sockets in a
/// [`std::io::BufReader`].
pub fn decode_stream(reader: impl Read) -> Result<Container, DecodeError> {
    Decoded::resolve(raw::from_reader(reader)?).map(|decoded| decoded.container)
}

/// Like [`decode`], also returning the collection entries that failed.
pub fn decode_with_diagnostics(bytes: &[u8]) -> Result<Decoded, DecodeError> {
    Decoded::resolve(raw::from_slice(bytes)?)
}

/// Decode either a single object or a top-level array of objects, one result
/// per object. The first failing object fails the whole batch.
pub fn decode_batch(bytes: &[u8]) -> Result<Vec<Decoded>, DecodeError> {
    raw::batch_from_slice(bytes)?
        .into_iter()
        .map(Decoded::resolve)
        .collect()
}

/// Like [`decode_batch`], reading the whole stream first.
pub fn decode_batch_stream(mut reader: impl Read) -> Result<Vec<Decoded>, DecodeError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_batch(&bytes)
}

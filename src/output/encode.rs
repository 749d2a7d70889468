//! Serialization of subpaths into the output formats
//!
//! All formats apply the unit-space rescaling on the way out; vertex and
//! subpath order is never changed.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::value::RawValue;

use crate::normalizer::Subpath;

use super::config::{OutputConfig, OutputFormat};
use super::scale::UnitTransform;

/// Current vertex record; field order gives sorted keys
#[derive(Serialize)]
struct VertexRecord {
    pos: [Box<RawValue>; 2],
    #[serde(rename = "type")]
    kind: u8,
}

/// Encode one subpath in the configured format
pub fn encode(subpath: &Subpath, config: &OutputConfig) -> Result<String, serde_json::Error> {
    let transform = UnitTransform::new(config.scale);
    match config.format {
        OutputFormat::Json => encode_json(subpath, transform, config.precision, config.pretty),
        OutputFormat::LegacyJson => encode_legacy_json(subpath, transform, config.pretty),
        OutputFormat::Text => encode_text(subpath, transform),
    }
}

fn encode_json(
    subpath: &Subpath,
    transform: UnitTransform,
    precision: usize,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let records = subpath
        .iter()
        .map(|vertex| {
            let (x, y) = transform.apply(vertex.pos);
            Ok(VertexRecord {
                pos: [fixed(x, precision)?, fixed(y, precision)?],
                kind: vertex.kind.code(),
            })
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    to_json(&records, pretty)
}

fn encode_legacy_json(
    subpath: &Subpath,
    transform: UnitTransform,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let rows = subpath
        .iter()
        .map(|vertex| {
            let (x, y) = finite(transform.apply(vertex.pos))?;
            Ok((vertex.kind.code(), x, y))
        })
        .collect::<Result<Vec<(u8, f64, f64)>, serde_json::Error>>()?;

    to_json(&rows, pretty)
}

fn encode_text(subpath: &Subpath, transform: UnitTransform) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for vertex in subpath {
        let (x, y) = finite(transform.apply(vertex.pos))?;
        out.push_str(&format!("{} {:?} {:?}\n", vertex.kind.code(), x, y));
    }
    Ok(out)
}

/// Reject coordinates that have no numeric JSON or record form
fn finite((x, y): (f64, f64)) -> Result<(f64, f64), serde_json::Error> {
    if x.is_finite() && y.is_finite() {
        Ok((x, y))
    } else {
        Err(serde_json::Error::custom(format!(
            "non-finite coordinate ({}, {})",
            x, y
        )))
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// A JSON number with exactly `precision` decimals
///
/// Non-finite values are rejected by the JSON validation of `RawValue`.
fn fixed(value: f64, precision: usize) -> Result<Box<RawValue>, serde_json::Error> {
    let mut text = format!("{:.*}", precision, value);
    // -0.00000 -> 0.00000
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text.remove(0);
    }
    RawValue::from_string(text)
}

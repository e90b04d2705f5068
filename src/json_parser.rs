/*

    Provide utilities to parse query JSON files.

    The format is relaxed in the same way scene files are:
        - numbers may be given as JSON numbers or as strings e.g. "6"
        - Vector3 fields are given as "<a> <a> <a>" or [<a>, <a>, <a>]
        - booleans may be true/false, "true"/"false" or "1"/"0"

    e.g. In JSON file both
    "RandomRays": "16" and "RandomRays": 16
    works as random_rays: usize in source code

    @date: 19 Oct, 2026
*/

use std::fmt;
use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor, SeqAccess};

use crate::prelude::*;
use crate::json_structs::RootQuery;

pub fn parse_query_file(path: &str) -> Result<RootQuery, Box<dyn std::error::Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_query");
    let _enter = span.enter();

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path);

    // Parse JSON into Query
    let root: RootQuery = serde_json::from_reader(reader)?;
    report_invalid_boxes(&root);
    Ok(root)
}

pub fn parse_query_str(s: &str) -> Result<RootQuery, Box<dyn std::error::Error>> {
    let root: RootQuery = serde_json::from_str(s)?;
    report_invalid_boxes(&root);
    Ok(root)
}

// Inverted boxes are kept, the slab test handles them symmetrically
fn report_invalid_boxes(root: &RootQuery) {
    for b in root.query.boxes.all() {
        if !b.to_box().is_valid() {
            warn!("Box with _id {} has min > max on some axis: {}", b._id, b.to_box());
        }
    }
}

pub(crate) fn deser_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize u64 type given as either string or number in JSON
    */
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_u64()
            .ok_or_else(|| de::Error::custom("Invalid unsigned integer")),
        serde_json::Value::String(s) => s.trim().parse::<u64>()
            .map_err(|_| de::Error::custom("Failed to parse integer from string")),
        t => Err(de::Error::custom(format!("Expected int or string, found {t}"))),
    }
}

pub(crate) fn deser_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let v = deser_u64(deserializer)?;
    usize::try_from(v)
        .map_err(|_| de::Error::custom(format!("Integer {v} does not fit in usize")))
}

// Handles floats as string or number
pub(crate) fn deser_float<'de, D>(deserializer: D) -> Result<Float, D::Error>
where
    D: Deserializer<'de>,
{
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_f64()
            .map(|v| v as Float)
            .ok_or_else(|| de::Error::custom("Invalid float")),
        serde_json::Value::String(s) => s.trim().parse::<Float>()
            .map_err(|_| de::Error::custom("Failed to parse float from string")),
        t => Err(de::Error::custom(format!("Expected float or string, found {t}"))),
    }
}

pub(crate) fn deser_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolVisitor;

    impl<'de> Visitor<'de> for BoolVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a boolean or a string containing true/false")
        }

        fn visit_bool<E>(self, v: bool) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_str<E>(self, v: &str) -> Result<bool, E>
        where
            E: de::Error,
        {
            match v.to_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(E::custom(format!("invalid bool '{}'", v))),
            }
        }

        fn visit_u64<E>(self, v: u64) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v != 0)
        }
    }

    deserializer.deserialize_any(BoolVisitor)
}

pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    struct Vec3Visitor;

    impl<'de> Visitor<'de> for Vec3Visitor {
        type Value = Vector3;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a Vec3 as a string 'x y z' or an array [x, y, z]")
        }

        // Given "X Y Z"
        fn visit_str<E>(self, value: &str) -> Result<Vector3, E>
        where
            E: de::Error,
        {
            parse_vec3_str(value).map_err(de::Error::custom)
        }

        // Given [X, Y, Z]
        fn visit_seq<A>(self, mut seq: A) -> Result<Vector3, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut next = || -> Result<Float, A::Error> {
                seq.next_element::<Float>()?
                    .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))
            };
            let (x, y, z) = (next()?, next()?, next()?);
            if seq.next_element::<Float>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in Vec3 array"));
            }
            Ok(Vector3::new(x, y, z))
        }
    }

    deserializer.deserialize_any(Vec3Visitor)
}

/// Helper function: parse a string like "25 25 25" into Vector3
pub fn parse_vec3_str(s: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 values, got {}", parts.len()));
    }
    let x = parts[0].parse::<Float>().map_err(|e| e.to_string())?;
    let y = parts[1].parse::<Float>().map_err(|e| e.to_string())?;
    let z = parts[2].parse::<Float>().map_err(|e| e.to_string())?;
    Ok(Vector3::new(x, y, z))
}

//! Turns loosely-typed request input into validated values, in a fixed order of checks.

use crate::error::AppError;
use crate::geo::Coordinates;
use crate::model::NewSchool;
use serde_json::Value;

pub const MISSING_FIELDS: &str = "All fields (name, address, latitude, longitude) are required";
pub const NOT_STRINGS: &str = "Name and address must be strings";
pub const NOT_NUMBERS: &str = "Latitude and longitude must be numbers";
pub const OUT_OF_RANGE: &str = "Latitude and longitude must be within valid ranges";
pub const MISSING_REFERENCE: &str = "Latitude and longitude are required";

/// Validate an `addSchool` body.
///
/// Checks run in order: presence, string types, numeric coordinates, coordinate ranges.
/// The first failing check decides the message.
pub fn parse_new_school(body: &Value) -> Result<NewSchool, AppError> {
    let field = |key: &str| body.get(key).filter(|v| is_present(v));
    let (Some(name), Some(address), Some(latitude), Some(longitude)) =
        (field("name"), field("address"), field("latitude"), field("longitude"))
    else {
        return Err(AppError::Validation(MISSING_FIELDS.into()));
    };

    let (Value::String(name), Value::String(address)) = (name, address) else {
        return Err(AppError::Validation(NOT_STRINGS.into()));
    };

    let (Some(lat), Some(lon)) = (numeric(latitude), numeric(longitude)) else {
        return Err(AppError::Validation(NOT_NUMBERS.into()));
    };

    let location = Coordinates::new(lat, lon).ok_or_else(|| AppError::Validation(OUT_OF_RANGE.into()))?;
    Ok(NewSchool {
        name: name.clone(),
        address: address.clone(),
        location,
    })
}

/// Validate the `listSchools` reference point from raw query values.
pub fn parse_reference_point(latitude: Option<&str>, longitude: Option<&str>) -> Result<Coordinates, AppError> {
    fn non_empty(v: Option<&str>) -> Option<&str> {
        v.filter(|s| !s.is_empty())
    }
    let (Some(latitude), Some(longitude)) = (non_empty(latitude), non_empty(longitude)) else {
        return Err(AppError::Validation(MISSING_REFERENCE.into()));
    };
    let (Some(lat), Some(lon)) = (parse_number(latitude), parse_number(longitude)) else {
        return Err(AppError::Validation(NOT_NUMBERS.into()));
    };
    Coordinates::new(lat, lon).ok_or_else(|| AppError::Validation(OUT_OF_RANGE.into()))
}

/// Null, `false` and the empty string count as missing. Zero is a real coordinate.
fn is_present(v: &Value) -> bool {
    match v {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// A JSON number, or a string holding one.
fn numeric(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| !n.is_nan())
}

//! School entity and the request/response shapes built around it.

use crate::geo::Coordinates;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::Row;

/// A persisted school row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl School {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub(crate) fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(School {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
        })
    }
}

/// A school plus its distance in km from the caller's reference point. Serialised flat.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NearbySchool {
    #[serde(flatten)]
    pub school: School,
    pub distance: f64,
}

impl NearbySchool {
    pub(crate) fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(NearbySchool {
            school: School::from_row(row)?,
            distance: row.try_get("distance")?,
        })
    }
}

/// Validated insert payload: non-empty name/address and in-range coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub location: Coordinates,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolCreated {
    pub message: &'static str,
    pub school_id: i64,
}

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

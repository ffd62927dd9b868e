//! Builds the parameterized INSERT and SELECT statements for the school table.

use crate::geo::EARTH_RADIUS_KM;
use crate::model::NewSchool;
use crate::sql::SqlParam;

/// Table holding school rows.
pub const SCHOOL_TABLE: &str = "school";

const SCHOOL_COLUMNS: &str = r#""id", "name", "address", "latitude", "longitude""#;

/// Quote identifier for PostgreSQL (safe: only from config).
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub(crate) fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlParam) -> u32 {
        self.params.push(v);
        self.params.len() as u32
    }
}

/// INSERT one school; returns the generated id.
pub fn insert_school(schema: &str, school: &NewSchool) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, SCHOOL_TABLE);
    let name = q.push_param(SqlParam::Text(school.name.clone()));
    let address = q.push_param(SqlParam::Text(school.address.clone()));
    let lat = q.push_param(SqlParam::F64(school.location.latitude));
    let lon = q.push_param(SqlParam::F64(school.location.longitude));
    q.sql = format!(
        r#"INSERT INTO {} ("name", "address", "latitude", "longitude") VALUES (${}, ${}, ${}, ${}) RETURNING "id""#,
        table, name, address, lat, lon
    );
    q
}

/// SELECT every row, no ordering.
pub fn select_all(schema: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {}", SCHOOL_COLUMNS, qualified_table(schema, SCHOOL_TABLE));
    q
}

/// SELECT every row with a computed `distance` (km) from the reference point, nearest first.
/// The acos argument is clamped with LEAST/GREATEST; ties fall back to id order.
pub fn select_by_proximity(schema: &str, latitude: f64, longitude: f64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let lat = q.push_param(SqlParam::F64(latitude));
    let lon = q.push_param(SqlParam::F64(longitude));
    let cosine = format!(
        r#"cos(radians(${lat})) * cos(radians("latitude")) * cos(radians("longitude") - radians(${lon})) + sin(radians(${lat})) * sin(radians("latitude"))"#
    );
    q.sql = format!(
        r#"SELECT {}, ({:.1} * acos(LEAST(1.0, GREATEST(-1.0, {})))) AS "distance" FROM {} ORDER BY "distance" ASC, "id" ASC"#,
        SCHOOL_COLUMNS,
        EARTH_RADIUS_KM,
        cosine,
        qualified_table(schema, SCHOOL_TABLE)
    );
    q
}

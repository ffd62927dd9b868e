//! School Finder: register schools and list them by distance from a reference point.

pub mod config;
pub mod error;
pub mod geo;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, StorageError, StorageErrorKind};
pub use geo::{distance_km, rank_by_proximity, Coordinates};
pub use model::{NearbySchool, NewSchool, School};
pub use routes::{app, school_routes};
pub use service::{PgSchoolRepository, SchoolRepository};
pub use state::AppState;
pub use store::{check_connection, connect, ensure_school_table};

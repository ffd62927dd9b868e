//! School repository and request validation.

mod repository;
pub mod validation;
pub use repository::{PgSchoolRepository, SchoolRepository};
pub use validation::{parse_new_school, parse_reference_point};

mod school;
pub use school::{app, school_routes};

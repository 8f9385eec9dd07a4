//! Course catalog.
//!
//! The catalog is compiled-in static data: a fixed list of courses with
//! stable identifiers. There is no creation/archival lifecycle.

pub mod catalog;
pub mod course;

pub use catalog::Catalog;
pub use course::{Course, CourseId};

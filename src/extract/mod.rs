//! Detail page extraction
//!
//! This module turns a fetched page body into a `CourseRecord` plus its
//! normalized phone numbers:
//! - structured access to the page's labeled sections
//! - field extraction with empty-string degradation
//! - phone number parsing and deduplication

mod document;
mod fields;
mod phone;

pub use document::{CourseDocument, CourseSection};
pub use fields::{course_id_from_url, extract_course, ExtractedCourse};
pub use phone::extract_phone_numbers;

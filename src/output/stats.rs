//! Run summary statistics
//!
//! Computed from the finished dataset. Because row expansion repeats a
//! record's identity fields once per phone number, all per-course and
//! per-institution counts here deduplicate on the record identity first.

use crate::record::CourseRow;
use std::collections::HashSet;

/// Summary of one scrape run's dataset
#[derive(Debug, Clone, Default)]
pub struct DatasetStatistics {
    /// Total output rows (one per phone number, at least one per course)
    pub total_rows: usize,

    /// Distinct course identifiers
    pub unique_courses: usize,

    /// Distinct non-empty institution names
    pub unique_institutions: usize,

    /// Rows carrying a phone number
    pub rows_with_phone: usize,

    /// Distinct phone numbers across the dataset
    pub unique_phones: usize,

    /// Courses with at least one email address
    pub courses_with_email: usize,
}

impl DatasetStatistics {
    /// Computes statistics from the dataset
    pub fn from_rows(rows: &[CourseRow]) -> Self {
        let mut courses: HashSet<&str> = HashSet::new();
        let mut institutions: HashSet<&str> = HashSet::new();
        let mut phones: HashSet<&str> = HashSet::new();
        let mut courses_with_email: HashSet<&str> = HashSet::new();
        let mut rows_with_phone = 0usize;

        for row in rows {
            courses.insert(&row.course_id);

            if !row.institution_name.is_empty() {
                institutions.insert(&row.institution_name);
            }

            if !row.phone_numbers.is_empty() {
                rows_with_phone += 1;
                phones.insert(&row.phone_numbers);
            }

            if !row.emails.is_empty() {
                courses_with_email.insert(&row.course_id);
            }
        }

        Self {
            total_rows: rows.len(),
            unique_courses: courses.len(),
            unique_institutions: institutions.len(),
            rows_with_phone,
            unique_phones: phones.len(),
            courses_with_email: courses_with_email.len(),
        }
    }
}

/// Prints the run summary to stdout in a formatted manner
pub fn print_statistics(stats: &DatasetStatistics) {
    println!("=== Scrape Summary ===\n");
    println!(
        "Generated at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    println!("Dataset:");
    println!("  Output rows: {}", stats.total_rows);
    println!("  Unique courses: {}", stats.unique_courses);
    println!("  Unique institutions: {}", stats.unique_institutions);
    println!();

    println!("Contacts:");
    println!(
        "  Rows with a phone number: {} ({} distinct numbers)",
        stats.rows_with_phone, stats.unique_phones
    );
    println!("  Courses with an email: {}", stats.courses_with_email);
}

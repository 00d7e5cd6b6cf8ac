//! Record types produced by the crawl
//!
//! A `CourseRecord` is the per-page field set pulled from one detail page.
//! Because the site concatenates several phone numbers into one contact blob,
//! the record is expanded into one `CourseRow` per extracted number before it
//! reaches the output layer.

use serde::Serialize;

/// All fields extracted from a single course detail page
///
/// A missing field on the page is an empty string, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRecord {
    pub url: String,
    pub course_id: String,
    pub institution_name: String,
    pub course_title: String,
    pub duration: String,
    pub price: String,
    pub location: String,
    pub emails: String,
    pub address: String,
    pub website: String,
}

/// One output row: a course record paired with exactly one phone number
///
/// Field order here is the output schema; the CSV header and JSON keys are
/// derived from it. A record with several phone numbers repeats its identity
/// fields (url, course_id, institution_name) across rows, so consumers that
/// count courses or institutions must first deduplicate on `course_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRow {
    pub url: String,
    pub course_id: String,
    pub institution_name: String,
    pub course_title: String,
    pub duration: String,
    pub price: String,
    pub location: String,
    pub phone_numbers: String,
    pub emails: String,
    pub address: String,
    pub website: String,
}

/// The full result of one crawl run; row order is not meaningful
pub type Dataset = Vec<CourseRow>;

/// Column headers of the output schema, in serialization order
pub const OUTPUT_COLUMNS: [&str; 11] = [
    "url",
    "course_id",
    "institution_name",
    "course_title",
    "duration",
    "price",
    "location",
    "phone_numbers",
    "emails",
    "address",
    "website",
];

impl CourseRow {
    fn from_record(record: &CourseRecord, phone: String) -> Self {
        Self {
            url: record.url.clone(),
            course_id: record.course_id.clone(),
            institution_name: record.institution_name.clone(),
            course_title: record.course_title.clone(),
            duration: record.duration.clone(),
            price: record.price.clone(),
            location: record.location.clone(),
            phone_numbers: phone,
            emails: record.emails.clone(),
            address: record.address.clone(),
            website: record.website.clone(),
        }
    }

    /// Cell values in `OUTPUT_COLUMNS` order, for positional writers
    pub fn values(&self) -> [&str; 11] {
        [
            &self.url,
            &self.course_id,
            &self.institution_name,
            &self.course_title,
            &self.duration,
            &self.price,
            &self.location,
            &self.phone_numbers,
            &self.emails,
            &self.address,
            &self.website,
        ]
    }
}

/// Expands one record into one row per phone number
///
/// A record without any phone numbers still produces exactly one row, with an
/// empty phone field; the row count is therefore max(1, phones.len()) and is
/// never zero.
pub fn expand_rows(record: &CourseRecord, phones: &[String]) -> Vec<CourseRow> {
    if phones.is_empty() {
        return vec![CourseRow::from_record(record, String::new())];
    }

    phones
        .iter()
        .map(|phone| CourseRow::from_record(record, phone.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CourseRecord {
        CourseRecord {
            url: "https://www.kurstap.az/kurslar/ingilis-dili".to_string(),
            course_id: "ingilis-dili".to_string(),
            institution_name: "Baku Language Centre".to_string(),
            course_title: "İngilis dili".to_string(),
            duration: "3 ay".to_string(),
            price: "150 AZN".to_string(),
            location: "Bakı, Nəsimi".to_string(),
            emails: "info@example.az".to_string(),
            address: "Nizami küç. 5".to_string(),
            website: "example.az".to_string(),
        }
    }

    #[test]
    fn test_expand_one_row_per_phone() {
        let record = sample_record();
        let phones = vec![
            "+994 50 123 45 67".to_string(),
            "+994501234568".to_string(),
        ];

        let rows = expand_rows(&record, &phones);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].phone_numbers, "+994 50 123 45 67");
        assert_eq!(rows[1].phone_numbers, "+994501234568");
        // Non-phone fields are duplicated unchanged
        assert_eq!(rows[0].course_id, rows[1].course_id);
        assert_eq!(rows[0].emails, rows[1].emails);
    }

    #[test]
    fn test_expand_without_phones_yields_single_row() {
        let record = sample_record();
        let rows = expand_rows(&record, &[]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].phone_numbers, "");
        assert_eq!(rows[0].course_title, "İngilis dili");
    }

    #[test]
    fn test_row_count_is_never_zero() {
        let record = CourseRecord::default();
        assert_eq!(expand_rows(&record, &[]).len(), 1);
        assert_eq!(expand_rows(&record, &["+994 1".to_string()]).len(), 1);
    }

    #[test]
    fn test_values_match_column_order() {
        let rows = expand_rows(&sample_record(), &["+994 50 123 45 67".to_string()]);
        let values = rows[0].values();

        assert_eq!(values.len(), OUTPUT_COLUMNS.len());
        assert_eq!(values[0], rows[0].url);
        assert_eq!(values[7], "+994 50 123 45 67");
        assert_eq!(values[10], "example.az");
    }
}

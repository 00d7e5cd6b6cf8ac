//! Per-page field extraction
//!
//! Pulls the named course fields out of a detail page. Only the top-level
//! container is mandatory; any individual field whose marker is missing
//! degrades to an empty string.

use crate::extract::document::CourseDocument;
use crate::extract::phone::extract_phone_numbers;
use crate::record::CourseRecord;

// Section labels as they appear on the site
const LABEL_DURATION: &str = "Kurs müddəti";
const LABEL_PRICE: &str = "Fərdi hazırlıq";
const LABEL_LOCATION: &str = "Şəhər, Rayon";
const LABEL_CONTACT: &str = "Əlaqə";
const LABEL_ADDRESS: &str = "Ünvan";
const LABEL_SOCIAL: &str = "Sosial media";

/// Country-code prefix that classifies a contact item as phone-like
const COUNTRY_PREFIX: &str = "+994";

/// A fully extracted detail page: the record plus its normalized phones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCourse {
    pub record: CourseRecord,
    pub phones: Vec<String>,
}

/// Extracts all course fields from a detail page body
///
/// Returns `None` when the page lacks the course container entirely (the
/// caller logs and drops the page). Individual missing fields never fail the
/// extraction.
pub fn extract_course(body: &str, url: &str, detail_marker: &str) -> Option<ExtractedCourse> {
    let document = CourseDocument::parse(body);
    let section = document.course_section()?;

    // Contact items are classified per line: phone-like items go through the
    // normalizer, email-like items are collected verbatim
    let mut phones: Vec<String> = Vec::new();
    let mut emails: Vec<String> = Vec::new();

    for item in section.section_items(LABEL_CONTACT) {
        if item.contains(COUNTRY_PREFIX) || item.chars().any(|c| c.is_ascii_digit()) {
            for phone in extract_phone_numbers(&item) {
                if !phones.contains(&phone) {
                    phones.push(phone);
                }
            }
        } else if item.contains('@') {
            emails.push(item);
        }
    }

    let record = CourseRecord {
        url: url.to_string(),
        course_id: course_id_from_url(url, detail_marker),
        institution_name: section
            .select_text("a.main-name span:last-child")
            .unwrap_or_default(),
        course_title: section.select_text(".title-desc").unwrap_or_default(),
        duration: section.section_value(LABEL_DURATION).unwrap_or_default(),
        price: section.section_value(LABEL_PRICE).unwrap_or_default(),
        location: section
            .section_value_joined(LABEL_LOCATION, ", ")
            .unwrap_or_default(),
        emails: emails.join(" | "),
        address: section.section_value(LABEL_ADDRESS).unwrap_or_default(),
        website: section.section_link_text(LABEL_SOCIAL).unwrap_or_default(),
    };

    Some(ExtractedCourse { record, phones })
}

/// Derives the course identifier from a detail URL
///
/// The identifier is the path segment immediately following the last
/// occurrence of the detail marker; a URL without the marker yields an empty
/// identifier.
pub fn course_id_from_url(url: &str, detail_marker: &str) -> String {
    match url.rsplit_once(detail_marker) {
        Some((_, rest)) => rest.split('/').next().unwrap_or_default().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "/kurslar/";

    fn full_page() -> String {
        r#"
        <html><body>
        <section class="course-top-part">
            <a class="main-name" href="/c/1"><span>logo</span><span>Baku Language Centre</span></a>
            <div class="title-desc">İngilis dili kursu</div>
            <div><span>Kurs müddəti</span><p>3 ay</p></div>
            <div><span>Fərdi hazırlıq</span><p>150 AZN</p></div>
            <div><span>Şəhər, Rayon</span><p>Bakı</p></div>
            <div><span>Əlaqə</span>
                <ul>
                    <li>+994 50 123 45 67+994501234568</li>
                    <li>info@blc.az</li>
                    <li>sales@blc.az</li>
                </ul>
            </div>
            <div><span>Ünvan</span><p>Nizami küç. 5</p></div>
            <div><span>Sosial media</span><ul><li><a href="https://blc.az">blc.az</a></li></ul></div>
        </section>
        </body></html>
        "#
        .to_string()
    }

    #[test]
    fn test_extract_full_page() {
        let url = "https://www.kurstap.az/kurslar/ingilis-dili-kursu";
        let extracted = extract_course(&full_page(), url, MARKER).unwrap();

        assert_eq!(extracted.record.url, url);
        assert_eq!(extracted.record.course_id, "ingilis-dili-kursu");
        assert_eq!(extracted.record.institution_name, "Baku Language Centre");
        assert_eq!(extracted.record.course_title, "İngilis dili kursu");
        assert_eq!(extracted.record.duration, "3 ay");
        assert_eq!(extracted.record.price, "150 AZN");
        assert_eq!(extracted.record.location, "Bakı");
        assert_eq!(extracted.record.address, "Nizami küç. 5");
        assert_eq!(extracted.record.website, "blc.az");
    }

    #[test]
    fn test_concatenated_phones_become_distinct() {
        let extracted =
            extract_course(&full_page(), "https://x.az/kurslar/a", MARKER).unwrap();
        assert_eq!(
            extracted.phones,
            vec!["+994 50 123 45 67", "+994501234568"]
        );
    }

    #[test]
    fn test_emails_joined_with_delimiter() {
        let extracted =
            extract_course(&full_page(), "https://x.az/kurslar/a", MARKER).unwrap();
        assert_eq!(extracted.record.emails, "info@blc.az | sales@blc.az");
    }

    #[test]
    fn test_missing_container_fails_extraction() {
        let body = "<html><body><h1>Not found</h1></body></html>";
        assert!(extract_course(body, "https://x.az/kurslar/a", MARKER).is_none());
    }

    #[test]
    fn test_missing_fields_degrade_to_empty() {
        let body = r#"
            <section class="course-top-part">
                <div class="title-desc">Riyaziyyat</div>
            </section>
        "#;
        let extracted = extract_course(body, "https://x.az/kurslar/riyaziyyat", MARKER).unwrap();

        assert_eq!(extracted.record.course_title, "Riyaziyyat");
        assert_eq!(extracted.record.institution_name, "");
        assert_eq!(extracted.record.duration, "");
        assert_eq!(extracted.record.price, "");
        assert_eq!(extracted.record.emails, "");
        assert_eq!(extracted.record.website, "");
        assert!(extracted.phones.is_empty());
    }

    #[test]
    fn test_phone_duplicated_across_items_kept_once() {
        let body = r#"
            <section class="course-top-part">
                <div><span>Əlaqə</span>
                    <ul>
                        <li>+994 50 123 45 67</li>
                        <li>+994 50 123 45 67</li>
                    </ul>
                </div>
            </section>
        "#;
        let extracted = extract_course(body, "https://x.az/kurslar/a", MARKER).unwrap();
        assert_eq!(extracted.phones, vec!["+994 50 123 45 67"]);
    }

    #[test]
    fn test_contact_item_without_digits_or_at_is_ignored() {
        let body = r#"
            <section class="course-top-part">
                <div><span>Əlaqə</span>
                    <ul>
                        <li>WhatsApp only</li>
                        <li>info@blc.az</li>
                    </ul>
                </div>
            </section>
        "#;
        let extracted = extract_course(body, "https://x.az/kurslar/a", MARKER).unwrap();
        assert!(extracted.phones.is_empty());
        assert_eq!(extracted.record.emails, "info@blc.az");
    }

    #[test]
    fn test_course_id_from_url() {
        assert_eq!(
            course_id_from_url("https://www.kurstap.az/kurslar/ingilis-dili", MARKER),
            "ingilis-dili"
        );
        assert_eq!(
            course_id_from_url("https://www.kurstap.az/kurslar/abc/details", MARKER),
            "abc"
        );
        assert_eq!(
            course_id_from_url("https://www.kurstap.az/kateqoriyalar", MARKER),
            ""
        );
    }
}

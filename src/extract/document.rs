//! Structured access to a course detail page
//!
//! The site marks each field with a labeled `<span>` whose value lives in the
//! next `<p>` or `<ul>` in document order. That layout is fragile, so it is
//! wrapped here as a small capability: the extractor asks for "the value of
//! the section labeled X" and never touches selectors itself, which also
//! makes it testable against synthetic documents.

use scraper::{ElementRef, Html, Selector};

/// A parsed course detail page
pub struct CourseDocument {
    html: Html,
}

impl CourseDocument {
    /// Parses a page body; parsing itself never fails, missing structure
    /// surfaces later as an absent course section
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Locates the single top-level course container
    ///
    /// Returns `None` when the page has no `section.course-top-part`, which
    /// fails extraction for the whole page.
    pub fn course_section(&self) -> Option<CourseSection<'_>> {
        let selector = Selector::parse("section.course-top-part").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|root| CourseSection { root })
    }
}

/// The course container, scoping all field lookups
pub struct CourseSection<'a> {
    root: ElementRef<'a>,
}

impl<'a> CourseSection<'a> {
    /// Text of the first element matching a CSS selector within the section
    pub fn select_text(&self, css: &str) -> Option<String> {
        let selector = Selector::parse(css).ok()?;
        self.root
            .select(&selector)
            .next()
            .map(|element| collapse_text(element, " "))
            .filter(|text| !text.is_empty())
    }

    /// Value of the labeled section: the first `<p>` following the label span
    pub fn section_value(&self, label: &str) -> Option<String> {
        self.section_value_joined(label, " ")
    }

    /// Like `section_value`, but joins the value's text fragments with a
    /// custom separator (the location field renders city and district as
    /// separate fragments)
    pub fn section_value_joined(&self, label: &str, separator: &str) -> Option<String> {
        self.element_after_label(label, "p")
            .map(|element| collapse_text(element, separator))
            .filter(|text| !text.is_empty())
    }

    /// Line items of the labeled section: the `<li>` texts of the first
    /// `<ul>` following the label span
    pub fn section_items(&self, label: &str) -> Vec<String> {
        let Some(list) = self.element_after_label(label, "ul") else {
            return Vec::new();
        };

        let Ok(item_selector) = Selector::parse("li") else {
            return Vec::new();
        };

        list.select(&item_selector)
            .map(|item| collapse_text(item, " "))
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Text of the first anchor inside the labeled section's `<ul>`
    pub fn section_link_text(&self, label: &str) -> Option<String> {
        let list = self.element_after_label(label, "ul")?;
        let anchor_selector = Selector::parse("a").ok()?;
        list.select(&anchor_selector)
            .next()
            .map(|anchor| collapse_text(anchor, " "))
            .filter(|text| !text.is_empty())
    }

    /// Finds the first `tag` element that follows, in document order, a span
    /// whose text contains `label`
    fn element_after_label(&self, label: &str, tag: &str) -> Option<ElementRef<'a>> {
        let mut label_seen = false;

        for node in self.root.descendants() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };

            if !label_seen {
                if element.value().name() == "span"
                    && element.text().collect::<String>().contains(label)
                {
                    label_seen = true;
                }
            } else if element.value().name() == tag {
                return Some(element);
            }
        }

        None
    }
}

/// Joins an element's trimmed text fragments with a separator
pub(crate) fn collapse_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <section class="course-top-part">
            <a class="main-name" href="/company/7"><span>icon</span><span>Tech Academy</span></a>
            <div class="title-desc">Proqramlaşdırma</div>
            <div class="info-block">
                <span>Kurs müddəti</span>
                <p>6 ay</p>
            </div>
            <div class="info-block">
                <span>Əlaqə</span>
                <ul>
                    <li>+994 50 123 45 67</li>
                    <li>info@tech.az</li>
                </ul>
            </div>
            <div class="info-block">
                <span>Sosial media</span>
                <ul><li><a href="https://tech.az">tech.az</a></li></ul>
            </div>
        </section>
        </body></html>
    "#;

    #[test]
    fn test_course_section_found() {
        let document = CourseDocument::parse(PAGE);
        assert!(document.course_section().is_some());
    }

    #[test]
    fn test_course_section_absent() {
        let document = CourseDocument::parse("<html><body><p>404</p></body></html>");
        assert!(document.course_section().is_none());
    }

    #[test]
    fn test_select_text() {
        let document = CourseDocument::parse(PAGE);
        let section = document.course_section().unwrap();
        assert_eq!(
            section.select_text(".title-desc"),
            Some("Proqramlaşdırma".to_string())
        );
        assert_eq!(
            section.select_text("a.main-name span:last-child"),
            Some("Tech Academy".to_string())
        );
    }

    #[test]
    fn test_section_value() {
        let document = CourseDocument::parse(PAGE);
        let section = document.course_section().unwrap();
        assert_eq!(
            section.section_value("Kurs müddəti"),
            Some("6 ay".to_string())
        );
    }

    #[test]
    fn test_section_value_missing_label() {
        let document = CourseDocument::parse(PAGE);
        let section = document.course_section().unwrap();
        assert_eq!(section.section_value("Fərdi hazırlıq"), None);
    }

    #[test]
    fn test_section_value_joined() {
        let html = r#"
            <section class="course-top-part">
                <span>Şəhər, Rayon</span>
                <p><span>Bakı</span><span>Nəsimi</span></p>
            </section>
        "#;
        let document = CourseDocument::parse(html);
        let section = document.course_section().unwrap();
        assert_eq!(
            section.section_value_joined("Şəhər, Rayon", ", "),
            Some("Bakı, Nəsimi".to_string())
        );
    }

    #[test]
    fn test_section_items() {
        let document = CourseDocument::parse(PAGE);
        let section = document.course_section().unwrap();
        assert_eq!(
            section.section_items("Əlaqə"),
            vec!["+994 50 123 45 67", "info@tech.az"]
        );
    }

    #[test]
    fn test_section_items_missing_label() {
        let document = CourseDocument::parse(PAGE);
        let section = document.course_section().unwrap();
        assert!(section.section_items("Ünvan").is_empty());
    }

    #[test]
    fn test_section_link_text() {
        let document = CourseDocument::parse(PAGE);
        let section = document.course_section().unwrap();
        assert_eq!(
            section.section_link_text("Sosial media"),
            Some("tech.az".to_string())
        );
    }

    #[test]
    fn test_label_matches_by_substring() {
        let html = r#"
            <section class="course-top-part">
                <span>Kurs müddəti:</span>
                <p>12 həftə</p>
            </section>
        "#;
        let document = CourseDocument::parse(html);
        let section = document.course_section().unwrap();
        assert_eq!(
            section.section_value("Kurs müddəti"),
            Some("12 həftə".to_string())
        );
    }
}

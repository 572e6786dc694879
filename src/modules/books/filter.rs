//! Query-string filters for listing books

use super::models::Book;

/// Raw `GET /books` query string.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

/// Folds raw query pairs; a repeated key keeps its last value and unknown
/// keys are ignored.
impl FromIterator<(String, String)> for BookQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => query.name = Some(value),
                "reading" => query.reading = Some(value),
                "finished" => query.finished = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Boolean criterion parsed from loosely typed query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagFilter {
    Equals(bool),
    /// Text that is neither truthy nor falsy; matches no book.
    Unrecognized,
}

impl FlagFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => return Self::Equals(true),
            "" | "0" | "false" | "no" | "off" => return Self::Equals(false),
            _ => {}
        }

        match raw.parse::<f64>() {
            Ok(n) if n.is_nan() => Self::Unrecognized,
            Ok(n) => Self::Equals(n != 0.0),
            Err(_) => Self::Unrecognized,
        }
    }

    pub fn matches(self, value: bool) -> bool {
        match self {
            Self::Equals(expected) => expected == value,
            Self::Unrecognized => false,
        }
    }
}

/// Conjunction of optional criteria; an empty filter matches every book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Lowercased substring of the book name
    name: Option<String>,
    reading: Option<FlagFilter>,
    finished: Option<FlagFilter>,
}

impl BookFilter {
    pub fn name(mut self, needle: &str) -> Self {
        self.name = Some(needle.to_lowercase());
        self
    }

    pub fn reading(mut self, flag: FlagFilter) -> Self {
        self.reading = Some(flag);
        self
    }

    pub fn finished(mut self, flag: FlagFilter) -> Self {
        self.finished = Some(flag);
        self
    }

    pub fn matches(&self, book: &Book) -> bool {
        if let Some(needle) = &self.name {
            if !book.name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        self.reading.map_or(true, |flag| flag.matches(book.reading))
            && self.finished.map_or(true, |flag| flag.matches(book.finished))
    }
}

impl From<BookQuery> for BookFilter {
    fn from(query: BookQuery) -> Self {
        let mut filter = BookFilter::default();
        if let Some(name) = query.name {
            filter = filter.name(&name);
        }
        if let Some(reading) = query.reading {
            filter = filter.reading(FlagFilter::parse(&reading));
        }
        if let Some(finished) = query.finished {
            filter = filter.finished(FlagFilter::parse(&finished));
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::books::models::{BookId, BookPayload};
    use time::OffsetDateTime;

    fn book(name: &str, reading: bool, finished: bool) -> Book {
        let pages = if finished { 10 } else { 5 };
        BookPayload {
            name: Some(name.to_string()),
            page_count: Some(10),
            read_page: Some(pages),
            reading,
            ..BookPayload::default()
        }
        .validate()
        .unwrap()
        .into_book(BookId::generate(), OffsetDateTime::now_utc())
    }

    #[test]
    fn flag_parsing() {
        assert_eq!(FlagFilter::parse("1"), FlagFilter::Equals(true));
        assert_eq!(FlagFilter::parse("TRUE"), FlagFilter::Equals(true));
        assert_eq!(FlagFilter::parse("2"), FlagFilter::Equals(true));
        assert_eq!(FlagFilter::parse("0"), FlagFilter::Equals(false));
        assert_eq!(FlagFilter::parse(" off "), FlagFilter::Equals(false));
        assert_eq!(FlagFilter::parse("maybe"), FlagFilter::Unrecognized);
        assert_eq!(FlagFilter::parse("NaN"), FlagFilter::Unrecognized);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = BookFilter::default();
        assert!(filter.matches(&book("Dune", true, false)));
        assert!(filter.matches(&book("Emma", false, true)));
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let filter = BookFilter::default().name("DUN");
        assert!(filter.matches(&book("Dune", false, false)));
        assert!(filter.matches(&book("Children of dune", false, false)));
        assert!(!filter.matches(&book("Emma", false, false)));
    }

    #[test]
    fn criteria_compose_conjunctively() {
        let filter = BookFilter::from(BookQuery {
            name: Some("dun".to_string()),
            reading: Some("1".to_string()),
            finished: None,
        });

        assert!(filter.matches(&book("Dune", true, false)));
        assert!(!filter.matches(&book("Duna", false, true)));
    }

    #[test]
    fn repeated_query_keys_keep_the_last_value() {
        let query: BookQuery = [
            ("reading", "1"),
            ("page", "2"),
            ("reading", "0"),
            ("name", "Dune"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert_eq!(query.reading.as_deref(), Some("0"));
        assert_eq!(query.name.as_deref(), Some("Dune"));
        assert_eq!(query.finished, None);
    }

    #[test]
    fn unrecognized_flag_matches_nothing() {
        let filter = BookFilter::default().finished(FlagFilter::parse("sometimes"));
        assert!(!filter.matches(&book("Dune", true, true)));
        assert!(!filter.matches(&book("Dune", true, false)));
    }
}

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Cost, Course, Level};

/// Error types for catalog loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Read(#[from] csv::Error),

    #[error("Catalog at {0} contains no usable courses")]
    Empty(String),
}

/// One raw CSV row before normalization. List-valued fields arrive as
/// delimited text and level/cost as free tokens.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    title: String,
    provider: String,
    duration: String,
    prerequisites: String,
    skill_tags: String,
    level: String,
    link: String,
    domain: String,
    cost: String,
}

impl From<CatalogRow> for Course {
    fn from(row: CatalogRow) -> Self {
        Course {
            title: row.title.trim().to_string(),
            provider: row.provider.trim().to_string(),
            duration: row.duration.trim().to_string(),
            prerequisites: parse_list(&row.prerequisites),
            skill_tags: parse_list(&row.skill_tags),
            level: Level::parse(&row.level),
            domain: row.domain.trim().to_string(),
            cost: Cost::parse(&row.cost),
            link: row.link.trim().to_string(),
        }
    }
}

/// Parses a list-valued CSV field into tokens.
///
/// The canonical format is semicolon-delimited, but fields exported from
/// spreadsheets sometimes arrive as `['python', 'statistics']`, so stray
/// brackets and quotes are stripped and a comma delimiter is accepted.
/// The "none" sentinel and empty tokens normalize away; a field that
/// yields nothing becomes an empty list rather than an error.
fn parse_list(field: &str) -> Vec<String> {
    let trimmed = field.trim().trim_start_matches('[').trim_end_matches(']');
    let delimiter = if trimmed.contains(';') { ';' } else { ',' };

    trimmed
        .split(delimiter)
        .map(|token| token.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|token| !token.is_empty() && !token.eq_ignore_ascii_case("none"))
        .map(str::to_string)
        .collect()
}

/// Loads the course catalog from a CSV file, preserving file order.
///
/// A row that fails to deserialize is skipped with a warning so one bad
/// record never blocks the rest of the catalog. Only an unreadable file
/// or a catalog with no usable rows is an error.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Course>, CatalogError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut catalog = Vec::new();
    for (row_number, row) in reader.deserialize::<CatalogRow>().enumerate() {
        match row {
            Ok(row) => catalog.push(Course::from(row)),
            Err(e) => {
                tracing::warn!(row = row_number + 1, error = %e, "Skipping malformed catalog row");
            }
        }
    }

    if catalog.is_empty() {
        return Err(CatalogError::Empty(path.display().to_string()));
    }

    tracing::info!(courses = catalog.len(), path = %path.display(), "Loaded course catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const HEADER: &str = "title,provider,duration,prerequisites,skill_tags,level,link,domain,cost\n";

    #[test]
    fn test_parse_list_semicolon_delimited() {
        assert_eq!(
            parse_list("python; linear algebra; statistics"),
            vec!["python", "linear algebra", "statistics"]
        );
    }

    #[test]
    fn test_parse_list_bracketed_export() {
        assert_eq!(
            parse_list("['python', 'statistics']"),
            vec!["python", "statistics"]
        );
    }

    #[test]
    fn test_parse_list_none_sentinel() {
        assert!(parse_list("none").is_empty());
        assert!(parse_list("['none']").is_empty());
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_load_catalog_preserves_order_and_normalizes() {
        let file = write_catalog(&format!(
            "{HEADER}\
             Python for Beginners,Coursera,6 weeks,none,python; programming,beginner,https://example.org/python,software development,free\n\
             Deep Learning Advanced,edX,12 weeks,machine learning; calculus,deep learning,advanced,https://example.org/dl,artificial intelligence,paid\n"
        ));
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].title, "Python for Beginners");
        assert!(catalog[0].prerequisites.is_empty());
        assert_eq!(catalog[0].level, Level::Beginner);
        assert_eq!(catalog[0].cost, Cost::Free);
        assert_eq!(
            catalog[1].prerequisites,
            vec!["machine learning", "calculus"]
        );
        assert_eq!(catalog[1].level, Level::Advanced);
    }

    #[test]
    fn test_malformed_row_is_skipped() {
        let file = write_catalog(&format!(
            "{HEADER}\
             Good Course,Coursera,6 weeks,none,python,beginner,https://example.org,software development,free\n\
             only,three,fields\n"
        ));
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].title, "Good Course");
    }

    #[test]
    fn test_unknown_level_defaults_to_beginner() {
        let file = write_catalog(&format!(
            "{HEADER}\
             Mystery Course,Udemy,4 weeks,none,testing,expert,https://example.org,software development,subscription\n"
        ));
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog[0].level, Level::Beginner);
        assert_eq!(catalog[0].cost, Cost::Paid);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let file = write_catalog(HEADER);
        assert!(matches!(
            load_catalog(file.path()),
            Err(CatalogError::Empty(_))
        ));
    }
}

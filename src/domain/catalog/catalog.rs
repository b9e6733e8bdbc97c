//! Read-only survey catalog.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use super::{builtin, CatalogError, Survey};
use crate::domain::foundation::SurveySlug;

/// The set of surveys offered on the selection screen, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyCatalog {
    pub(super) surveys: Vec<Survey>,
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    surveys: Vec<Survey>,
}

impl SurveyCatalog {
    /// Creates a validated catalog.
    ///
    /// # Errors
    ///
    /// - `Empty` if no surveys are given
    /// - `DuplicateSlug` if two surveys share a slug
    /// - any survey validation error
    pub fn new(surveys: Vec<Survey>) -> Result<Self, CatalogError> {
        if surveys.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut slugs = HashSet::new();
        for survey in &surveys {
            survey.validate()?;
            if !slugs.insert(survey.slug()) {
                return Err(CatalogError::DuplicateSlug(survey.slug().clone()));
            }
        }

        Ok(Self { surveys })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        builtin::BUILTIN_CATALOG.clone()
    }

    /// Parses a catalog from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.surveys)
    }

    /// Reads and parses a YAML catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            surveys = catalog.len(),
            "Loaded survey catalog"
        );
        Ok(catalog)
    }

    pub fn surveys(&self) -> &[Survey] {
        &self.surveys
    }

    /// Looks up a survey by slug.
    pub fn find(&self, slug: &SurveySlug) -> Option<&Survey> {
        self.surveys.iter().find(|s| s.slug() == slug)
    }

    pub fn len(&self) -> usize {
        self.surveys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_SURVEYS: &str = r#"
surveys:
  - slug: first
    title: First
    description: The first survey
    questions:
      - id: 1
        text: Tea or coffee?
        options: [Tea, Coffee]
  - slug: second
    title: Second
    questions:
      - id: 1
        text: Cats or dogs?
        options: [Cats, Dogs]
      - id: 2
        text: Sea or mountains?
        options: [Sea, Mountains]
"#;

    #[test]
    fn from_yaml_preserves_order() {
        let catalog = SurveyCatalog::from_yaml_str(TWO_SURVEYS).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.surveys()[0].slug().as_str(), "first");
        assert_eq!(catalog.surveys()[1].question_count(), 2);
        assert_eq!(catalog.surveys()[1].description(), "");
    }

    #[test]
    fn find_by_slug() {
        let catalog = SurveyCatalog::from_yaml_str(TWO_SURVEYS).unwrap();
        let slug = SurveySlug::new("second").unwrap();
        assert_eq!(catalog.find(&slug).unwrap().title(), "Second");
        assert!(catalog.find(&SurveySlug::new("third").unwrap()).is_none());
    }

    #[test]
    fn rejects_empty_catalog() {
        let result = SurveyCatalog::from_yaml_str("surveys: []");
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let yaml = r#"
surveys:
  - slug: same
    title: One
    questions: [{id: 1, text: Q, options: [A, B]}]
  - slug: same
    title: Two
    questions: [{id: 1, text: Q, options: [A, B]}]
"#;
        let result = SurveyCatalog::from_yaml_str(yaml);
        assert!(matches!(result, Err(CatalogError::DuplicateSlug(_))));
    }

    #[test]
    fn rejects_invalid_slug_in_file() {
        let yaml = r#"
surveys:
  - slug: Not Valid
    title: One
    questions: [{id: 1, text: Q, options: [A, B]}]
"#;
        let result = SurveyCatalog::from_yaml_str(yaml);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_SURVEYS.as_bytes()).unwrap();

        let catalog = SurveyCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let err = SurveyCatalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = SurveyCatalog::builtin();
        assert!(!builtin.is_empty());
        assert_eq!(SurveyCatalog::new(builtin.surveys().to_vec()).unwrap(), builtin);
    }
}

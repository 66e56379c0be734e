use crate::error::ResultMessage;
use crate::error::TdconvError;
use glob::Pattern;

/// Criteria for selecting which sheets of a workbook hold table definitions.
#[derive(Clone, Debug, Default)]
pub struct Criteria {
    /// Sheet name patterns for filtering which sheets are tables.
    pub sheet_name_patterns: Option<Vec<Pattern>>,

    /// Sheet holding the columns shared by every table.
    pub common_sheet_name: Option<String>,

    /// Maximum number of tables to read.
    pub sheet_limit: Option<usize>,
}

impl Criteria {
    /// Compiles glob patterns (e.g. `"m_*"`) into sheet name filters.
    pub fn with_sheet_name_patterns(mut self, patterns: &[&str]) -> Result<Self, TdconvError> {
        let patterns = patterns
            .iter()
            .map(|pattern| Pattern::new(pattern).map_err(TdconvError::from))
            .collect::<Result<Vec<_>, _>>()
            .with_prefix("Invalid sheet name pattern")?;
        self.sheet_name_patterns = Some(patterns);
        Ok(self)
    }

    pub fn with_common_sheet_name(mut self, name: &str) -> Self {
        self.common_sheet_name = Some(name.to_owned());
        self
    }

    pub fn with_sheet_limit(mut self, limit: usize) -> Self {
        self.sheet_limit = Some(limit);
        self
    }

    /// Checks if a sheet name matches the criteria patterns.
    /// Returns true if no patterns are specified or if name matches any pattern.
    pub fn accept(&self, sheet_name: &str) -> bool {
        if let Some(patterns) = &self.sheet_name_patterns {
            patterns.iter().any(|pattern| pattern.matches(sheet_name))
        } else {
            true
        }
    }

    /// Returns true if the sheet is the one registered for common columns.
    pub fn is_common(&self, sheet_name: &str) -> bool {
        self.common_sheet_name.as_deref() == Some(sheet_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_everything_by_default() {
        let criteria = Criteria::default();
        assert!(criteria.accept("users"));
        assert!(criteria.accept(""));
        assert!(!criteria.is_common("users"));
    }

    #[test]
    fn accept_matching_patterns() {
        let criteria = Criteria::default()
            .with_sheet_name_patterns(&["m_*", "t_user?"])
            .unwrap();
        assert!(criteria.accept("m_items"));
        assert!(criteria.accept("t_users"));
        assert!(!criteria.accept("t_user"));
        assert!(!criteria.accept("README"));
    }

    #[test]
    fn invalid_pattern() {
        let error = Criteria::default().with_sheet_name_patterns(&["[a"]).unwrap_err();
        assert!(error.to_string().starts_with("Invalid sheet name pattern: "));
    }

    #[test]
    fn common_sheet() {
        let criteria = Criteria::default().with_common_sheet_name("common").with_sheet_limit(2);
        assert!(criteria.is_common("common"));
        assert!(!criteria.is_common("Common"));
        assert_eq!(criteria.sheet_limit, Some(2));
    }
}

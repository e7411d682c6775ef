use serde::Deserialize;

/// How position sets are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum OutputFormat {
    /// `{2,5,7}`
    Ids,
    /// `0100101`, position 1 first
    Bits,
}

#[derive(Debug, Clone)]
pub struct CfgOutput {
    pub format: OutputFormat,
    /// Print the raw syndrome next to decode results
    pub show_syndrome: bool,
}

impl Default for CfgOutput {
    fn default() -> Self {
        Self {
            format: OutputFormat::Ids,
            show_syndrome: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CfgLesson {
    /// Number of values explained per invitation scan, 0..15
    pub explain_rows: usize,
}

impl Default for CfgLesson {
    fn default() -> Self {
        Self { explain_rows: default_explain_rows() }
    }
}

#[inline]
fn default_explain_rows() -> usize {
    6
}

#[derive(Debug, Clone, Default)]
pub struct ToolConfig {
    /// Optional verbose log file
    pub debug_log: Option<String>,
    pub output: CfgOutput,
    pub lesson: CfgLesson,
}

impl ToolConfig {
    /// Validate that all configuration fields are within range.
    pub fn validate(&self) -> Result<(), &str> {
        if self.lesson.explain_rows > 15 {
            return Err("lesson.explain_rows must be at most 15");
        }
        if let Some(ref path) = self.debug_log {
            if path.trim().is_empty() {
                return Err("debug_log must not be empty when set");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = ToolConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.lesson.explain_rows, 6);
        assert_eq!(cfg.output.format, OutputFormat::Ids);
    }

    #[test]
    fn test_validate_rejects() {
        let mut cfg = ToolConfig::default();
        cfg.lesson.explain_rows = 16;
        assert!(cfg.validate().is_err());

        let mut cfg = ToolConfig::default();
        cfg.debug_log = Some("  ".to_string());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_explain_rows_bounds_accepted() {
        for rows in [0, 15] {
            let mut cfg = ToolConfig::default();
            cfg.lesson.explain_rows = rows;
            assert!(cfg.validate().is_ok());
        }
    }
}

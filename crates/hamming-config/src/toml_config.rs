use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::tool_config::{CfgLesson, CfgOutput, OutputFormat, ToolConfig};

const EXPECTED_CONFIG_VERSION: &str = "0.1";

/// Build `ToolConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    if root.config_version != EXPECTED_CONFIG_VERSION {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, EXPECTED_CONFIG_VERSION
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref out) = root.output {
        if !out.extra.is_empty() {
            return Err(format!("Unrecognized fields: output::{:?}", sorted_keys(&out.extra)).into());
        }
    }
    if let Some(ref lesson) = root.lesson {
        if !lesson.extra.is_empty() {
            return Err(format!("Unrecognized fields: lesson::{:?}", sorted_keys(&lesson.extra)).into());
        }
    }

    let mut cfg = ToolConfig {
        debug_log: root.debug_log,
        output: CfgOutput::default(),
        lesson: CfgLesson::default(),
    };

    if let Some(out) = root.output {
        apply_output_patch(&mut cfg.output, out);
    }
    if let Some(lesson) = root.lesson {
        apply_lesson_patch(&mut cfg.lesson, lesson);
    }

    cfg.validate().map_err(|e| format!("Invalid configuration: {}", e))?;
    Ok(cfg)
}

/// Build `ToolConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `ToolConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    from_reader(f)
}

fn apply_output_patch(dst: &mut CfgOutput, src: OutputDto) {
    if let Some(v) = src.format {
        dst.format = v;
    }
    if let Some(v) = src.show_syndrome {
        dst.show_syndrome = v;
    }
}

fn apply_lesson_patch(dst: &mut CfgLesson, src: LessonDto) {
    if let Some(v) = src.explain_rows {
        dst.explain_rows = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    output: Option<OutputDto>,

    #[serde(default)]
    lesson: Option<LessonDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct OutputDto {
    format: Option<OutputFormat>,
    show_syndrome: Option<bool>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct LessonDto {
    explain_rows: Option<usize>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let toml = r#"
            config_version = "0.1"
            debug_log = "hamming.log"

            [output]
            format = "Bits"
            show_syndrome = false

            [lesson]
            explain_rows = 4
        "#;
        let cfg = from_toml_str(toml).unwrap();
        assert_eq!(cfg.debug_log.as_deref(), Some("hamming.log"));
        assert_eq!(cfg.output.format, OutputFormat::Bits);
        assert!(!cfg.output.show_syndrome);
        assert_eq!(cfg.lesson.explain_rows, 4);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let cfg = from_toml_str("config_version = \"0.1\"").unwrap();
        assert_eq!(cfg.debug_log, None);
        assert_eq!(cfg.output.format, OutputFormat::Ids);
        assert!(cfg.output.show_syndrome);
        assert_eq!(cfg.lesson.explain_rows, 6);
    }

    #[test]
    fn test_rejects_wrong_version() {
        let err = from_toml_str("config_version = \"0.5\"").unwrap_err();
        assert!(err.to_string().contains("config_version"));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = from_toml_str("config_version = \"0.1\"\nvip = true").unwrap_err();
        assert!(err.to_string().contains("vip"));

        let err = from_toml_str("config_version = \"0.1\"\n[output]\ncolour = \"red\"").unwrap_err();
        assert!(err.to_string().contains("output::"));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = from_toml_str("config_version = \"0.1\"\n[lesson]\nexplain_rows = 20").unwrap_err();
        assert!(err.to_string().contains("explain_rows"));
    }

    #[test]
    fn test_zero_explain_rows() {
        let cfg = from_toml_str("config_version = \"0.1\"\n[lesson]\nexplain_rows = 0").unwrap();
        assert_eq!(cfg.lesson.explain_rows, 0);
    }

    #[test]
    fn test_from_reader() {
        let cfg = from_reader("config_version = \"0.1\"\n[output]\nformat = \"Ids\"".as_bytes()).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Ids);
    }
}

//! Source configuration
//!
//! Sources come from `PATH=LABEL` command-line pairs, a TOML config file,
//! or the built-in default set. Each source may override the default
//! column names for its export format.

use std::path::{Path, PathBuf};

use immerge_io::ColumnNames;
use serde::{Deserialize, Serialize};

/// One source export to merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub file: PathBuf,
    pub label: String,
    /// Column overrides for this source; defaults apply when absent
    #[serde(default)]
    pub title_col: Option<String>,
    #[serde(default)]
    pub abstract_col: Option<String>,
    #[serde(default)]
    pub doi_col: Option<String>,
}

impl SourceSpec {
    pub fn new(file: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            label: label.into(),
            title_col: None,
            abstract_col: None,
            doi_col: None,
        }
    }

    /// Parse a `PATH=LABEL` command-line argument
    pub fn parse_arg(arg: &str) -> Result<Self, String> {
        match arg.split_once('=') {
            Some((path, label)) if !path.is_empty() && !label.is_empty() => {
                Ok(Self::new(path, label))
            }
            _ => Err(format!("invalid source '{arg}', expected PATH=LABEL")),
        }
    }

    /// Effective column names for this source
    pub fn columns(&self, defaults: &ColumnNames) -> ColumnNames {
        ColumnNames {
            title_col: self
                .title_col
                .clone()
                .unwrap_or_else(|| defaults.title_col.clone()),
            abstract_col: self
                .abstract_col
                .clone()
                .unwrap_or_else(|| defaults.abstract_col.clone()),
            doi_col: self
                .doi_col
                .clone()
                .unwrap_or_else(|| defaults.doi_col.clone()),
        }
    }
}

/// TOML config file layout: a `[[sources]]` table per export
#[derive(Debug, Deserialize)]
struct ConfigFile {
    sources: Vec<SourceSpec>,
}

/// Load source specs from a TOML config file
pub fn load(path: &Path) -> Result<Vec<SourceSpec>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.sources)
}

/// The default source set when nothing is configured
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new("scopus.csv", "Scopus"),
        SourceSpec::new("ieee.csv", "IEEE"),
        SourceSpec::new("pubmed.csv", "PubMed"),
        SourceSpec::new("wos.csv", "WOS"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arg() {
        let spec = SourceSpec::parse_arg("data/scopus.csv=Scopus").unwrap();
        assert_eq!(spec.file, PathBuf::from("data/scopus.csv"));
        assert_eq!(spec.label, "Scopus");
    }

    #[test]
    fn test_parse_arg_rejects_missing_label() {
        assert!(SourceSpec::parse_arg("scopus.csv").is_err());
        assert!(SourceSpec::parse_arg("scopus.csv=").is_err());
        assert!(SourceSpec::parse_arg("=Scopus").is_err());
    }

    #[test]
    fn test_columns_fall_back_to_defaults() {
        let mut spec = SourceSpec::new("a.csv", "A");
        spec.title_col = Some("Paper_Title".to_string());

        let columns = spec.columns(&ColumnNames::default());
        assert_eq!(columns.title_col, "Paper_Title");
        assert_eq!(columns.abstract_col, "Abstract");
        assert_eq!(columns.doi_col, "DOI");
    }

    #[test]
    fn test_load_toml_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"
[[sources]]
file = "scopus.csv"
label = "Scopus"

[[sources]]
file = "ieee.csv"
label = "IEEE"
title_col = "Document Title"
"#,
        )
        .unwrap();

        let sources = load(file.path()).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[1].title_col.as_deref(), Some("Document Title"));
        assert_eq!(sources[0].title_col, None);
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_yml::Value;

use crate::pattern::TokenGrammar;

/// Resolved configuration from `.tplex.yml`.
///
/// Every key is optional; CLI flags take precedence over config values.
#[derive(Debug, Default)]
pub struct ResolvedConfig {
    grammar: Option<TokenGrammar>,
    output_dir: Option<PathBuf>,
    excludes: Vec<String>,
}

impl ResolvedConfig {
    pub fn grammar(&self) -> Option<TokenGrammar> {
        self.grammar
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }
}

/// Load config from the given path, or look for `.tplex.yml` in the target
/// directory. Returns defaults if the file doesn't exist.
pub fn load_config(path: Option<&Path>, target_dir: Option<&Path>) -> Result<ResolvedConfig> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => target_dir.unwrap_or(Path::new(".")).join(".tplex.yml"),
    };

    if !config_path.exists() {
        return Ok(ResolvedConfig::default());
    }

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config {}", config_path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config {}", config_path.display()))
}

fn parse_config(contents: &str) -> Result<ResolvedConfig> {
    let raw: Value = serde_yml::from_str(contents).context("failed to parse YAML")?;
    let mut config = ResolvedConfig::default();

    let Value::Mapping(map) = &raw else {
        return Ok(config);
    };
    for (key, value) in map {
        match key.as_str() {
            Some("Grammar") => {
                let name = value.as_str().unwrap_or_default();
                config.grammar = Some(
                    TokenGrammar::from_name(name)
                        .with_context(|| format!("unknown grammar {name:?}"))?,
                );
            }
            Some("OutputDir") => {
                if let Some(dir) = value.as_str() {
                    config.output_dir = Some(PathBuf::from(dir));
                }
            }
            Some("Exclude") => {
                if let Some(patterns) = value.as_sequence() {
                    config.excludes = patterns
                        .iter()
                        .filter_map(|v| v.as_str().map(String::from))
                        .collect();
                }
            }
            // Unknown keys are ignored for forward compatibility
            _ => {}
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let config = load_config(Some(Path::new("/nonexistent/.tplex.yml")), None).unwrap();
        assert_eq!(config.grammar(), None);
        assert_eq!(config.output_dir(), None);
        assert!(config.excludes().is_empty());
    }

    #[test]
    fn parses_all_keys() {
        let config = parse_config(
            "Grammar: bracket\nOutputDir: docs/placeholders\nExclude:\n  - \"**/draft*.docx\"\n",
        )
        .unwrap();
        assert_eq!(config.grammar(), Some(TokenGrammar::Bracket));
        assert_eq!(
            config.output_dir(),
            Some(Path::new("docs/placeholders"))
        );
        assert_eq!(config.excludes(), ["**/draft*.docx"]);
    }

    #[test]
    fn unknown_grammar_is_an_error() {
        let result = parse_config("Grammar: parens\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = parse_config("Grammar: brace\nFutureKey: whatever\n").unwrap();
        assert_eq!(config.grammar(), Some(TokenGrammar::Brace));
    }

    #[test]
    fn non_mapping_yaml_gives_defaults() {
        let config = parse_config("- just\n- a\n- list\n").unwrap();
        assert_eq!(config.grammar(), None);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(parse_config("Grammar: [unclosed\n").is_err());
    }

    #[test]
    fn explicit_path_wins_over_target_dir() {
        let dir = std::env::temp_dir().join("tplex_test_config");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let explicit = dir.join("custom.yml");
        std::fs::write(&explicit, "Grammar: angle\n").unwrap();
        std::fs::write(dir.join(".tplex.yml"), "Grammar: bracket\n").unwrap();

        let config = load_config(Some(&explicit), Some(&dir)).unwrap();
        assert_eq!(config.grammar(), Some(TokenGrammar::Angle));

        let config = load_config(None, Some(&dir)).unwrap();
        assert_eq!(config.grammar(), Some(TokenGrammar::Bracket));
        std::fs::remove_dir_all(&dir).ok();
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::config::ResolvedConfig;

/// Discover docx files from the given paths, respecting .gitignore and
/// config Exclude patterns.
pub fn discover_files(paths: &[PathBuf], config: &ResolvedConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            // Direct file paths bypass extension filtering
            files.push(path.clone());
        } else if path.is_dir() {
            let dir_files = walk_directory(path, config)?;
            files.extend(dir_files);
        } else {
            anyhow::bail!("path does not exist: {}", path.display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn walk_directory(dir: &Path, config: &ResolvedConfig) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(dir);
    builder.hidden(true).git_ignore(true).git_global(true);

    let excludes = config.excludes();
    if !excludes.is_empty() {
        let mut overrides = OverrideBuilder::new(dir);
        for pattern in excludes {
            // ignore crate overrides: prefix with ! to exclude
            overrides
                .add(&format!("!{pattern}"))
                .with_context(|| format!("invalid exclude pattern: {pattern}"))?;
        }
        let overrides = overrides.build().context("failed to build overrides")?;
        builder.overrides(overrides);
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.context("error walking directory")?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
        {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use std::fs;

    fn setup_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tplex_test_fs_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn default_config() -> ResolvedConfig {
        load_config(Some(Path::new("/nonexistent")), None).unwrap()
    }

    #[test]
    fn discovers_docx_files_in_directory() {
        let dir = setup_dir("discover");
        fs::write(dir.join("a.docx"), "").unwrap();
        fs::write(dir.join("b.docx"), "").unwrap();
        fs::write(dir.join("c.txt"), "").unwrap();

        let files = discover_files(&[dir.clone()], &default_config()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "docx"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = setup_dir("case");
        fs::write(dir.join("UPPER.DOCX"), "").unwrap();

        let files = discover_files(&[dir.clone()], &default_config()).unwrap();
        assert_eq!(files.len(), 1);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn direct_file_bypasses_extension_filter() {
        let dir = setup_dir("direct");
        let other = dir.join("template");
        fs::write(&other, "").unwrap();

        let files = discover_files(&[other.clone()], &default_config()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0], other);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn nonexistent_path_errors() {
        let result = discover_files(&[PathBuf::from("/no/such/path")], &default_config());
        assert!(result.is_err());
    }

    #[test]
    fn results_are_sorted_and_deduped() {
        let dir = setup_dir("sorted");
        fs::write(dir.join("z.docx"), "").unwrap();
        fs::write(dir.join("a.docx"), "").unwrap();
        fs::write(dir.join("m.docx"), "").unwrap();

        let files = discover_files(&[dir.clone(), dir.clone()], &default_config()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.docx", "m.docx", "z.docx"]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn discovers_nested_docx_files() {
        let dir = setup_dir("nested");
        let sub = dir.join("public").join("template");
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.join("top.docx"), "").unwrap();
        fs::write(sub.join("N1.docx"), "").unwrap();

        let files = discover_files(&[dir.clone()], &default_config()).unwrap();

        assert_eq!(files.len(), 2);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn exclude_patterns_are_applied() {
        let dir = setup_dir("exclude");
        fs::write(dir.join("keep.docx"), "").unwrap();
        fs::write(dir.join("draft_a.docx"), "").unwrap();
        fs::write(dir.join(".tplex.yml"), "Exclude:\n  - \"draft*.docx\"\n").unwrap();

        let config = load_config(None, Some(&dir)).unwrap();
        let files = discover_files(&[dir.clone()], &config).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.docx"));
        fs::remove_dir_all(&dir).ok();
    }
}

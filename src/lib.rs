pub mod cli;
pub mod config;
pub mod docx;
pub mod formatter;
pub mod fs;
pub mod normalize;
pub mod pattern;
pub mod registry;
pub mod report;
pub mod traverse;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use cli::Args;
use config::load_config;
use formatter::create_formatter;
use fs::discover_files;
use pattern::PatternMatcher;
use report::ExtractionReport;
use traverse::traverse;

/// Default directory for generated documentation artifacts.
const DEFAULT_OUTPUT_DIR: &str = "documentation";

/// Run the extractor. Returns the exit code: 0 = success, 1 = load error
/// (mapped in main from the Err branch).
pub fn run(args: Args) -> Result<i32> {
    let target_dir = args.paths.first().map(|p| {
        if p.is_file() {
            p.parent().unwrap_or(p)
        } else {
            p.as_path()
        }
    });
    let config = load_config(args.config.as_deref(), target_dir)?;

    let grammar = args
        .token_grammar()
        .or_else(|| config.grammar())
        .unwrap_or_default();
    let matcher = PatternMatcher::new(grammar);

    if args.debug {
        eprintln!("debug: token grammar: {grammar}");
    }

    let files = discover_files(&args.paths, &config)?;

    if args.list_target_files {
        for file in &files {
            println!("{}", file.display());
        }
        return Ok(0);
    }

    if args.debug {
        eprintln!("debug: {} files to scan", files.len());
    }

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let formatter = create_formatter(&args.format);

    for path in &files {
        let document = docx::load_document(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        let registry = traverse(&document, &matcher);
        if args.debug {
            eprintln!(
                "debug: {}: {} placeholders, {} occurrences",
                path.display(),
                registry.len(),
                registry.occurrences()
            );
        }
        let report = ExtractionReport::generate(&registry, &template_name(path));
        formatter.print(&report);
        if !args.no_doc {
            let artifact = write_documentation(&report, &output_dir)?;
            if args.debug {
                eprintln!("debug: wrote {}", artifact.display());
            }
        }
    }

    Ok(0)
}

/// Template identity: the source file's base name without extension.
fn template_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "template".to_string())
}

/// Persist the markdown artifact as `<STEM_UPPERCASE>_PLACEHOLDERS.md` under
/// `output_dir`, creating the directory when needed.
pub fn write_documentation(report: &ExtractionReport, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let file_name = format!("{}_PLACEHOLDERS.md", report.template_name.to_uppercase());
    let path = output_dir.join(file_name);
    std::fs::write(&path, formatter::markdown::render(report))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_name_strips_extension() {
        assert_eq!(template_name(Path::new("public/template/N1.docx")), "N1");
        assert_eq!(template_name(Path::new("SURATKELUAR.docx")), "SURATKELUAR");
        assert_eq!(template_name(Path::new("archive.tar.docx")), "archive.tar");
    }
}

pub mod json;
pub mod markdown;
pub mod names;
pub mod text;

use std::io::Write;

use crate::report::ExtractionReport;

pub trait Formatter {
    fn format_to(&self, report: &ExtractionReport, out: &mut dyn Write);

    fn print(&self, report: &ExtractionReport) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.format_to(report, &mut lock);
    }
}

pub fn create_formatter(format: &str) -> Box<dyn Formatter> {
    match format {
        "json" => Box::new(json::JsonFormatter),
        "markdown" => Box::new(markdown::MarkdownFormatter),
        "names" => Box::new(names::NamesFormatter),
        // "text" and any unknown value
        _ => Box::new(text::TextFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Location, PlaceholderRegistry};

    fn sample_report() -> ExtractionReport {
        let mut registry = PlaceholderRegistry::new();
        registry.record("nama", Location::Paragraph { index: 1 });
        registry.record(
            "tanggal/surat",
            Location::TableCell {
                table: 1,
                row: 1,
                cell: 1,
                ancestors: vec![],
            },
        );
        ExtractionReport::generate(&registry, "N1")
    }

    fn empty_report() -> ExtractionReport {
        ExtractionReport::generate(&PlaceholderRegistry::new(), "N1")
    }

    #[test]
    fn create_all_formatters() {
        for name in ["text", "json", "markdown", "names"] {
            let _f = create_formatter(name);
        }
    }

    #[test]
    fn unknown_format_defaults_to_text() {
        let _f = create_formatter("anything_else");
    }

    #[test]
    fn all_formatters_run_without_panic() {
        for name in ["text", "json", "markdown", "names"] {
            let f = create_formatter(name);
            let mut buf = Vec::new();
            f.format_to(&empty_report(), &mut buf);
            f.format_to(&sample_report(), &mut buf);
        }
    }
}

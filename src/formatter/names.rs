use std::io::Write;

use crate::formatter::Formatter;
use crate::report::ExtractionReport;

/// Bare placeholder names, one per line, for shell pipelines.
pub struct NamesFormatter;

impl Formatter for NamesFormatter {
    fn format_to(&self, report: &ExtractionReport, out: &mut dyn Write) {
        for entry in &report.placeholders {
            let _ = writeln!(out, "{}", entry.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Location, PlaceholderRegistry};

    #[test]
    fn one_sorted_name_per_line() {
        let mut registry = PlaceholderRegistry::new();
        registry.record("nomor_surat", Location::Paragraph { index: 1 });
        registry.record("nama", Location::Paragraph { index: 2 });
        registry.record("nama", Location::Paragraph { index: 3 });
        let report = ExtractionReport::generate(&registry, "N1");

        let mut buf = Vec::new();
        NamesFormatter.format_to(&report, &mut buf);
        assert_eq!(String::from_utf8(buf).unwrap(), "nama\nnomor_surat\n");
    }

    #[test]
    fn empty_report_prints_nothing() {
        let report = ExtractionReport::generate(&PlaceholderRegistry::new(), "N1");
        let mut buf = Vec::new();
        NamesFormatter.format_to(&report, &mut buf);
        assert!(buf.is_empty());
    }
}

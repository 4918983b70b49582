use std::io::Write;

use crate::formatter::Formatter;
use crate::report::ExtractionReport;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_to(&self, report: &ExtractionReport, out: &mut dyn Write) {
        let _ = writeln!(out, "{}", "=".repeat(70));
        let _ = writeln!(out, "PLACEHOLDERS FROM {}.docx", report.template_name);
        let _ = writeln!(out, "{}", "=".repeat(70));
        let _ = writeln!(out);
        let word = if report.len() == 1 {
            "placeholder"
        } else {
            "placeholders"
        };
        let _ = writeln!(out, "{} {word} found", report.len());
        if !report.is_empty() {
            let _ = writeln!(out);
        }
        for (i, entry) in report.placeholders.iter().enumerate() {
            if entry.locations.len() > 1 {
                let _ = writeln!(
                    out,
                    "{:2}. {{{}}} (appears {} times)",
                    i + 1,
                    entry.name,
                    entry.locations.len()
                );
            } else {
                let _ = writeln!(out, "{:2}. {{{}}}", i + 1, entry.name);
            }
        }
        let invalid = report.invalid_names();
        if !invalid.is_empty() {
            let _ = writeln!(out);
            for name in invalid {
                let _ = writeln!(
                    out,
                    "warning: {{{name}}} does not normalize to a usable field name"
                );
            }
        }
    }
}

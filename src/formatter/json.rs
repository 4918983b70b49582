use std::io::Write;

use serde::Serialize;

use crate::formatter::Formatter;
use crate::registry::Location;
use crate::report::ExtractionReport;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    template: &'a str,
    placeholder_count: usize,
    occurrence_count: usize,
    placeholders: Vec<JsonPlaceholder<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    special: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    invalid: Vec<&'a str>,
}

#[derive(Serialize)]
struct JsonPlaceholder<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    camel: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pascal: Option<&'a str>,
    occurrences: usize,
    locations: &'a [Location],
}

impl Formatter for JsonFormatter {
    fn format_to(&self, report: &ExtractionReport, out: &mut dyn Write) {
        let output = JsonOutput {
            template: &report.template_name,
            placeholder_count: report.len(),
            occurrence_count: report.occurrences(),
            placeholders: report
                .placeholders
                .iter()
                .map(|entry| JsonPlaceholder {
                    name: &entry.name,
                    camel: entry.field.as_ref().map(|f| f.camel.as_str()),
                    pascal: entry.field.as_ref().map(|f| f.pascal.as_str()),
                    occurrences: entry.locations.len(),
                    locations: &entry.locations,
                })
                .collect(),
            special: report
                .special_entries()
                .iter()
                .map(|e| e.name.as_str())
                .collect(),
            invalid: report.invalid_names(),
        };
        // Safe to unwrap: our types always serialize successfully
        let _ = writeln!(out, "{}", serde_json::to_string_pretty(&output).unwrap());
    }
}

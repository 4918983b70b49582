use std::fmt::Write as _;
use std::io::Write;

use crate::formatter::Formatter;
use crate::report::{ExtractionReport, PlaceholderEntry};

/// How many placeholders the usage example embeds before truncating.
const USAGE_SAMPLE: usize = 5;

pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format_to(&self, report: &ExtractionReport, out: &mut dyn Write) {
        let _ = out.write_all(render(report).as_bytes());
    }
}

/// Render the full documentation artifact body.
///
/// Section order is fixed so downstream tooling can parse the artifact:
/// title, table of contents, placeholder list, location index, generated
/// interface, mapping skeleton, usage example, notes and warnings.
pub fn render(report: &ExtractionReport) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# {}.docx - Template Placeholders", report.template_name);
    let _ = writeln!(md);
    let _ = writeln!(md, "**Total Placeholders**: {}", report.len());
    let _ = writeln!(md);

    let _ = writeln!(md, "## Table of Contents");
    let _ = writeln!(md);
    let _ = writeln!(md, "1. [Placeholder List](#placeholder-list)");
    let _ = writeln!(md, "2. [Placeholder Locations](#placeholder-locations)");
    let _ = writeln!(md, "3. [TypeScript Interface](#typescript-interface)");
    let _ = writeln!(md, "4. [Template Data Mapping](#template-data-mapping)");
    let _ = writeln!(md, "5. [Usage Example](#usage-example)");
    let _ = writeln!(md, "6. [Notes](#notes)");
    let _ = writeln!(md);

    render_placeholder_list(report, &mut md);
    render_locations(report, &mut md);
    render_interface(report, &mut md);
    render_mapping(report, &mut md);
    render_usage_example(report, &mut md);
    render_notes(report, &mut md);

    md
}

fn render_placeholder_list(report: &ExtractionReport, md: &mut String) {
    let _ = writeln!(md, "## Placeholder List");
    let _ = writeln!(md);
    let _ = writeln!(md, "Total: **{}** placeholders", report.len());
    let _ = writeln!(md);
    for (i, entry) in report.placeholders.iter().enumerate() {
        let _ = writeln!(md, "{}. `{{{}}}`", i + 1, entry.name);
    }
    let _ = writeln!(md);
}

fn render_locations(report: &ExtractionReport, md: &mut String) {
    let _ = writeln!(md, "## Placeholder Locations");
    let _ = writeln!(md);
    let _ = writeln!(md, "Shows where each placeholder appears in the document:");
    let _ = writeln!(md);
    for entry in &report.placeholders {
        let _ = writeln!(md, "### `{{{}}}`", entry.name);
        let _ = writeln!(md);
        if entry.locations.len() > 1 {
            let _ = writeln!(md, "**Appears {} times:**", entry.locations.len());
            let _ = writeln!(md);
        }
        for location in &entry.locations {
            let _ = writeln!(md, "- {location}");
        }
        let _ = writeln!(md);
    }
}

fn render_interface(report: &ExtractionReport, md: &mut String) {
    let _ = writeln!(md, "## TypeScript Interface");
    let _ = writeln!(md);
    let _ = writeln!(md, "```typescript");
    let _ = writeln!(md, "interface {} {{", report.interface_name());
    for entry in report.valid_entries() {
        if let Some(field) = &entry.field {
            let _ = writeln!(md, "  {}: string;", field.camel);
        }
    }
    let _ = writeln!(md, "}}");
    let _ = writeln!(md, "```");
    let _ = writeln!(md);
}

fn render_mapping(report: &ExtractionReport, md: &mut String) {
    let _ = writeln!(md, "## Template Data Mapping");
    let _ = writeln!(md);
    let _ = writeln!(md, "```typescript");
    let _ = writeln!(md, "const templateData = {{");
    for entry in report.valid_entries() {
        if let Some(line) = mapping_line(entry) {
            let _ = writeln!(md, "{line}");
        }
    }
    let _ = writeln!(md, "}};");
    let _ = writeln!(md, "```");
    let _ = writeln!(md);
}

/// One mapping entry: raw name as key (quoted when it carries separator
/// characters), the normalized camelCase field as the data source, an empty
/// string as the fallback.
fn mapping_line(entry: &PlaceholderEntry) -> Option<String> {
    let field = entry.field.as_ref()?;
    Some(if entry.needs_quoting() {
        format!("  '{}': formData.{} || '',", entry.name, field.camel)
    } else {
        format!("  {}: formData.{} || '',", entry.name, field.camel)
    })
}

fn render_usage_example(report: &ExtractionReport, md: &mut String) {
    let _ = writeln!(md, "## Usage Example");
    let _ = writeln!(md);
    let _ = writeln!(md, "```typescript");
    let _ = writeln!(md, "import Docxtemplater from 'docxtemplater';");
    let _ = writeln!(md, "import PizZip from 'pizzip';");
    let _ = writeln!(md, "import {{ readFileSync }} from 'fs';");
    let _ = writeln!(md, "import {{ join }} from 'path';");
    let _ = writeln!(md);
    let _ = writeln!(md, "// Load template");
    let _ = writeln!(
        md,
        "const templatePath = join(process.cwd(), 'public', 'template', '{}.docx');",
        report.template_name
    );
    let _ = writeln!(md, "const content = readFileSync(templatePath, 'binary');");
    let _ = writeln!(md);
    let _ = writeln!(md, "const zip = new PizZip(content);");
    let _ = writeln!(md, "const doc = new Docxtemplater(zip, {{");
    let _ = writeln!(md, "  paragraphLoop: true,");
    let _ = writeln!(md, "  linebreaks: true,");
    let _ = writeln!(md, "  nullGetter: function() {{");
    let _ = writeln!(md, "    return '';");
    let _ = writeln!(md, "  }},");
    let _ = writeln!(md, "}});");
    let _ = writeln!(md);
    let _ = writeln!(md, "// Prepare template data");
    let _ = writeln!(md, "const templateData = {{");
    let valid: Vec<&PlaceholderEntry> = report.valid_entries().collect();
    for entry in valid.iter().take(USAGE_SAMPLE) {
        if let Some(line) = mapping_line(entry) {
            let _ = writeln!(md, "{line}");
        }
    }
    if valid.len() > USAGE_SAMPLE {
        let _ = writeln!(
            md,
            "  // ... (see Template Data Mapping section for complete list)"
        );
    }
    let _ = writeln!(md, "}};");
    let _ = writeln!(md);
    let _ = writeln!(md, "// Render document");
    let _ = writeln!(md, "doc.render(templateData);");
    let _ = writeln!(md);
    let _ = writeln!(md, "// Generate DOCX buffer");
    let _ = writeln!(md, "const buffer = doc.getZip().generate({{");
    let _ = writeln!(md, "  type: 'nodebuffer',");
    let _ = writeln!(md, "  compression: 'DEFLATE',");
    let _ = writeln!(md, "}});");
    let _ = writeln!(md, "```");
    let _ = writeln!(md);
}

fn render_notes(report: &ExtractionReport, md: &mut String) {
    let _ = writeln!(md, "## Notes");
    let _ = writeln!(md);
    let _ = writeln!(md, "- All placeholders use the format `{{placeholder_name}}`");
    let _ = writeln!(md, "- Empty strings (`''`) are used as default values");
    let _ = writeln!(
        md,
        "- Special characters in placeholder names require quotes in object keys"
    );
    let _ = writeln!(
        md,
        "- Template file: `public/template/{}.docx`",
        report.template_name
    );
    let _ = writeln!(md);

    let special = report.special_entries();
    if !special.is_empty() {
        let _ = writeln!(md, "### Special Characters");
        let _ = writeln!(md);
        let _ = writeln!(
            md,
            "The following placeholders contain special characters and require quotes:"
        );
        let _ = writeln!(md);
        for entry in special {
            if let Some(field) = &entry.field {
                let _ = writeln!(
                    md,
                    "- `{{{}}}` → `'{}': formData.{}`",
                    entry.name, entry.name, field.camel
                );
            }
        }
        let _ = writeln!(md);
    }

    let invalid = report.invalid_names();
    if !invalid.is_empty() {
        let _ = writeln!(md, "### Invalid Identifiers");
        let _ = writeln!(md);
        let _ = writeln!(
            md,
            "The following placeholders do not normalize to a usable field name and are left out of the generated code:"
        );
        let _ = writeln!(md);
        for name in invalid {
            let _ = writeln!(md, "- `{{{name}}}`");
        }
        let _ = writeln!(md);
    }
}

use crate::normalize::{FieldName, to_field_name};
use crate::registry::{Location, PlaceholderRegistry};

/// One placeholder in the final report.
#[derive(Debug, Clone)]
pub struct PlaceholderEntry {
    pub name: String,
    pub locations: Vec<Location>,
    /// `None` when the raw name has no usable identifier characters; such
    /// names are reported raw and left out of the generated fields.
    pub field: Option<FieldName>,
}

impl PlaceholderEntry {
    /// Names carrying path separators need quoting as object keys.
    pub fn needs_quoting(&self) -> bool {
        self.name.contains(['/', '-', '.'])
    }
}

/// The derived data contract for one template.
///
/// Recomputed in full from the registry on every generation; it has no
/// lifecycle of its own. Entries are sorted by raw name.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Template identity: the source file's base name without extension.
    pub template_name: String,
    pub placeholders: Vec<PlaceholderEntry>,
}

impl ExtractionReport {
    pub fn generate(registry: &PlaceholderRegistry, template_name: &str) -> Self {
        let placeholders = registry
            .sorted_names()
            .into_iter()
            .map(|name| PlaceholderEntry {
                name: name.to_string(),
                locations: registry.locations(name).unwrap_or_default().to_vec(),
                field: to_field_name(name).ok(),
            })
            .collect();
        Self {
            template_name: template_name.to_string(),
            placeholders,
        }
    }

    /// Number of distinct placeholders.
    pub fn len(&self) -> usize {
        self.placeholders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placeholders.is_empty()
    }

    /// Total occurrence count across all placeholders.
    pub fn occurrences(&self) -> usize {
        self.placeholders.iter().map(|e| e.locations.len()).sum()
    }

    /// Entries that survived normalization, in sorted order.
    pub fn valid_entries(&self) -> impl Iterator<Item = &PlaceholderEntry> {
        self.placeholders.iter().filter(|e| e.field.is_some())
    }

    /// Raw names that failed normalization.
    pub fn invalid_names(&self) -> Vec<&str> {
        self.placeholders
            .iter()
            .filter(|e| e.field.is_none())
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Entries whose raw name carries separator characters.
    pub fn special_entries(&self) -> Vec<&PlaceholderEntry> {
        self.placeholders
            .iter()
            .filter(|e| e.needs_quoting())
            .collect()
    }

    /// Type name for the generated interface, derived from the template
    /// identity.
    pub fn interface_name(&self) -> String {
        match to_field_name(&self.template_name) {
            Ok(field) => format!("{}FormData", field.pascal),
            Err(_) => "TemplateFormData".to_string(),
        }
    }
}

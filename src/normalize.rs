use thiserror::Error;

/// camelCase / PascalCase identifiers derived from a raw placeholder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    pub camel: String,
    pub pascal: String,
}

/// The raw name contains no usable identifier characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("placeholder {0:?} does not normalize to a usable field name")]
pub struct InvalidIdentifier(pub String);

/// Derive safe field names from a raw placeholder name.
///
/// Separator characters (`/`, `-`, `.`) collapse to underscores before the
/// name is split into parts. Each part's tail is lowercased so acronyms stay
/// printable: `NIP` becomes `nip` leading and `Nip` trailing.
pub fn to_field_name(raw: &str) -> Result<FieldName, InvalidIdentifier> {
    let replaced: String = raw
        .chars()
        .map(|c| if matches!(c, '/' | '-' | '.') { '_' } else { c })
        .collect();
    let parts: Vec<&str> = replaced.split('_').filter(|p| !p.is_empty()).collect();
    if parts.is_empty() || !parts.iter().any(|p| p.chars().any(char::is_alphanumeric)) {
        return Err(InvalidIdentifier(raw.to_string()));
    }

    let mut camel = parts[0].to_lowercase();
    for part in &parts[1..] {
        camel.push_str(&capitalize(part));
    }
    let pascal: String = parts.iter().map(|p| capitalize(p)).collect();

    Ok(FieldName { camel, pascal })
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(raw: &str) -> FieldName {
        to_field_name(raw).unwrap()
    }

    #[test]
    fn underscore_separated() {
        let f = field("nomor_surat");
        assert_eq!(f.camel, "nomorSurat");
        assert_eq!(f.pascal, "NomorSurat");
    }

    #[test]
    fn slash_separated() {
        assert_eq!(field("tanggal/surat").camel, "tanggalSurat");
    }

    #[test]
    fn hyphen_and_dot() {
        assert_eq!(field("rt-rw").camel, "rtRw");
        assert_eq!(field("v1.0").camel, "v10");
        assert_eq!(field("v1.0").pascal, "V10");
    }

    #[test]
    fn single_part_is_lowercased() {
        let f = field("NIP");
        assert_eq!(f.camel, "nip");
        assert_eq!(f.pascal, "Nip");
    }

    #[test]
    fn acronym_tail_is_lowercased() {
        assert_eq!(field("NIP_pejabat").camel, "nipPejabat");
        assert_eq!(field("pejabat_NIP").camel, "pejabatNip");
    }

    #[test]
    fn plain_name_unchanged() {
        let f = field("nama");
        assert_eq!(f.camel, "nama");
        assert_eq!(f.pascal, "Nama");
    }

    #[test]
    fn consecutive_separators_collapse() {
        assert_eq!(field("a__b").camel, "aB");
        assert_eq!(field("a/-b").camel, "aB");
    }

    #[test]
    fn leading_and_trailing_separators() {
        assert_eq!(field("_nama_").camel, "nama");
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(to_field_name(""), Err(InvalidIdentifier(String::new())));
    }

    #[test]
    fn separator_only_input_is_invalid() {
        assert!(to_field_name("---").is_err());
        assert!(to_field_name("___").is_err());
        assert!(to_field_name("/./").is_err());
    }

    #[test]
    fn error_keeps_raw_name() {
        let err = to_field_name("-.-").unwrap_err();
        assert_eq!(err.0, "-.-");
        assert!(err.to_string().contains("-.-"));
    }

    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn grammar_names_with_alphanumerics_normalize(raw in "[A-Za-z0-9_/.-]*[A-Za-z0-9][A-Za-z0-9_/.-]*") {
                let f = to_field_name(&raw).unwrap();
                prop_assert!(!f.camel.is_empty());
                prop_assert!(!f.pascal.is_empty());
            }

            #[test]
            fn output_has_no_separators(raw in "[A-Za-z0-9_/.-]{1,30}") {
                if let Ok(f) = to_field_name(&raw) {
                    for c in ['_', '/', '-', '.'] {
                        prop_assert!(!f.camel.contains(c));
                        prop_assert!(!f.pascal.contains(c));
                    }
                }
            }

            #[test]
            fn camel_and_pascal_agree_modulo_case(raw in "[A-Za-z0-9_/.-]{1,30}") {
                if let Ok(f) = to_field_name(&raw) {
                    prop_assert_eq!(f.camel.to_lowercase(), f.pascal.to_lowercase());
                }
            }

            #[test]
            fn normalization_is_idempotent_on_camel(raw in "[A-Za-z0-9_/.-]{1,30}") {
                if let Ok(f) = to_field_name(&raw) {
                    let again = to_field_name(&f.camel).unwrap();
                    prop_assert_eq!(again.camel, f.camel.to_lowercase());
                }
            }
        }
    }
}

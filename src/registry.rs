use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// One step of the containment chain for a nested table: the 1-based
/// coordinates of the cell the table is embedded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellRef {
    pub table: usize,
    pub row: usize,
    pub cell: usize,
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table {}, Row {}, Cell {}", self.table, self.row, self.cell)
    }
}

/// Where one placeholder occurrence was found.
///
/// Indices are 1-based and local to their enclosing scope. A table nested
/// inside a cell numbers its own tables, rows and cells from 1, so
/// `ancestors` (ordered outermost first) carries the containment chain that
/// makes the position unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    Paragraph {
        index: usize,
    },
    TableCell {
        table: usize,
        row: usize,
        cell: usize,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        ancestors: Vec<CellRef>,
    },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Paragraph { index } => write!(f, "Paragraph {index}"),
            Location::TableCell {
                table,
                row,
                cell,
                ancestors,
            } => {
                for ancestor in ancestors {
                    write!(f, "{ancestor} > ")?;
                }
                write!(f, "Table {table}, Row {row}, Cell {cell}")
            }
        }
    }
}

/// Accumulates placeholder occurrences during one traversal.
///
/// Keys are raw placeholder names, compared as opaque case-sensitive
/// strings. Per-name location lists keep traversal order; every recorded
/// name has at least one location.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlaceholderRegistry {
    entries: HashMap<String, Vec<Location>>,
    /// Names in first-seen order, for deterministic iteration.
    order: Vec<String>,
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence, creating the entry on first sight.
    pub fn record(&mut self, name: &str, location: Location) {
        match self.entries.get_mut(name) {
            Some(locations) => locations.push(location),
            None => {
                self.order.push(name.to_string());
                self.entries.insert(name.to_string(), vec![location]);
            }
        }
    }

    /// Number of distinct placeholder names.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total occurrence count across all names.
    pub fn occurrences(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn locations(&self, name: &str) -> Option<&[Location]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Names sorted lexicographically (report order).
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.order.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate entries in first-seen (traversal) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Location])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.entries[name].as_slice()))
    }
}

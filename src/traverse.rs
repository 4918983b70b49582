use crate::docx::dom::{Document, Table};
use crate::pattern::PatternMatcher;
use crate::registry::{CellRef, Location, PlaceholderRegistry};

/// Walk the whole document and collect every placeholder occurrence.
///
/// Visit order: top-level paragraphs in document order, then top-level
/// tables; within a table, rows then cells (row-major); within a cell, the
/// cell's own paragraphs, then any tables nested directly inside it,
/// recursively. Two walks over the same document produce identical
/// registries, including location order.
pub fn traverse(document: &Document, matcher: &PatternMatcher) -> PlaceholderRegistry {
    let mut registry = PlaceholderRegistry::new();
    for (index, paragraph) in document.paragraphs.iter().enumerate() {
        let location = Location::Paragraph { index: index + 1 };
        scan_text(&paragraph.text, &location, matcher, &mut registry);
    }
    for (index, table) in document.tables.iter().enumerate() {
        walk_table(table, index + 1, &[], matcher, &mut registry);
    }
    registry
}

fn scan_text(
    text: &str,
    location: &Location,
    matcher: &PatternMatcher,
    registry: &mut PlaceholderRegistry,
) {
    for name in matcher.capture_names(text) {
        registry.record(name, location.clone());
    }
}

/// Depth-first table walk. Nested tables restart their own 1-based
/// numbering; `ancestors` (outermost first) carries the containment chain.
fn walk_table(
    table: &Table,
    table_index: usize,
    ancestors: &[CellRef],
    matcher: &PatternMatcher,
    registry: &mut PlaceholderRegistry,
) {
    for (row_index, row) in table.rows.iter().enumerate() {
        for (cell_index, cell) in row.cells.iter().enumerate() {
            let location = Location::TableCell {
                table: table_index,
                row: row_index + 1,
                cell: cell_index + 1,
                ancestors: ancestors.to_vec(),
            };
            for paragraph in &cell.paragraphs {
                scan_text(&paragraph.text, &location, matcher, registry);
            }
            if !cell.tables.is_empty() {
                let mut chain = ancestors.to_vec();
                chain.push(CellRef {
                    table: table_index,
                    row: row_index + 1,
                    cell: cell_index + 1,
                });
                for (nested_index, nested) in cell.tables.iter().enumerate() {
                    walk_table(nested, nested_index + 1, &chain, matcher, registry);
                }
            }
        }
    }
}

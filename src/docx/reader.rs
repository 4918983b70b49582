use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::docx::dom::{Cell, Document, Paragraph, Row, Table};

/// The archive member holding the document body.
const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not a docx container: {source}")]
    Container { path: PathBuf, source: ZipError },
    #[error("{path} has no word/document.xml part")]
    MissingPart { path: PathBuf },
    #[error("failed to read word/document.xml: {0}")]
    Part(std::io::Error),
    #[error("malformed document xml: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("word/document.xml ends unexpectedly")]
    UnexpectedEof,
}

/// Open a docx container and parse its main document part into the DOM.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|source| LoadError::Container {
        path: path.to_path_buf(),
        source,
    })?;
    let mut xml = String::new();
    {
        let mut part = match archive.by_name(DOCUMENT_PART) {
            Ok(part) => part,
            Err(ZipError::FileNotFound) => {
                return Err(LoadError::MissingPart {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(LoadError::Container {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        part.read_to_string(&mut xml).map_err(LoadError::Part)?;
    }
    parse_document_xml(&xml)
}

/// Parse WordprocessingML into the DOM.
///
/// Only the block structure the extractor needs is kept: paragraphs (their
/// concatenated `w:t` runs), tables, rows, cells. Properties and run
/// formatting are skipped.
pub fn parse_document_xml(xml: &str) -> Result<Document, LoadError> {
    let mut reader = Reader::from_str(xml);
    let mut document = Document::default();
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:body" => {
                let (paragraphs, tables) = parse_blocks(&mut reader, b"w:body")?;
                document.paragraphs = paragraphs;
                document.tables = tables;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(document)
}

/// Parse a run of block-level children (paragraphs and tables) up to the
/// given closing tag. Used for both `w:body` and `w:tc` content.
fn parse_blocks(
    reader: &mut Reader<&[u8]>,
    end_tag: &[u8],
) -> Result<(Vec<Paragraph>, Vec<Table>), LoadError> {
    let mut paragraphs = Vec::new();
    let mut tables = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(parse_paragraph(reader)?);
            }
            Event::Empty(e) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(Paragraph::default());
            }
            Event::Start(e) if e.name().as_ref() == b"w:tbl" => {
                tables.push(parse_table(reader)?);
            }
            Event::End(e) if e.name().as_ref() == end_tag => break,
            Event::Eof => return Err(LoadError::UnexpectedEof),
            _ => {}
        }
    }
    Ok((paragraphs, tables))
}

/// Concatenate every `w:t` run under the paragraph, so a token Word split
/// across runs still reads as one string.
///
/// Paragraphs can nest through text-box content; the depth counter makes
/// sure only the matching `w:p` end tag terminates this one.
fn parse_paragraph(reader: &mut Reader<&[u8]>) -> Result<Paragraph, LoadError> {
    let mut text = String::new();
    let mut in_text = false;
    let mut depth = 0usize;
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:p" => depth += 1,
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"w:t" => in_text = false,
            Event::Text(e) if in_text => text.push_str(&e.unescape()?),
            Event::End(e) if e.name().as_ref() == b"w:p" => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Eof => return Err(LoadError::UnexpectedEof),
            _ => {}
        }
    }
    Ok(Paragraph { text })
}

fn parse_table(reader: &mut Reader<&[u8]>) -> Result<Table, LoadError> {
    let mut rows = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:tr" => rows.push(parse_row(reader)?),
            Event::End(e) if e.name().as_ref() == b"w:tbl" => break,
            Event::Eof => return Err(LoadError::UnexpectedEof),
            _ => {}
        }
    }
    Ok(Table { rows })
}

fn parse_row(reader: &mut Reader<&[u8]>) -> Result<Row, LoadError> {
    let mut cells = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:tc" => {
                let (paragraphs, tables) = parse_blocks(reader, b"w:tc")?;
                cells.push(Cell { paragraphs, tables });
            }
            Event::Empty(e) if e.name().as_ref() == b"w:tc" => cells.push(Cell::default()),
            Event::End(e) if e.name().as_ref() == b"w:tr" => break,
            Event::Eof => return Err(LoadError::UnexpectedEof),
            _ => {}
        }
    }
    Ok(Row { cells })
}

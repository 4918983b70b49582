pub mod dom;
pub mod reader;

pub use dom::{Cell, Document, Paragraph, Row, Table};
pub use reader::{LoadError, load_document};

pub mod document;
pub mod line;
pub mod normalize;
pub mod reader;

pub use document::parse_document;
pub use line::{TAB, parse_delimited_line};
pub use normalize::{HeaderField, normalize_row, normalize_rows};
pub use reader::{import_file, import_records};

pub mod error;
pub mod record;

pub use error::{IngestError, Result};
pub use record::{InventoryRecord, RawRow};

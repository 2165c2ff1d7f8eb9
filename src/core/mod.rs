pub mod error;
pub mod record;
pub mod value;

pub use error::{RankError, Result};
pub use record::Record;
pub use value::Value;

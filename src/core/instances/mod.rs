mod query;
mod record;

pub use query::Query;
pub use record::{Record, RecordError};

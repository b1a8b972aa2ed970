mod overrides;
mod settings;

pub use overrides::{KeyValue, apply_overrides, parse_key_value};
pub use settings::{DEFAULT_ALPHA, DEFAULT_DATA_PATH, Settings};

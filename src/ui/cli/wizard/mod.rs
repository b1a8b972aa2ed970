mod wizard;

pub use wizard::{OTHER_VALUE, banner, prompt_query, run_session};

use anyhow::Result;

/// Source of interactive answers. The wizard only talks to this trait so it
/// can be driven by a script in tests.
pub trait PromptDriver {
    fn ask_select(&self, title: &str, help: &str, options: &[String]) -> Result<String>;
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
}

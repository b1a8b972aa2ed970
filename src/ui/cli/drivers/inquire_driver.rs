use anyhow::Result;
use inquire::{Confirm, Select, Text};

use crate::ui::cli::drivers::PromptDriver;

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_select(&self, title: &str, help: &str, options: &[String]) -> Result<String> {
        let mut select = Select::new(title, options.to_vec());
        if !help.is_empty() {
            select = select.with_help_message(help);
        }
        Ok(select.prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        let mut text = Text::new(title);
        if !help.is_empty() {
            text = text.with_help_message(help);
        }
        if !default.is_empty() {
            text = text.with_default(default);
        }
        Ok(text.prompt()?)
    }

    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        let mut confirm = Confirm::new(title).with_default(default);
        if !help.is_empty() {
            confirm = confirm.with_help_message(help);
        }
        Ok(confirm.prompt()?)
    }
}

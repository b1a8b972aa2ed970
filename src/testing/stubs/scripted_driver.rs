use anyhow::{Result, anyhow, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::ui::cli::drivers::PromptDriver;

/// Replays canned answers in order and records every prompt title.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, title: &str) -> Result<String> {
        self.asked.borrow_mut().push(title.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of answers at '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_select(&self, title: &str, _help: &str, options: &[String]) -> Result<String> {
        let answer = self.next(title)?;
        if !options.contains(&answer) {
            bail!("'{answer}' is not an option for '{title}': {options:?}");
        }
        Ok(answer)
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        let answer = self.next(title)?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title)?.trim().to_lowercase().as_str() {
            "" => Ok(default),
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            other => bail!("'{other}' is not a yes/no answer"),
        }
    }
}

use anyhow::Result;
use std::collections::VecDeque;

use gameshelf_core::Console;

/// Console fed from a fixed list of answers, recording everything printed
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, _message: &str) -> Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn println(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

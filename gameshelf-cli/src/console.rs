use anyhow::Result;
use colored::Colorize;
use inquire::{Confirm, InquireError, Text};
use std::io::{self, BufRead, IsTerminal, Write};

use gameshelf_core::Console;

/// Console backed by the real terminal.
///
/// Uses inquire prompts on a TTY and falls back to plain line reads when
/// stdin is piped, so the menu can also be scripted.
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    fn read_line(&self, message: &str) -> Result<Option<String>> {
        print!("{}", message);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        if !self.interactive {
            return self.read_line(message);
        }

        match Text::new(message.trim_end()).prompt() {
            Ok(answer) => Ok(Some(answer)),
            // Esc / Ctrl-C back out of the current prompt
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn println(&mut self, text: &str) {
        println!("{}", text);
    }

    fn heading(&mut self, text: &str) {
        println!("{}", text.blue().bold());
    }

    fn success(&mut self, text: &str) {
        println!("{}", text.green());
    }

    fn warning(&mut self, text: &str) {
        println!("{}", text.yellow());
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        if !self.interactive {
            let answer = self.read_line(&format!("{} [y/N]: ", message))?;
            return Ok(answer.is_some_and(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes")));
        }

        match Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

use crate::ports::outbound::{ConfirmationPrompt, UploadDecision};
use crate::shared::Result;
use std::io::{self, BufRead, Write};

/// StdinConfirmationPrompt adapter asking on stderr and reading stdin
///
/// Accepted answers: `y`/`yes`, `a`/`always` (proceed and don't ask
/// again), anything else cancels. End of input cancels.
pub struct StdinConfirmationPrompt;

impl StdinConfirmationPrompt {
    pub fn new() -> Self {
        Self
    }

    fn parse_answer(answer: &str) -> UploadDecision {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => UploadDecision::Proceed,
            "a" | "always" => UploadDecision::ProceedAndDontAskAgain,
            _ => UploadDecision::Cancel,
        }
    }

    fn ask(message: &str, input: &mut impl BufRead) -> Result<UploadDecision> {
        eprintln!("⚠️  {}", message);
        eprint!("Continue? [y]es / [n]o / [a]lways: ");
        io::stderr().flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(UploadDecision::Cancel);
        }
        Ok(Self::parse_answer(&answer))
    }
}

impl Default for StdinConfirmationPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationPrompt for StdinConfirmationPrompt {
    fn confirm_upload(&self, message: &str) -> Result<UploadDecision> {
        Self::ask(message, &mut io::stdin().lock())
    }
}

//! Interactive confirmation

use inquire::InquireError;
use tracing::warn;

use crate::error::Result;

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Terminal prompt; defaults to "no"
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&self, question: &str) -> Result<bool> {
        match inquire::Confirm::new(question)
            .with_default(false)
            .with_help_message("Press 'y' to confirm, Enter to keep the current state")
            .prompt()
        {
            Ok(answer) => Ok(answer),
            Err(InquireError::NotTTY) => {
                warn!("{question} Not a terminal, answering no (use --force to skip this prompt)");
                Ok(false)
            }
            Err(InquireError::OperationCanceled) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

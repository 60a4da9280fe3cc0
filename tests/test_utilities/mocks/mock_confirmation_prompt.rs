use observes::prelude::*;
use std::sync::{Arc, Mutex};

/// ConfirmationPrompt answering with a fixed decision and recording prompts
#[derive(Clone)]
pub struct MockConfirmationPrompt {
    decision: UploadDecision,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockConfirmationPrompt {
    pub fn new(decision: UploadDecision) -> Self {
        Self {
            decision,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl ConfirmationPrompt for MockConfirmationPrompt {
    fn confirm_upload(&self, message: &str) -> Result<UploadDecision> {
        self.prompts.lock().unwrap().push(message.to_string());
        Ok(self.decision)
    }
}

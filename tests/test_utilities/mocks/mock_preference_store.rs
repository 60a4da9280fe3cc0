use observes::prelude::*;
use std::sync::{Arc, Mutex};

/// In-memory PreferenceStore; clones share the flag
#[derive(Default, Clone)]
pub struct MockPreferenceStore {
    dont_ask_again: Arc<Mutex<bool>>,
}

impl MockPreferenceStore {
    pub fn new(dont_ask_again: bool) -> Self {
        Self {
            dont_ask_again: Arc::new(Mutex::new(dont_ask_again)),
        }
    }

    pub fn get(&self) -> bool {
        *self.dont_ask_again.lock().unwrap()
    }
}

impl PreferenceStore for MockPreferenceStore {
    fn dont_ask_again_upload_warning(&self) -> Result<bool> {
        Ok(self.get())
    }

    fn set_dont_ask_again_upload_warning(&self, value: bool) -> Result<()> {
        *self.dont_ask_again.lock().unwrap() = value;
        Ok(())
    }
}

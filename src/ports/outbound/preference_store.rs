use crate::shared::Result;

/// PreferenceStore port for small user preferences persisted locally
pub trait PreferenceStore {
    /// Whether the user chose not to be warned again before an upload
    ///
    /// `false` when the preference was never saved.
    fn dont_ask_again_upload_warning(&self) -> Result<bool>;

    fn set_dont_ask_again_upload_warning(&self, value: bool) -> Result<()>;
}

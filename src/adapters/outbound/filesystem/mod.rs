/// Filesystem adapters for file I/O and local persistence
mod file_reader;
mod file_writer;
mod preference_file;
mod scan_store;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use preference_file::{JsonPreferenceFile, PREFERENCES_FILE_NAME};
pub use scan_store::{JsonScanStore, SCANS_DIR_NAME};

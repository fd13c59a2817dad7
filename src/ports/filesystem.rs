//! Filesystem port for reading artifact sources.

use std::path::Path;

/// Provides read access to files on disk.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

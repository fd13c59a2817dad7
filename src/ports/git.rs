//! Git repository port for version-control queries.

/// Provides read access to the metadata of a git checkout.
///
/// Both methods return the raw standard output of the underlying command so
/// the caller decides which lines matter.
pub trait GitRepo: Send + Sync {
    /// Returns the output of the "current revision" query (`git rev-parse HEAD`).
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or exits non-zero.
    fn rev_parse_head(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the output of the "list remotes" query (`git remote -v`).
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or exits non-zero.
    fn list_remotes(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_existing_file_and_rejects_directories() {
        let dir = std::env::temp_dir().join("artifact_upload_live_fs_test");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("clover");
        std::fs::write(&file, "<coverage/>").unwrap();

        let fs = LiveFileSystem;
        assert!(fs.is_file(&file));
        assert!(!fs.is_file(&dir));
        assert!(!fs.is_file(&dir.join("missing")));
        assert_eq!(fs.read_to_string(&file).unwrap(), "<coverage/>");

        let _ = std::fs::remove_dir_all(&dir);
    }
}

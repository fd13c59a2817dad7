//! Ordered collection of build artifacts read from disk.

use std::path::Path;

use crate::ports::FileSystem;

/// Artifact type of the clover coverage report.
pub const COVERAGE_TYPE: &str = "php-code-coverage";

/// One named piece of build output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Type key, unique within a collection and sent as the wire `type`.
    pub artifact_type: String,
    /// Text content, already filtered.
    pub content: String,
}

/// Insertion-ordered map from artifact type to content.
#[derive(Debug, Default, Clone)]
pub struct ArtifactCollection {
    artifacts: Vec<Artifact>,
}

impl ArtifactCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `path` and stores its content under `artifact_type`.
    ///
    /// A missing (or unreadable) file is not an error: a warning is logged
    /// and the collection is left unchanged. Re-adding a type replaces its
    /// content without moving it.
    pub fn add(
        &mut self,
        fs: &dyn FileSystem,
        artifact_type: &str,
        path: &Path,
        filter: Option<&dyn Fn(&str) -> String>,
    ) {
        if !fs.is_file(path) {
            log::warn!(
                "Could not add artifact of type \"{artifact_type}\" because the file \"{}\" does not exist.",
                path.display()
            );
            return;
        }

        let raw = match fs.read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    "Could not add artifact of type \"{artifact_type}\" from \"{}\": {e}",
                    path.display()
                );
                return;
            }
        };

        let content = match filter {
            Some(filter) => filter(&raw),
            None => raw,
        };
        log::debug!("collected {artifact_type} ({} bytes) from {}", content.len(), path.display());

        if let Some(existing) = self.artifacts.iter_mut().find(|a| a.artifact_type == artifact_type) {
            existing.content = content;
        } else {
            self.artifacts.push(Artifact { artifact_type: artifact_type.to_string(), content });
        }
    }

    /// Content stored for `artifact_type`, if any.
    #[must_use]
    pub fn get(&self, artifact_type: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|a| a.artifact_type == artifact_type)
            .map(|a| a.content.as_str())
    }

    /// `(type, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.artifacts.iter().map(|a| (a.artifact_type.as_str(), a.content.as_str()))
    }

    /// Number of collected artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArtifactCollection {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

/// Builds the coverage filter removing the local project root from
/// `<file name="...">` references.
#[must_use]
pub fn strip_root_filter(root: &Path) -> impl Fn(&str) -> String {
    let root = root.display().to_string();
    let root = root.trim_end_matches('/');
    let needle = format!("<file name=\"{root}");
    move |content: &str| content.replace(&needle, "<file name=\"")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    #[derive(Default)]
    struct MemoryFs {
        files: HashMap<PathBuf, Result<String, String>>,
    }

    impl MemoryFs {
        fn with(mut self, path: &str, content: &str) -> Self {
            self.files.insert(PathBuf::from(path), Ok(content.to_string()));
            self
        }

        fn with_unreadable(mut self, path: &str) -> Self {
            self.files.insert(PathBuf::from(path), Err("stream did not contain valid UTF-8".into()));
            self
        }
    }

    impl FileSystem for MemoryFs {
        fn is_file(&self, path: &Path) -> bool {
            self.files.contains_key(path)
        }

        fn read_to_string(
            &self,
            path: &Path,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            match self.files.get(path) {
                Some(Ok(content)) => Ok(content.clone()),
                Some(Err(e)) => Err(e.clone().into()),
                None => Err(format!("{} not found", path.display()).into()),
            }
        }
    }

    #[test]
    fn missing_file_leaves_collection_unchanged() {
        let fs = MemoryFs::default().with("/ci/clover", "<coverage/>");
        let mut artifacts = ArtifactCollection::new();
        artifacts.add(&fs, COVERAGE_TYPE, Path::new("/ci/clover"), None);

        artifacts.add(&fs, "junit", Path::new("/ci/missing.xml"), None);

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts.get("junit"), None);
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let fs = MemoryFs::default().with_unreadable("/ci/clover");
        let mut artifacts = ArtifactCollection::new();
        artifacts.add(&fs, COVERAGE_TYPE, Path::new("/ci/clover"), None);
        assert!(artifacts.is_empty());
    }

    #[test]
    fn stores_raw_content_without_filter() {
        let raw = "<?xml version=\"1.0\"?>\n<coverage>\r\n  <file name=\"/ci/a.php\"/>\n</coverage>\n";
        let fs = MemoryFs::default().with("/ci/clover", raw);
        let mut artifacts = ArtifactCollection::new();
        artifacts.add(&fs, COVERAGE_TYPE, Path::new("/ci/clover"), None);
        assert_eq!(artifacts.get(COVERAGE_TYPE), Some(raw));
    }

    #[test]
    fn stores_filtered_content() {
        let fs = MemoryFs::default().with("/ci/clover", "abc");
        let upper = |s: &str| s.to_uppercase();
        let mut artifacts = ArtifactCollection::new();
        artifacts.add(&fs, COVERAGE_TYPE, Path::new("/ci/clover"), Some(&upper));
        assert_eq!(artifacts.get(COVERAGE_TYPE), Some("ABC"));
    }

    #[test]
    fn iteration_is_insertion_ordered_and_restartable() {
        let fs = MemoryFs::default()
            .with("/ci/b", "second")
            .with("/ci/a", "first")
            .with("/ci/c", "replaced");
        let mut artifacts = ArtifactCollection::new();
        artifacts.add(&fs, "b-type", Path::new("/ci/b"), None);
        artifacts.add(&fs, "a-type", Path::new("/ci/a"), None);
        artifacts.add(&fs, "b-type", Path::new("/ci/c"), None);

        let first: Vec<_> = artifacts.iter().collect();
        assert_eq!(first, vec![("b-type", "replaced"), ("a-type", "first")]);
        let second: Vec<_> = artifacts.iter().collect();
        assert_eq!(first, second);

        let types: Vec<&str> = (&artifacts).into_iter().map(|a| a.artifact_type.as_str()).collect();
        assert_eq!(types, vec!["b-type", "a-type"]);
    }

    #[test]
    fn strip_root_filter_removes_project_root() {
        let filter = strip_root_filter(Path::new("/home/ci/project"));
        let report = "<file name=\"/home/ci/project/src/Foo.php\">\
                      <file name=\"/home/ci/project/src/Bar.php\">\
                      <file name=\"/elsewhere/Baz.php\">";
        assert_eq!(
            filter(report),
            "<file name=\"/src/Foo.php\"><file name=\"/src/Bar.php\"><file name=\"/elsewhere/Baz.php\">"
        );
    }

    #[test]
    fn strip_root_filter_ignores_trailing_separator() {
        let filter = strip_root_filter(Path::new("/home/ci/project/"));
        assert_eq!(filter("<file name=\"/home/ci/project/a.php\">"), "<file name=\"/a.php\">");
    }
}

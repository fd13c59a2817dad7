//! Upload configuration resolved from CLI arguments and the environment.

use std::path::{Path, PathBuf};

use reqwest::Url;

use crate::artifacts::COVERAGE_TYPE;
use crate::cli::UploadArgs;

/// Endpoint receiving uploads unless overridden.
pub const DEFAULT_ENDPOINT: &str = "http://jmsyst.com/travis-build-artifact";

/// Coverage report file name, relative to the project root.
pub const DEFAULT_COVERAGE_FILE: &str = "clover";

/// Environment variable naming a directory to record port interactions into.
pub const RECORD_ENV: &str = "ARTIFACT_UPLOAD_RECORD";

/// An artifact to collect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSource {
    /// Artifact type sent on the wire.
    pub artifact_type: String,
    /// File to read.
    pub path: PathBuf,
    /// Whether the project root is stripped from `<file name>` references.
    pub strip_root: bool,
}

/// Validated settings for one upload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Endpoint URL.
    pub endpoint: String,
    /// Project root.
    pub root: PathBuf,
    /// Artifacts in registration order; coverage first.
    pub sources: Vec<ArtifactSource>,
    /// Collect only, do not upload.
    pub dry_run: bool,
}

impl UploadConfig {
    /// Builds the configuration, defaulting the root to `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the endpoint is not an http(s) URL or an
    /// `--artifact` value is not `TYPE=PATH`.
    pub fn from_args(args: &UploadArgs, cwd: &Path) -> Result<Self, String> {
        let endpoint = Url::parse(&args.endpoint)
            .map_err(|e| format!("Invalid endpoint {:?}: {e}", args.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(format!("Invalid endpoint {:?}: expected an http(s) URL", args.endpoint));
        }

        let root = match &args.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        };

        let coverage =
            root.join(args.coverage_file.as_deref().unwrap_or(Path::new(DEFAULT_COVERAGE_FILE)));
        let mut sources = vec![ArtifactSource {
            artifact_type: COVERAGE_TYPE.to_string(),
            path: coverage,
            strip_root: true,
        }];

        for spec in &args.artifacts {
            let (artifact_type, path) = parse_artifact(spec)?;
            sources.push(ArtifactSource { artifact_type, path: root.join(path), strip_root: false });
        }

        Ok(Self { endpoint: args.endpoint.clone(), root, sources, dry_run: args.dry_run })
    }
}

fn parse_artifact(spec: &str) -> Result<(String, PathBuf), String> {
    match spec.split_once('=') {
        Some((artifact_type, path)) if !artifact_type.trim().is_empty() && !path.is_empty() => {
            Ok((artifact_type.trim().to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("Invalid --artifact {spec:?}: expected TYPE=PATH")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> UploadArgs {
        UploadArgs {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            root: None,
            coverage_file: None,
            artifacts: Vec::new(),
            dry_run: false,
        }
    }

    #[test]
    fn defaults_to_clover_under_cwd() {
        let config = UploadConfig::from_args(&base_args(), Path::new("/home/ci/project")).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.root, PathBuf::from("/home/ci/project"));
        assert_eq!(
            config.sources,
            vec![ArtifactSource {
                artifact_type: "php-code-coverage".into(),
                path: PathBuf::from("/home/ci/project/clover"),
                strip_root: true,
            }]
        );
    }

    #[test]
    fn relative_paths_resolve_against_root() {
        let args = UploadArgs {
            root: Some(PathBuf::from("checkout")),
            coverage_file: Some(PathBuf::from("build/clover.xml")),
            artifacts: vec!["junit=build/junit.xml".into(), "pmd=/abs/pmd.xml".into()],
            ..base_args()
        };
        let config = UploadConfig::from_args(&args, Path::new("/ci")).unwrap();
        assert_eq!(config.root, PathBuf::from("/ci/checkout"));
        let paths: Vec<_> = config.sources.iter().map(|s| s.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/ci/checkout/build/clover.xml"),
                PathBuf::from("/ci/checkout/build/junit.xml"),
                PathBuf::from("/abs/pmd.xml"),
            ]
        );
        assert!(!config.sources[1].strip_root);
    }

    #[test]
    fn rejects_bad_endpoint() {
        let args = UploadArgs { endpoint: "not a url".into(), ..base_args() };
        assert!(UploadConfig::from_args(&args, Path::new("/ci")).is_err());

        let args = UploadArgs { endpoint: "ftp://example.com/x".into(), ..base_args() };
        let err = UploadConfig::from_args(&args, Path::new("/ci")).unwrap_err();
        assert!(err.contains("http(s)"));
    }

    #[test]
    fn rejects_malformed_artifact() {
        for bad in ["junit", "=path", "junit="] {
            let args = UploadArgs { artifacts: vec![bad.into()], ..base_args() };
            let err = UploadConfig::from_args(&args, Path::new("/ci")).unwrap_err();
            assert!(err.contains("TYPE=PATH"), "{bad}: {err}");
        }
    }
}

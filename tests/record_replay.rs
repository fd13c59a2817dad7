//! Replays a recorded upload session through the full upload command.
//!
//! The cassette stands in for git, the filesystem and the endpoint, so the
//! whole pipeline runs without a checkout or network.

use std::path::{Path, PathBuf};

use serde_json::json;

use artifact_upload::cassette::format::Cassette;
use artifact_upload::cassette::recorder::CassetteRecorder;
use artifact_upload::cassette::session::RecordingSession;
use artifact_upload::commands::upload;
use artifact_upload::config::{ArtifactSource, UploadConfig};
use artifact_upload::context::ServiceContext;

const CLOVER: &str = "<coverage><file name=\"/home/ci/project/src/Foo.php\"/></coverage>";

fn record_session(path: &Path, responses: &[&str]) {
    let mut recorder = CassetteRecorder::new(path, "upload-session", "0f1e2d3c");
    recorder.record("git", "rev_parse_head", json!(null), json!({"ok": "0f1e2d3c\n"}));
    recorder.record(
        "git",
        "list_remotes",
        json!(null),
        json!({"ok": "origin\tgit@github.com:acme/tools.git (fetch)\norigin\tgit@github.com:acme/tools.git (push)\n"}),
    );
    for file in ["/home/ci/project/clover", "/home/ci/project/junit.xml"] {
        recorder.record("fs", "is_file", json!({"path": file}), json!(true));
    }
    recorder.record("fs", "read_to_string", json!({"path": "/home/ci/project/clover"}), json!({"ok": CLOVER}));
    recorder.record("fs", "read_to_string", json!({"path": "/home/ci/project/junit.xml"}), json!({"ok": "<testsuites/>"}));
    for response in responses {
        recorder.record("http", "post_json", json!({}), json!({"ok": response}));
    }
    recorder.finish().expect("recording should succeed");
}

fn config() -> UploadConfig {
    UploadConfig {
        endpoint: "http://localhost/upload".into(),
        root: PathBuf::from("/home/ci/project"),
        sources: vec![
            ArtifactSource {
                artifact_type: "php-code-coverage".into(),
                path: "/home/ci/project/clover".into(),
                strip_root: true,
            },
            ArtifactSource {
                artifact_type: "junit".into(),
                path: "/home/ci/project/junit.xml".into(),
                strip_root: false,
            },
        ],
        dry_run: false,
    }
}

#[tokio::test]
async fn replayed_session_uploads_every_artifact() {
    let dir = std::env::temp_dir().join("artifact_upload_replay_ok");
    let path = dir.join("session.cassette.yaml");
    record_session(&path, &[r#"{"status":"ok"}"#, r#"{"status":"ok"}"#]);

    let ctx = ServiceContext::replaying(&path).unwrap();
    upload::run_with_context(&ctx, &config()).await.unwrap();

    // Replaying twice gives the same outcome.
    let ctx = ServiceContext::replaying(&path).unwrap();
    upload::run_with_context(&ctx, &config()).await.unwrap();

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn replayed_rejection_aborts_the_run() {
    let dir = std::env::temp_dir().join("artifact_upload_replay_rejected");
    let path = dir.join("session.cassette.yaml");
    // Only one response recorded: a second POST would exhaust the cassette and panic.
    record_session(&path, &[r#"{"status":"fail","message":"bad sha"}"#]);

    let ctx = ServiceContext::replaying(&path).unwrap();
    let err = upload::run_with_context(&ctx, &config()).await.unwrap_err();
    assert_eq!(err, "Could not upload \"php-code-coverage\": bad sha");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn recorded_session_directory_replays_the_upload() {
    let dir = std::env::temp_dir().join("artifact_upload_record_then_replay");
    let source = dir.join("source.cassette.yaml");
    record_session(&source, &[r#"{"status":"ok"}"#, r#"{"status":"ok"}"#]);

    // Record a run whose ports are served by the source cassette.
    let session = RecordingSession::at(dir.join("recordings"), "0f1e2d3c").unwrap();
    let ctx = ServiceContext::replaying(&source).unwrap().recorded_into(&session);
    upload::run_with_context(&ctx, &config()).await.unwrap();
    drop(ctx);
    let recording = session.finish().unwrap();

    let http = Cassette::load(&recording.join("http.cassette.yaml")).unwrap();
    assert_eq!(http.interactions.len(), 2);
    assert_eq!(http.interactions[0].input["body"]["login"], "acme");

    // The per-port files alone reproduce the run.
    let ctx = ServiceContext::replaying_dir(&recording).unwrap();
    upload::run_with_context(&ctx, &config()).await.unwrap();

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn collected_coverage_has_project_root_stripped() {
    let dir = std::env::temp_dir().join("artifact_upload_replay_collect");
    let path = dir.join("session.cassette.yaml");
    record_session(&path, &[]);

    let cassette = Cassette::load(&path).unwrap();
    let ctx = ServiceContext::replaying_cassette(&cassette);
    let artifacts = upload::collect(&ctx, &config());

    let coverage = artifacts.get("php-code-coverage").unwrap();
    assert_eq!(coverage, "<coverage><file name=\"/src/Foo.php\"/></coverage>");
    assert_eq!(artifacts.get("junit"), Some("<testsuites/>"));

    let _ = std::fs::remove_dir_all(&dir);
}

//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the upload pipeline and an
//! external system (git, filesystem, HTTP). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod git;
pub mod http;

pub use filesystem::FileSystem;
pub use git::GitRepo;
pub use http::{PostFuture, UploadTransport};

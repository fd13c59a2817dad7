//! `upload-artifacts identity` command.

use crate::context::ServiceContext;
use crate::identity;

/// Resolve and print the repository identity.
///
/// # Errors
///
/// Returns the resolution failure message.
pub fn run_with_context(ctx: &ServiceContext) -> Result<(), String> {
    let identity = identity::resolve(ctx.git.as_ref()).map_err(|e| e.to_string())?;
    println!("{identity}");
    Ok(())
}

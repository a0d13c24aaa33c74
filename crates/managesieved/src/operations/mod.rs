//! Boundary to the script repository.
//!
//! Every script-management verb is served by one method of
//! [`ScriptOperations`]. Implementations own argument grammar (quoted
//! strings, literals), repository access and Sieve validation, and they format
//! their own success line. The dispatcher passes the raw argument string
//! through untouched, leading separator included; a bare verb arrives as an
//! empty string.
//!
//! Failures are reported as [`OperationError`] and travel back to the
//! connection driver unchanged.

mod errors;

pub use errors::{OperationError, ResponseCode};

use crate::session::Session;

/// Result of a single script operation: a protocol-ready response line.
pub type OperationResult = Result<String, OperationError>;

/// Script repository operations, one per ManageSieve verb.
///
/// Implementations are shared by every connection, so they must be safe to
/// call concurrently from different sessions. Any per-script exclusivity
/// (for example two sessions renaming the same script) is theirs to enforce.
pub trait ScriptOperations: Send + Sync {
    /// Reports server capabilities (`CAPABILITY`).
    fn capability(&self, session: &mut Session, arguments: &str) -> OperationResult;

    /// Validates a script without storing it (`CHECKSCRIPT`).
    fn check_script(&self, session: &mut Session, arguments: &str) -> OperationResult;

    /// Removes a stored script (`DELETESCRIPT`).
    fn delete_script(&self, session: &mut Session, arguments: &str) -> OperationResult;

    /// Returns the active script (`GETACTIVE`).
    fn get_active(&self, session: &mut Session, arguments: &str) -> OperationResult;

    /// Returns the content of a named script (`GETSCRIPT`).
    fn get_script(&self, session: &mut Session, arguments: &str) -> OperationResult;

    /// Checks whether a script of the given size would fit the quota
    /// (`HAVESPACE`).
    fn have_space(&self, session: &mut Session, arguments: &str) -> OperationResult;

    /// Lists the user's scripts (`LISTSCRIPTS`).
    fn list_scripts(&self, session: &mut Session, arguments: &str) -> OperationResult;

    /// Stores a script (`PUTSCRIPT`).
    fn put_script(&self, session: &mut Session, arguments: &str) -> OperationResult;

    /// Renames a stored script (`RENAMESCRIPT`).
    fn rename_script(&self, session: &mut Session, arguments: &str) -> OperationResult;

    /// Marks a script as the active one (`SETACTIVE`).
    fn set_active(&self, session: &mut Session, arguments: &str) -> OperationResult;
}

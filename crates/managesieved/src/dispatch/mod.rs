//! ManageSieve command dispatch.
//!
//! This module turns one request line into one response line. A line is split
//! into a verb and its raw arguments, the verb is looked up in the command
//! table, and the table decides between calling exactly one script operation
//! or answering with a canned reply.
//!
//! ## Protocol
//!
//! ```text
//! C: GETSCRIPT "vacation"
//! S: <whatever ScriptOperations::get_script returned>
//! C: NOOP
//! S: NO NOOP command not yet implemented
//! C: noop
//! S: NO unknown noop command
//! ```
//!
//! ## Routing
//!
//! Verbs are matched exactly, uppercase only. Script-management verbs map to
//! one [`ScriptOperations`](crate::operations::ScriptOperations) method each.
//! The session-transition verbs (`AUTHENTICATE`, `LOGOUT`, `NOOP`,
//! `STARTTLS`, `UNAUTHENTICATE`) answer with fixed stub lines and touch
//! neither the session nor the repository.

mod dispatcher;
mod errors;
mod request;
pub mod response;
mod router;
mod verb;

pub use self::dispatcher::CommandDispatcher;
pub use self::errors::DispatchError;
pub use self::request::Request;
pub use self::response::ResponseWriter;
pub use self::router::{Route, ScriptOperation, StubReply, route};
pub use self::verb::Verb;

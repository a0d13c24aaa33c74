//! The command table.
//!
//! [`route`] maps every known verb to exactly one [`Route`]: either a single
//! script operation or a canned stub reply. The match is exhaustive, so a new
//! verb cannot be added without deciding where it goes.

use crate::operations::{OperationResult, ScriptOperations};
use crate::session::Session;

use super::response;
use super::verb::Verb;

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// What a verb triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Delegate to one script operation.
    Operation(ScriptOperation),
    /// Answer with a fixed placeholder line.
    Stub(StubReply),
}

/// Script operations reachable from the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOperation {
    /// [`ScriptOperations::capability`]
    Capability,
    /// [`ScriptOperations::check_script`]
    CheckScript,
    /// [`ScriptOperations::delete_script`]
    DeleteScript,
    /// [`ScriptOperations::get_active`]
    GetActive,
    /// [`ScriptOperations::get_script`]
    GetScript,
    /// [`ScriptOperations::have_space`]
    HaveSpace,
    /// [`ScriptOperations::list_scripts`]
    ListScripts,
    /// [`ScriptOperations::put_script`]
    PutScript,
    /// [`ScriptOperations::rename_script`]
    RenameScript,
    /// [`ScriptOperations::set_active`]
    SetActive,
}

impl ScriptOperation {
    /// Calls the bound method on `operations`. This is the only call site
    /// into the operations trait.
    pub fn invoke(
        self,
        operations: &dyn ScriptOperations,
        session: &mut Session,
        arguments: &str,
    ) -> OperationResult {
        match self {
            Self::Capability => operations.capability(session, arguments),
            Self::CheckScript => operations.check_script(session, arguments),
            Self::DeleteScript => operations.delete_script(session, arguments),
            Self::GetActive => operations.get_active(session, arguments),
            Self::GetScript => operations.get_script(session, arguments),
            Self::HaveSpace => operations.have_space(session, arguments),
            Self::ListScripts => operations.list_scripts(session, arguments),
            Self::PutScript => operations.put_script(session, arguments),
            Self::RenameScript => operations.rename_script(session, arguments),
            Self::SetActive => operations.set_active(session, arguments),
        }
    }

    /// Method name, for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Capability => "capability",
            Self::CheckScript => "check_script",
            Self::DeleteScript => "delete_script",
            Self::GetActive => "get_active",
            Self::GetScript => "get_script",
            Self::HaveSpace => "have_space",
            Self::ListScripts => "list_scripts",
            Self::PutScript => "put_script",
            Self::RenameScript => "rename_script",
            Self::SetActive => "set_active",
        }
    }
}

/// Wording of a stub reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubReply {
    /// `NO <VERB> command not yet implemented`
    NotYetImplemented,
    /// `NO <VERB> command not yet handled`
    NotYetHandled,
}

impl StubReply {
    /// Renders the reply for `verb`.
    #[must_use]
    pub fn render(self, verb: Verb) -> String {
        match self {
            Self::NotYetImplemented => response::not_yet_implemented(verb),
            Self::NotYetHandled => response::not_yet_handled(verb),
        }
    }
}

/// Returns what `verb` triggers.
///
/// `DELETESCRIPT` is bound to [`ScriptOperation::DeleteScript`], never to the
/// syntax check.
#[must_use]
pub const fn route(verb: Verb) -> Route {
    match verb {
        Verb::Capability => Route::Operation(ScriptOperation::Capability),
        Verb::CheckScript => Route::Operation(ScriptOperation::CheckScript),
        Verb::DeleteScript => Route::Operation(ScriptOperation::DeleteScript),
        Verb::GetActive => Route::Operation(ScriptOperation::GetActive),
        Verb::GetScript => Route::Operation(ScriptOperation::GetScript),
        Verb::HaveSpace => Route::Operation(ScriptOperation::HaveSpace),
        Verb::ListScripts => Route::Operation(ScriptOperation::ListScripts),
        Verb::PutScript => Route::Operation(ScriptOperation::PutScript),
        Verb::RenameScript => Route::Operation(ScriptOperation::RenameScript),
        Verb::SetActive => Route::Operation(ScriptOperation::SetActive),
        Verb::Authenticate | Verb::Logout | Verb::Noop | Verb::StartTls => {
            Route::Stub(StubReply::NotYetImplemented)
        }
        Verb::Unauthenticate => Route::Stub(StubReply::NotYetHandled),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::capability(Verb::Capability, ScriptOperation::Capability)]
    #[case::check(Verb::CheckScript, ScriptOperation::CheckScript)]
    #[case::delete(Verb::DeleteScript, ScriptOperation::DeleteScript)]
    #[case::get_active(Verb::GetActive, ScriptOperation::GetActive)]
    #[case::get_script(Verb::GetScript, ScriptOperation::GetScript)]
    #[case::have_space(Verb::HaveSpace, ScriptOperation::HaveSpace)]
    #[case::list(Verb::ListScripts, ScriptOperation::ListScripts)]
    #[case::put(Verb::PutScript, ScriptOperation::PutScript)]
    #[case::rename(Verb::RenameScript, ScriptOperation::RenameScript)]
    #[case::set_active(Verb::SetActive, ScriptOperation::SetActive)]
    fn operation_verbs_route_to_their_operation(
        #[case] verb: Verb,
        #[case] expected: ScriptOperation,
    ) {
        assert_eq!(route(verb), Route::Operation(expected));
    }

    #[rstest]
    #[case::authenticate(Verb::Authenticate, StubReply::NotYetImplemented)]
    #[case::logout(Verb::Logout, StubReply::NotYetImplemented)]
    #[case::noop(Verb::Noop, StubReply::NotYetImplemented)]
    #[case::starttls(Verb::StartTls, StubReply::NotYetImplemented)]
    #[case::unauthenticate(Verb::Unauthenticate, StubReply::NotYetHandled)]
    fn session_transitions_route_to_stubs(#[case] verb: Verb, #[case] expected: StubReply) {
        assert_eq!(route(verb), Route::Stub(expected));
    }

    #[test]
    fn delete_is_not_routed_to_check() {
        assert_ne!(
            route(Verb::DeleteScript),
            Route::Operation(ScriptOperation::CheckScript)
        );
    }

    #[test]
    fn each_operation_is_bound_to_exactly_one_verb() {
        let mut bound: Vec<ScriptOperation> = Verb::ALL
            .into_iter()
            .filter_map(|verb| match route(verb) {
                Route::Operation(operation) => Some(operation),
                Route::Stub(_) => None,
            })
            .collect();
        let total = bound.len();
        bound.sort_by_key(|operation| operation.as_str());
        bound.dedup();
        assert_eq!(bound.len(), total);
        assert_eq!(total, 10);
    }

    #[test]
    fn stub_replies_render_their_wording() {
        assert_eq!(
            StubReply::NotYetImplemented.render(Verb::Logout),
            "NO LOGOUT command not yet implemented"
        );
        assert_eq!(
            StubReply::NotYetHandled.render(Verb::Unauthenticate),
            "NO UNAUTHENTICATE command not yet handled"
        );
    }
}

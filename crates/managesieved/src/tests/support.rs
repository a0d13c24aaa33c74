//! Test doubles for the script operations boundary.

use std::sync::{Mutex, PoisonError};

use mockall::mock;

use crate::operations::{OperationError, OperationResult, ScriptOperations};
use crate::session::Session;

mock! {
    pub ScriptOps {}
    impl ScriptOperations for ScriptOps {
        fn capability(&self, session: &mut Session, arguments: &str) -> OperationResult;
        fn check_script(&self, session: &mut Session, arguments: &str) -> OperationResult;
        fn delete_script(&self, session: &mut Session, arguments: &str) -> OperationResult;
        fn get_active(&self, session: &mut Session, arguments: &str) -> OperationResult;
        fn get_script(&self, session: &mut Session, arguments: &str) -> OperationResult;
        fn have_space(&self, session: &mut Session, arguments: &str) -> OperationResult;
        fn list_scripts(&self, session: &mut Session, arguments: &str) -> OperationResult;
        fn put_script(&self, session: &mut Session, arguments: &str) -> OperationResult;
        fn rename_script(&self, session: &mut Session, arguments: &str) -> OperationResult;
        fn set_active(&self, session: &mut Session, arguments: &str) -> OperationResult;
    }
}

/// One call observed by [`RecordingOperations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub arguments: String,
    pub user: Option<String>,
}

/// Operations double that records every call and answers
/// `OK <operation><arguments>`, unless told to fail.
#[derive(Debug, Default)]
pub struct RecordingOperations {
    calls: Mutex<Vec<RecordedCall>>,
    failure: Mutex<Option<(&'static str, OperationError)>>,
}

impl RecordingOperations {
    /// Makes every later call to `operation` fail with `error`.
    pub fn fail_on(&self, operation: &'static str, error: OperationError) {
        *self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some((operation, error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, operation: &'static str, session: &Session, arguments: &str) -> OperationResult {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                operation,
                arguments: arguments.to_owned(),
                user: session.user().map(str::to_owned),
            });

        let failure = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match failure.as_ref() {
            Some((failing, error)) if *failing == operation => Err(error.clone()),
            _ => Ok(format!("OK {operation}{arguments}")),
        }
    }
}

impl ScriptOperations for RecordingOperations {
    fn capability(&self, session: &mut Session, arguments: &str) -> OperationResult {
        self.record("capability", session, arguments)
    }

    fn check_script(&self, session: &mut Session, arguments: &str) -> OperationResult {
        self.record("check_script", session, arguments)
    }

    fn delete_script(&self, session: &mut Session, arguments: &str) -> OperationResult {
        self.record("delete_script", session, arguments)
    }

    fn get_active(&self, session: &mut Session, arguments: &str) -> OperationResult {
        self.record("get_active", session, arguments)
    }

    fn get_script(&self, session: &mut Session, arguments: &str) -> OperationResult {
        self.record("get_script", session, arguments)
    }

    fn have_space(&self, session: &mut Session, arguments: &str) -> OperationResult {
        self.record("have_space", session, arguments)
    }

    fn list_scripts(&self, session: &mut Session, arguments: &str) -> OperationResult {
        self.record("list_scripts", session, arguments)
    }

    fn put_script(&self, session: &mut Session, arguments: &str) -> OperationResult {
        self.record("put_script", session, arguments)
    }

    fn rename_script(&self, session: &mut Session, arguments: &str) -> OperationResult {
        self.record("rename_script", session, arguments)
    }

    fn set_active(&self, session: &mut Session, arguments: &str) -> OperationResult {
        self.record("set_active", session, arguments)
    }
}

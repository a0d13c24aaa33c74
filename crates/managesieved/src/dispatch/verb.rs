//! The closed set of ManageSieve command verbs.

use std::fmt;

/// Known ManageSieve command verbs.
///
/// Matching is exact and case-sensitive: only the uppercase spelling is
/// recognised. Anything else is reported as unknown by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `AUTHENTICATE`
    Authenticate,
    /// `CAPABILITY`
    Capability,
    /// `CHECKSCRIPT`
    CheckScript,
    /// `DELETESCRIPT`
    DeleteScript,
    /// `GETACTIVE`
    GetActive,
    /// `GETSCRIPT`
    GetScript,
    /// `HAVESPACE`
    HaveSpace,
    /// `LISTSCRIPTS`
    ListScripts,
    /// `LOGOUT`
    Logout,
    /// `NOOP`
    Noop,
    /// `PUTSCRIPT`
    PutScript,
    /// `RENAMESCRIPT`
    RenameScript,
    /// `SETACTIVE`
    SetActive,
    /// `STARTTLS`
    StartTls,
    /// `UNAUTHENTICATE`
    Unauthenticate,
}

impl Verb {
    /// Every known verb, in wire-name order.
    pub const ALL: [Self; 15] = [
        Self::Authenticate,
        Self::Capability,
        Self::CheckScript,
        Self::DeleteScript,
        Self::GetActive,
        Self::GetScript,
        Self::HaveSpace,
        Self::ListScripts,
        Self::Logout,
        Self::Noop,
        Self::PutScript,
        Self::RenameScript,
        Self::SetActive,
        Self::StartTls,
        Self::Unauthenticate,
    ];

    /// Looks up a verb token exactly as received.
    ///
    /// No trimming or case folding is applied, so `"noop"` and `"NOOP "` are
    /// both unknown.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "AUTHENTICATE" => Some(Self::Authenticate),
            "CAPABILITY" => Some(Self::Capability),
            "CHECKSCRIPT" => Some(Self::CheckScript),
            "DELETESCRIPT" => Some(Self::DeleteScript),
            "GETACTIVE" => Some(Self::GetActive),
            "GETSCRIPT" => Some(Self::GetScript),
            "HAVESPACE" => Some(Self::HaveSpace),
            "LISTSCRIPTS" => Some(Self::ListScripts),
            "LOGOUT" => Some(Self::Logout),
            "NOOP" => Some(Self::Noop),
            "PUTSCRIPT" => Some(Self::PutScript),
            "RENAMESCRIPT" => Some(Self::RenameScript),
            "SETACTIVE" => Some(Self::SetActive),
            "STARTTLS" => Some(Self::StartTls),
            "UNAUTHENTICATE" => Some(Self::Unauthenticate),
            _ => None,
        }
    }

    /// Returns the wire spelling of the verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authenticate => "AUTHENTICATE",
            Self::Capability => "CAPABILITY",
            Self::CheckScript => "CHECKSCRIPT",
            Self::DeleteScript => "DELETESCRIPT",
            Self::GetActive => "GETACTIVE",
            Self::GetScript => "GETSCRIPT",
            Self::HaveSpace => "HAVESPACE",
            Self::ListScripts => "LISTSCRIPTS",
            Self::Logout => "LOGOUT",
            Self::Noop => "NOOP",
            Self::PutScript => "PUTSCRIPT",
            Self::RenameScript => "RENAMESCRIPT",
            Self::SetActive => "SETACTIVE",
            Self::StartTls => "STARTTLS",
            Self::Unauthenticate => "UNAUTHENTICATE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

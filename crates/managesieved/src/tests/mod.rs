//! Test suites for the command service.

pub(crate) mod support;

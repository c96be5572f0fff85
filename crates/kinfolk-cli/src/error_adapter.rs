//! Error adapter for converting KinfolkError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use kinfolk::{KinfolkError, store::StoreError};

/// Adapter giving a [`KinfolkError`] a stable code and help text.
pub struct ErrorAdapter<'a>(pub &'a KinfolkError);

impl ErrorAdapter<'_> {
    fn code_str(&self) -> &'static str {
        match self.0 {
            KinfolkError::Io(_) => "kinfolk::io",
            KinfolkError::Json(_) => "kinfolk::snapshot",
            KinfolkError::Structure(_) => "kinfolk::structure",
            KinfolkError::Store(StoreError::DuplicatePerson(_)) => "kinfolk::store::duplicate",
            KinfolkError::Store(StoreError::UnknownPerson(_)) => "kinfolk::store::unknown",
            KinfolkError::Store(_) => "kinfolk::store",
            KinfolkError::UnknownPerson(_) => "kinfolk::unknown_person",
            KinfolkError::Config(_) => "kinfolk::config",
        }
    }

    fn help_str(&self) -> Option<String> {
        match self.0 {
            KinfolkError::Io(_) => None,
            KinfolkError::Json(err) => Some(format!(
                "check the snapshot near line {}, column {}",
                err.line(),
                err.column()
            )),
            KinfolkError::Structure(_) => {
                Some("a person cannot be their own ancestor; remove one of the listed parent-child links".to_string())
            }
            KinfolkError::Store(StoreError::DuplicatePerson(_)) => {
                Some("choose an id that is not used in the snapshot".to_string())
            }
            KinfolkError::Store(StoreError::UnknownPerson(_)) | KinfolkError::UnknownPerson(_) => {
                Some("ids are case-sensitive; list them with `kinfolk stats` or open the snapshot".to_string())
            }
            KinfolkError::Store(_) => None,
            KinfolkError::Config(_) => {
                Some("see the [layout] and [style] sections of the configuration file".to_string())
            }
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_str()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`KinfolkError`] into a reportable error.
pub fn to_reportable(err: &KinfolkError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

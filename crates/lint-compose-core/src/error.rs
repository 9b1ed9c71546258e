//! Errors raised while composing a configuration.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while building registries or resolving a request.
///
/// Every variant is fatal: composition never continues with a partial
/// result, and nothing here is worth retrying.
#[derive(Debug, Error, Diagnostic)]
pub enum ComposeError {
    /// A selected fragment name has no entry in the consulted registry.
    #[error("unknown fragment `{name}`")]
    #[diagnostic(
        code(lint_compose::unknown_fragment),
        help("available fragments: {available}")
    )]
    UnknownFragment {
        /// The name that was not found.
        name: String,
        /// Comma-separated names the registry does know.
        available: String,
    },

    /// The same fragment name was selected more than once.
    #[error("fragment `{name}` is selected more than once")]
    #[diagnostic(code(lint_compose::duplicate_selection))]
    DuplicateSelection {
        /// The repeated name.
        name: String,
    },

    /// Two registries being combined both define the same fragment.
    #[error("fragment `{name}` is defined more than once")]
    #[diagnostic(code(lint_compose::duplicate_fragment))]
    DuplicateFragment {
        /// The conflicting name.
        name: String,
    },

    /// A fragment name is empty or contains characters outside `[a-z0-9-]`.
    #[error("invalid fragment name `{name}`: must be non-empty [a-z0-9-]")]
    #[diagnostic(code(lint_compose::invalid_fragment_name))]
    InvalidFragmentName {
        /// The rejected name.
        name: String,
    },

    /// A files directive does not match the supported grammar.
    #[error("invalid files directive `{value}`: {reason}")]
    #[diagnostic(
        code(lint_compose::invalid_files_directive),
        help("use \"all\", \"all-inside:<dir>\", or a list of glob strings")
    )]
    InvalidFilesDirective {
        /// The offending value as written.
        value: String,
        /// Which part of the grammar it violates.
        reason: String,
    },

    /// An ignores directive contains an empty pattern.
    #[error("invalid ignores directive `{value}`: patterns must not be empty")]
    #[diagnostic(code(lint_compose::invalid_ignores_directive))]
    InvalidIgnoresDirective {
        /// The offending value as written.
        value: String,
    },

    /// The project directory could not be resolved on the filesystem.
    #[error(transparent)]
    #[diagnostic(code(lint_compose::io))]
    Io(#[from] std::io::Error),
}

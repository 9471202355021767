//! Error types for the routing pipeline.
//!
//! Every parse failure is a [`ParseError`] variant carrying the identifiers
//! and counts needed for a precise message. Variants group into the coarser
//! [`ErrorKind`] taxonomy via [`ParseError::kind`], which is what callers
//! match on to translate failures into user-facing diagnostics.

use thiserror::Error;

/// Coarse failure classification for a [`ParseError`].
///
/// `ServerError` is reserved for violations of the descriptor store's own
/// contract; every other kind describes bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required owner command is absent.
    MissingCommand,
    /// Bad ownership chain, bad hierarchy order, or a malformed quoted value.
    InvalidCommand,
    /// More arguments than the descriptor declares, or none declared at all.
    UnsupportedArgument,
    /// More options than the descriptor declares, or none declared at all.
    UnsupportedOption,
    /// A command appeared after positional arguments.
    InvalidArgument,
    /// An option key resolved to no declared option, or its prefix
    /// classification disagrees with the matched descriptor field (id vs
    /// alias).
    InvalidOption,
    /// The request itself is unusable (e.g., empty).
    InvalidRequest,
    /// The descriptor store violated its lookup contract.
    ServerError,
}

/// Errors produced while parsing a request string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Request string is empty or whitespace-only.
    #[error("request is empty")]
    EmptyRequest,

    /// No leading segment resolved to a registered command.
    #[error("request does not identify a command: {raw}")]
    NoCommand {
        /// The raw request string.
        raw: String,
    },

    /// A command that requires an owner appeared first in the request.
    #[error("command `{id}` requires an owner command, none was provided")]
    MissingOwner {
        /// Id of the command missing its owner.
        id: String,
    },

    /// A command appeared under an owner it is not registered for.
    #[error("command `{id}` is not owned by `{owner}`")]
    InvalidOwner {
        /// Id of the misplaced command.
        id: String,
        /// Id of the command it actually followed.
        owner: String,
    },

    /// A command segment appeared after positional arguments.
    #[error("command `{id}` found after arguments")]
    CommandAfterArguments {
        /// Id of the late command.
        id: String,
    },

    /// A quoted value was opened but never closed.
    #[error("missing closing delimiter `{delimiter}` in value starting `{value}`")]
    UnterminatedValue {
        /// The configured value delimiter.
        delimiter: String,
        /// The accumulated value text at the point of exhaustion.
        value: String,
    },

    /// A second root command appeared in the hierarchy.
    #[error("multiple root commands: `{id}`")]
    MultipleRoots {
        /// Id of the second root.
        id: String,
    },

    /// A group command appeared with no root before it.
    #[error("group command `{id}` has no root command")]
    GroupWithoutRoot {
        /// Id of the orphan group.
        id: String,
    },

    /// A descriptor followed a subcommand in the hierarchy.
    #[error("command `{id}` follows a terminal subcommand")]
    CommandAfterSubCommand {
        /// Id of the trailing command.
        id: String,
    },

    /// Arguments were supplied to a command that declares none.
    #[error("command `{id}` does not accept arguments")]
    UnsupportedArguments {
        /// Id of the executing command.
        id: String,
    },

    /// More arguments were supplied than the command declares.
    #[error("command `{id}` accepts {declared} argument(s), found {parsed}")]
    TooManyArguments {
        /// Id of the executing command.
        id: String,
        /// Number of argument descriptors declared.
        declared: usize,
        /// Number of positional values captured.
        parsed: usize,
    },

    /// Options were supplied to a command that declares none.
    #[error("command `{id}` does not accept options")]
    UnsupportedOptions {
        /// Id of the executing command.
        id: String,
    },

    /// More options were supplied than the command declares.
    #[error("command `{id}` accepts {declared} option(s), found {parsed}")]
    TooManyOptions {
        /// Id of the executing command.
        id: String,
        /// Number of option descriptors declared.
        declared: usize,
        /// Number of options captured.
        parsed: usize,
    },

    /// An option key did not resolve to any declared option.
    #[error("option `{key}` is not supported by command `{id}`")]
    UnknownOption {
        /// Id of the executing command.
        id: String,
        /// The bare option key, prefix stripped.
        key: String,
    },

    /// An option key's prefix classification (id vs alias) disagrees with
    /// the descriptor field it matched.
    #[error("option `{key}` of command `{id}` must be passed by {expected}")]
    OptionPrefixMismatch {
        /// Id of the executing command.
        id: String,
        /// The bare option key, prefix stripped.
        key: String,
        /// The field the key should have matched (`"id"` or `"alias"`).
        expected: &'static str,
    },

    /// The store reported a match but returned no descriptor.
    #[error("store reported a match for `{id}` but returned no descriptor")]
    StoreContract {
        /// Id the store claimed to have found.
        id: String,
    },
}

impl ParseError {
    /// Returns the coarse [`ErrorKind`] for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_router_core::{ErrorKind, ParseError};
    ///
    /// let err = ParseError::MissingOwner { id: "group".into() };
    /// assert_eq!(err.kind(), ErrorKind::MissingCommand);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyRequest => ErrorKind::InvalidRequest,
            Self::NoCommand { .. }
            | Self::InvalidOwner { .. }
            | Self::UnterminatedValue { .. }
            | Self::MultipleRoots { .. }
            | Self::CommandAfterSubCommand { .. } => ErrorKind::InvalidCommand,
            Self::MissingOwner { .. } | Self::GroupWithoutRoot { .. } => ErrorKind::MissingCommand,
            Self::CommandAfterArguments { .. } => ErrorKind::InvalidArgument,
            Self::UnsupportedArguments { .. } | Self::TooManyArguments { .. } => {
                ErrorKind::UnsupportedArgument
            }
            Self::UnsupportedOptions { .. } | Self::TooManyOptions { .. } => {
                ErrorKind::UnsupportedOption
            }
            Self::UnknownOption { .. } | Self::OptionPrefixMismatch { .. } => {
                ErrorKind::InvalidOption
            }
            Self::StoreContract { .. } => ErrorKind::ServerError,
        }
    }
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors from registering descriptors in a command store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A descriptor with this id is already registered.
    #[error("duplicate command id: {id}")]
    DuplicateId {
        /// The id that was already taken.
        id: String,
    },
}

/// Errors from loading or saving parser configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_cover_taxonomy() {
        assert_eq!(ParseError::EmptyRequest.kind(), ErrorKind::InvalidRequest);
        assert_eq!(
            ParseError::InvalidOwner {
                id: "g".into(),
                owner: "x".into()
            }
            .kind(),
            ErrorKind::InvalidCommand
        );
        assert_eq!(
            ParseError::CommandAfterArguments { id: "g".into() }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ParseError::UnsupportedOptions { id: "copy".into() }.kind(),
            ErrorKind::UnsupportedOption
        );
        assert_eq!(
            ParseError::UnknownOption {
                id: "greet".into(),
                key: "nope".into()
            }
            .kind(),
            ErrorKind::InvalidOption
        );
        assert_eq!(
            ParseError::StoreContract { id: "greet".into() }.kind(),
            ErrorKind::ServerError
        );
    }

    #[test]
    fn test_messages_carry_parameters() {
        let err = ParseError::TooManyArguments {
            id: "copy".into(),
            declared: 2,
            parsed: 3,
        };
        assert_eq!(
            err.to_string(),
            "command `copy` accepts 2 argument(s), found 3"
        );
    }
}

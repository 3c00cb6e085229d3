//! Error types. Tree operations never fail; everything here comes from reading commands,
//! managing the named trees of a session, or loading settings.

use thiserror::Error;

/// A command line that could not be turned into a [`Command`][crate::session::Command].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("unknown command: '{0}'. Type 'help' for available commands.")]
    Unknown(String),

    /// A required argument is missing.
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        /// The command being parsed.
        command: String,
        /// What should have followed it.
        expected: &'static str,
    },

    /// An argument does not parse as a value of the session's element type.
    #[error("invalid value '{input}' for '{command}'")]
    InvalidValue {
        /// The command being parsed.
        command: String,
        /// The offending argument.
        input: String,
    },

    /// The duplicate flag of `insert` is not one of `0`, `1`, `true`, `false`.
    #[error("invalid duplicate flag '{0}', expected 0 or 1")]
    InvalidFlag(String),

    /// More arguments than the command takes.
    #[error("unexpected argument '{input}' for '{command}'")]
    Unexpected {
        /// The command being parsed.
        command: String,
        /// The first surplus argument.
        input: String,
    },
}

/// Errors raised while executing a command in a session.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The line was malformed.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// A tree command ran while no tree was selected.
    #[error("no tree selected, use 'use <name>' or 'create' first")]
    NoTreeSelected,

    /// `create` named a tree that already exists.
    #[error("tree '{0}' already exists")]
    TreeExists(String),

    /// `use` or `remove` named a tree that doesn't exist.
    #[error("tree '{0}' not found")]
    TreeNotFound(String),
}

/// Top-level error for the playground. Failed commands are not among them: the interactive loop
/// reports a [`SessionError`] and reads the next line.
#[derive(Error, Debug)]
pub enum Error {
    /// Settings could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A setting was loaded but is out of range.
    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// The setting's key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playground operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Driver errors.

use gambit_core::NotationError;

/// Errors that can occur while reading and parsing driver commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A command was given without its required argument.
    #[error("{command} needs {expected}")]
    MissingArgument {
        /// The command word.
        command: &'static str,
        /// Description of the missing argument.
        expected: &'static str,
    },

    /// A square, move, or position string failed to parse.
    #[error("{source}")]
    Notation {
        /// The underlying notation error.
        #[from]
        source: NotationError,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name given.
        name: String,
    },

    /// `set` gave a value the option does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

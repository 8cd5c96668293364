// Our basic error type.

use std::{error, result};

use thiserror::Error;

/// Our standard result type.
pub type Result<T, E = Error> = result::Result<T, E>;

/// Our standard error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A macro we were explicitly asked for does not exist. Batch runs report
    /// this as a warning instead, and never return it.
    #[error("could not find macro {name}")]
    MacroNotFound { name: String },

    /// An error with extra context, usually a file path.
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },

    /// An unknown error occurred.
    #[error(transparent)]
    Other(Box<dyn error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Create a new `Error::MacroNotFound`.
    pub fn macro_not_found(name: impl Into<String>) -> Self {
        Error::MacroNotFound { name: name.into() }
    }

    /// Create a new `Error::Other` from an error value.
    pub fn other<E>(e: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        Error::Other(Box::<E>::new(e))
    }

    /// Emit this error to stderr, followed by its chain of causes.
    pub fn emit(&self) {
        eprintln!("ERROR: {}", self);
        let mut next = error::Error::source(self);
        while let Some(source) = next {
            eprintln!("  caused by: {}", source);
            next = source.source();
        }
    }
}

/// Format an error message.
macro_rules! format_err {
    ($($arg:tt)*) => {
        $crate::errors::Error::Other(format!($($arg)*).into())
    };
}

// A trick to make `format_err!` accessible from within this crate.
pub(crate) use format_err;

/// Wrap errors from `std::io`, `csv` and `regex` with a message saying what
/// we were doing, usually naming the macro file, plan file or output file
/// involved. The original error is kept as the source, and
/// [`Error::emit`] prints it as a `caused by:` line.
pub trait Context<T, E>: Sized {
    /// Like [`Context::context`], but only builds the message on failure.
    /// Use this when the message formats a path.
    fn with_context<S, F>(self, context_fn: F) -> Result<T>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        self.context(context_fn())
    }

    /// Wrap an error with a fixed message.
    fn context<S>(self, context: S) -> Result<T>
    where
        S: Into<String>;
}

impl<T, E> Context<T, E> for Result<T, E>
where
    E: error::Error + Send + Sync + 'static,
{
    fn context<S>(self, context: S) -> Result<T>
    where
        S: Into<String>,
    {
        self.map_err(|e| Error::Context {
            context: context.into(),
            source: Box::new(Error::other(e)),
        })
    }
}

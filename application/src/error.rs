//! [`Error`]-related definitions.

use config::ConfigError;
use derive_more::{Display, Error as StdError, From};
use service::infra::database;
use tracerr::{Trace, Traced};

/// Error of running the application.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Config`] cannot be loaded.
    ///
    /// [`Config`]: crate::Config
    #[display("failed to load `Config`: {_0}")]
    Config(ConfigError),

    /// Listing store cannot be loaded or queried.
    #[display("listing store failed: {_0}")]
    Store(Traced<database::Error>),

    /// Requested page cannot be cut.
    #[display("page {page} of {per_page} listings is out of range")]
    #[from(ignore)]
    Pagination {
        /// Requested 1-based page number.
        page: usize,

        /// Requested number of listings per page.
        per_page: usize,
    },

    /// Output cannot be rendered.
    #[display("failed to render output: {_0}")]
    Output(serde_json::Error),
}

impl Error {
    /// Returns [`Trace`] of this [`Error`], if it has one.
    #[must_use]
    pub fn trace(&self) -> Option<&Trace> {
        match self {
            Self::Store(e) => Some(e.trace()),
            Self::Config(_) | Self::Pagination { .. } | Self::Output(_) => None,
        }
    }
}

//! Application provides CLI for searching listings via the [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod args;
pub mod config;
pub mod error;
pub mod output;

use common::pagination::Arguments;
use service::{query, Query as _};
// Used in binary.
use tokio as _;
use tracing_subscriber as _;

pub use self::{args::Args, config::Config, error::Error};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::Memory>;

/// Executes the provided [`args::Command`] and renders its result as JSON.
///
/// Omitted page size and carousel limit are taken from the provided
/// [`config::Search`].
///
/// # Errors
///
/// If the requested page is out of range, or the [`Service`] fails.
pub async fn execute(
    service: &Service,
    command: args::Command,
    search: config::Search,
) -> Result<String, Error> {
    match command {
        args::Command::Search {
            filter,
            page,
            per_page,
        } => {
            let per_page = per_page.unwrap_or(search.per_page);
            let arguments = Arguments::new(page, per_page)
                .ok_or(Error::Pagination { page, per_page })?;

            let page = service
                .execute(query::listings::Search {
                    criteria: filter.into(),
                    arguments,
                })
                .await?;

            Ok(output::render(&output::Page::from(&page))?)
        }
        args::Command::Featured { filter, limit } => {
            let featured = service
                .execute(query::listings::Featured {
                    criteria: filter.into(),
                    limit: limit.unwrap_or(search.featured_limit),
                })
                .await?;

            Ok(output::render(&output::Featured::from(featured.as_slice()))?)
        }
    }
}

#![deny(clippy::all)]
#![deny(clippy::pedantic)]

//! Fluent filesystem assertions for tests.
//!
//! Bind a [`FileInspector`] to a subject path (resolved against an explicit
//! base directory), then chain assertions about its existence, kind, or
//! content. Each failed check raises an [`InspectError`] carrying the message
//! plus `actual`/`expected` diagnostics for the test runner to diff.
//!
//! ```no_run
//! use inspectfs::FileInspector;
//!
//! # fn main() -> Result<(), inspectfs::InspectError> {
//! FileInspector::new(env!("CARGO_MANIFEST_DIR"), "testdata/config.toml")
//!     .is_file()?
//!     .contains("[package]")?;
//! # Ok(())
//! # }
//! ```

mod error;
mod inspect;
mod kind;
mod resolve;
#[cfg(test)]
mod test;

pub use error::InspectError;
pub use inspect::{Encoding, FileInspector};
pub use kind::{classify, FileKind};
pub use resolve::resolve;

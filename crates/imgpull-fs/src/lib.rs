//! Filesystem primitives for placing downloaded images.
//!
//! - [`is_regular_file`] - existence probe used to skip finished work
//! - [`ensure_dir`] - idempotent recursive directory creation
//! - [`atomic_write`] - temp-file-and-rename placement

mod error;
mod probe;
mod write;

pub use error::{Error, Result};
pub use probe::is_regular_file;
pub use write::{Options, atomic_write, ensure_dir};

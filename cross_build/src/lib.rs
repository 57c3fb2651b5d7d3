//! Library facade for the `cross-build` entry point so integration tests can
//! reuse flag resolution and rendering.

pub mod error;
pub mod resolve;

pub use resolve::{PROGRAM, resolve, write_flags};

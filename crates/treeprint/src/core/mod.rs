//! Core building blocks shared by the tree engine
//!
//! Errors, configuration types, the line canvas, parser helpers and logging
//! setup live here; the tree-specific stages live in [`crate::tree`].

mod canvas;
pub mod chumsky_utils;
mod error;
pub mod logging;
mod types;

pub use canvas::*;
pub use error::*;
pub use logging::*;
pub use types::*;

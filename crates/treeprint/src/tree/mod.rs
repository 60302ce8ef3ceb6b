//! Binary tree layout engine
//!
//! Stages, in the order the printer runs them:
//!
//! 1. [`arena`]: flatten the owned tree into an index-addressed arena
//! 2. [`levels`]: assign depths in symmetric order, validating keys
//! 3. [`layout`]: check the height and compute a start margin per node
//! 4. [`renderer`]: draw node lines and edge lines breadth-first
//!
//! [`parser`] turns textual notations into [`Node`] trees and [`TreePrinter`]
//! wires the stages together.

pub mod arena;
pub mod layout;
pub mod levels;
mod node;
pub mod parser;
mod printer;
pub mod renderer;

pub use arena::{NodeId, TreeArena};
pub use layout::TreeLayout;
pub use levels::{assign_levels, LevelMap};
pub use node::Node;
pub use parser::{TreeNotationParser, TreeSyntax};
pub use printer::{TreePrinter, TreeStats};
pub use renderer::TreeRenderer;

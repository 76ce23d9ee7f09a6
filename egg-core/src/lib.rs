//! Parser and tree-walking evaluator for Egg, a tiny expression language in
//! which everything is a literal, a word or an application.
//!
//! ```
//! let value = egg_core::interpreter::run("if(<(1, 2), \"smaller\", \"larger\")")?;
//!
//! assert_eq!(value.to_string(), "smaller");
//! # Ok::<(), egg_core::utils::prelude::EggError>(())
//! ```

pub mod lexer;
pub mod parser;
pub mod environment;
pub mod eval;
pub mod interpreter;
pub mod utils;

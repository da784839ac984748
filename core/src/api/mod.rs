//! Public API for the lispy calculator.
//!
//! # Example
//!
//! ```
//! use lispy_core::api::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let result = engine.run("(- 10 1 2)").unwrap();
//! assert_eq!(result.as_number(), Some(7));
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::Engine;
pub use error::{Diagnostic, Error, Severity};
pub use options::{EngineOptions, ExecutionOptions, ParseOptions};

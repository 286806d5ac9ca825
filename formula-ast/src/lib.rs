//! Node model of the expression tree.
//!
//! A parser builds [`Node`]s from a [`NodeKind`] and the raw lexical text, converting the text to a
//! typed [`NodeValue`] on construction. Evaluators read the tree through [`Node::visit`] and the
//! composite accessors; rewriting passes restructure it with [`Node::transform`].

mod convert;
mod display;
pub mod error;
pub mod kind;
pub mod node;
pub mod visitor;

pub use error::{ConversionError, ParseFailure, PreconditionViolation};
pub use formula_symbols as symbols;
pub use kind::{NodeKind, ValueType};
pub use node::{FromNodeValue, Node, NodeValue};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub(crate) mod test_utils {
    /// Installs a `tracing` subscriber honoring `RUST_LOG`, defaulting to `trace`.
    pub fn init_test_logging() {
        use tracing_subscriber::{fmt, EnvFilter};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}

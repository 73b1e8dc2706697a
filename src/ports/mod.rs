// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! for the two external collaborators of the binding pipeline: the environment
//! store and the validation/transformation rule engine. Concrete implementations
//! live in the adapters layer.

pub mod rules;
pub mod store;

// Re-export commonly used types
pub use rules::RuleEngine;
pub use store::EnvStore;

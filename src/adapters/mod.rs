// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing store and rule engine implementations.
//!
//! This module contains concrete implementations of the ports: environment
//! stores (the real process environment and an in-memory substitute) and the
//! built-in rule engine.

pub mod memory_env;
pub mod process_env;
pub mod standard_rules;

// Re-export adapters
pub use memory_env::MemoryEnv;
pub use process_env::ProcessEnv;
pub use standard_rules::StandardRuleEngine;

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the loader and binder.
//!
//! This module contains the two components callers interact with: the env file
//! loader, which seeds an environment store, and the binder, which populates and
//! validates a record from that store.

pub mod binder;
pub mod loader;

// Re-export commonly used types
pub use binder::{EnvBinder, EnvBinderBuilder};
pub use loader::EnvFileLoader;

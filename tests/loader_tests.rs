// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for env file loading.
//!
//! These tests drive the loader through both the in-memory store and the real
//! process environment.

mod common;

use common::{write_env_file, EnvGuard};
use envbind::adapters::MemoryEnv;
use envbind::domain::EnvError;
use envbind::prelude::EnvStore;
use envbind::service::EnvFileLoader;
use std::sync::Arc;

#[test]
fn test_load_into_memory_store() {
    let file = write_env_file(
        "# application settings\n\
         HOST=example.com\n\
         ADMIN_EMAIL=admin@example.com\n\
         \n\
         CODE=abc\n",
    );

    let store = Arc::new(MemoryEnv::new());
    let loader = EnvFileLoader::with_store(Arc::clone(&store));

    let applied = loader.load(file.path()).unwrap();

    assert_eq!(applied, 3);
    assert_eq!(store.get_str("HOST").as_deref(), Some("example.com"));
    assert_eq!(
        store.get_str("ADMIN_EMAIL").as_deref(),
        Some("admin@example.com")
    );
    assert_eq!(store.get_str("CODE").as_deref(), Some("abc"));
}

#[test]
fn test_load_into_process_environment() {
    let mut guard = EnvGuard::new();
    guard.unset("ENVBIND_IT_HOST");

    let file = write_env_file("ENVBIND_IT_HOST=example.com\n");
    envbind::load_env_file(file.path()).unwrap();

    assert_eq!(
        std::env::var("ENVBIND_IT_HOST").as_deref(),
        Ok("example.com")
    );
}

#[test]
fn test_repeated_loads_are_cumulative() {
    let first = write_env_file("A=1\nB=2\n");
    let second = write_env_file("B=override\nC=3\n");

    let store = Arc::new(MemoryEnv::new());
    let loader = EnvFileLoader::with_store(Arc::clone(&store));

    loader.load(first.path()).unwrap();
    loader.load(second.path()).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get_str("A").as_deref(), Some("1"));
    assert_eq!(store.get_str("B").as_deref(), Some("override"));
    assert_eq!(store.get_str("C").as_deref(), Some("3"));
}

#[test]
fn test_bad_line_reports_position_and_keeps_prior_entries() {
    let file = write_env_file("GOOD=1\nbad line without separator\nNEVER=2\n");

    let store = Arc::new(MemoryEnv::new());
    let loader = EnvFileLoader::with_store(Arc::clone(&store));

    let err = loader.load(file.path()).unwrap_err();
    match err {
        EnvError::BadLine { line, content, .. } => {
            assert_eq!(line, 2);
            assert_eq!(content, "bad line without separator");
        }
        other => panic!("expected BadLine, got {:?}", other),
    }

    assert_eq!(store.get_str("GOOD").as_deref(), Some("1"));
    assert!(store.get_str("NEVER").is_none());
}

#[test]
fn test_missing_file_is_open_error() {
    let loader = EnvFileLoader::with_store(MemoryEnv::new());
    let err = loader.load("/does/not/exist/.env").unwrap_err();
    assert!(matches!(err, EnvError::FileOpen { .. }));
    assert!(err.to_string().contains("/does/not/exist/.env"));
}

#[test]
fn test_values_may_contain_equals_and_hash() {
    let file = write_env_file("QUERY=a=1&b=2\nCOLOR=#ff00ff\n");

    let store = Arc::new(MemoryEnv::new());
    let loader = EnvFileLoader::with_store(Arc::clone(&store));
    loader.load(file.path()).unwrap();

    assert_eq!(store.get_str("QUERY").as_deref(), Some("a=1&b=2"));
    // '#' only comments out a line when it is the first character
    assert_eq!(store.get_str("COLOR").as_deref(), Some("#ff00ff"));
}

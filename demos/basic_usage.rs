// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage of the envbind crate.
//!
//! This example demonstrates:
//! - Loading a `KEY=VALUE` file into the process environment
//! - Describing a record's environment bindings with field descriptors
//! - Binding environment values onto the record and validating it
//! - Inspecting per-field validation failures
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use envbind::prelude::*;

/// Application settings bound from the environment.
#[derive(Debug, Default)]
struct Settings {
    host: String,
    admin_email: String,
    code: String,
}

impl EnvRecord for Settings {
    fn field_specs(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("host")
                .env("DEMO_HOST")
                .validators("required,minLength:3,maxLength:50"),
            FieldSpec::new("admin_email")
                .env("DEMO_ADMIN_EMAIL")
                .validators("email"),
            FieldSpec::new("code")
                .env("DEMO_CODE")
                .transformers("uppercase"),
        ]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "host" => Some(&self.host),
            "admin_email" => Some(&self.admin_email),
            "code" => Some(&self.code),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "host" => Some(&mut self.host),
            "admin_email" => Some(&mut self.admin_email),
            "code" => Some(&mut self.code),
            _ => None,
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    println!("=== envbind Basic Usage Example ===\n");

    // Example 1: Load a KEY=VALUE file into the process environment
    println!("--- Example 1: Load an env file ---");
    let path = std::env::temp_dir().join("envbind_basic_usage.env");
    std::fs::write(
        &path,
        "# demo settings\n\
         DEMO_HOST = demo.example.com\n\
         DEMO_ADMIN_EMAIL = admin@example.com\n\
         \n\
         DEMO_CODE = abc-123\n",
    )?;
    let loader = EnvFileLoader::new();
    let applied = loader.load(&path)?;
    println!("✓ Applied {} assignments from {}\n", applied, path.display());

    // Example 2: Bind the environment onto a record and validate it
    println!("--- Example 2: Bind and validate ---");
    let mut settings = Settings::default();
    validate_env(&mut settings)?;
    println!("✓ host:        {}", settings.host);
    println!("✓ admin_email: {}", settings.admin_email);
    println!("✓ code:        {} (uppercased by the rule engine)\n", settings.code);

    // Example 3: Validation failures are reported per field
    println!("--- Example 3: Validation failures ---");
    let mut values = std::collections::HashMap::new();
    values.insert("DEMO_ADMIN_EMAIL".to_string(), "not-an-email".to_string());
    let store = MemoryEnv::with_values(values);
    let binder = EnvBinder::builder().store(store).build();
    let mut incomplete = Settings::default();
    match binder.bind_and_validate(&mut incomplete) {
        Err(EnvError::Validation(failures)) => {
            for failure in failures.iter() {
                println!(
                    "✗ {}: rule '{}' failed: {}",
                    failure.field, failure.rule, failure.reason
                );
            }
        }
        other => println!("unexpected outcome: {:?}", other),
    }

    std::fs::remove_file(&path)?;
    println!("\n=== Example Complete ===");
    Ok(())
}

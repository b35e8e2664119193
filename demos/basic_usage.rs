// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the hexenv crate.
//!
//! This example demonstrates:
//! - Loading `.env` files in order, the first definition winning
//! - Variable substitution against earlier keys and the environment
//! - Inferred and requested types
//! - Decrypting `ENC(...)` values
//! - Reading the whole store at once
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use hexenv::prelude::*;
use std::fs;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== hexenv: Basic Usage ===\n");

    // Lay out a small project in a temporary directory
    let project = tempfile::TempDir::new()?;
    fs::write(project.path().join(".root"), "")?;
    fs::write(
        project.path().join(".env.local"),
        "DB_HOST=localhost\nDEBUG=True\n",
    )?;
    fs::write(
        project.path().join(".env"),
        "# shared settings\n\
         DB_HOST=db.internal\n\
         DB_PORT=5432\n\
         DB_URL=postgres://${DB_HOST}:$DB_PORT/app\n\
         WORKERS=[api, jobs, mailer]\n\
         LIMITS={'cpu': 2, 'memory': '512Mi'}\n\
         DB_PASSWORD=ENC(czNjcjN0LXBhc3N3b3Jk)\n",
    )?;

    let store = EnvStore::builder()
        .with_file(".env.local")
        .root_markers([".root"])
        .start_dir(project.path())
        .try_build()?;

    println!("Loaded {} keys from {} files.\n", store.len(), store.file_paths().len());

    println!("--- Example 1: Precedence and Substitution ---");
    println!("DB_HOST = {}", store.get_value("DB_HOST", None, None)?);
    println!("DB_URL  = {}", store.get_value("DB_URL", None, None)?);

    println!("\n--- Example 2: Inferred Types ---");
    for key in ["DB_PORT", "DEBUG", "WORKERS", "LIMITS"] {
        let value = store.get_value(key, None, None)?;
        println!("{:<8} {:<6} {}", key, value.type_name(), value);
    }

    println!("\n--- Example 3: Requested Types and Defaults ---");
    let port = store.get_value("DB_PORT", Some("str"), None)?;
    println!("DB_PORT as str: {:?}", port.as_str());
    let timeout = store.get_value("TIMEOUT", Some("float"), Some("30.5"))?;
    println!("TIMEOUT (default): {}", timeout);
    match store.get_value("DB_HOST", Some("int"), None) {
        Ok(value) => println!("unexpected: {}", value),
        Err(e) => println!("DB_HOST as int fails: {}", e),
    }

    println!("\n--- Example 4: Encrypted Values ---");
    let password = store.get_encrypted_value("DB_PASSWORD", Some("str"), None, "")?;
    println!("DB_PASSWORD decrypted ({} chars)", password.to_string().len());

    println!("\n--- Example 5: Everything at Once ---");
    let resolved = store.get_all_resolved()?;
    let mut keys: Vec<_> = resolved.values.keys().collect();
    keys.sort();
    for key in keys {
        println!("{} = {}", key, resolved.values[key]);
    }
    if let Some(e) = &resolved.last_error {
        println!("some keys failed ({:?}): {}", resolved.failed, e);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

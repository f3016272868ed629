//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `doit_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe validating core crate wiring independently from any UI host.
    println!("doit_core version={}", doit_core::core_version());
    println!(
        "doit_core schema_version={}",
        doit_core::storage::migrations::latest_version()
    );
}

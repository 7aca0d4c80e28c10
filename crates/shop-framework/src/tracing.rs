//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole shop with the
//! `tracing` crate. Levels are controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # store lifecycle, plugin registration
//! RUST_LOG=debug cargo run     # payloads, searches, rendered templates
//! ```
//!
//! The compact format hides the module path (`with_target(false)`); store actors log
//! their `entity_type` as a field instead.

/// Initializes the global tracing subscriber. Call once from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

// === PUBLIC CONTRACT ===
// Only the contract module is meant for other crates to consume.
pub mod contract;

pub use contract::{client, error, model};

// === INTERNAL MODULES ===
// Exposed for the composition root and the test suites; external consumers
// should stick to `contract`.
pub mod api;
pub mod auth;
pub mod domain;
pub mod gateways;
pub mod infra;

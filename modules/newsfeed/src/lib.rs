// === PUBLIC CONTRACT ===
pub mod contract;

pub use contract::{error, model};

// === INTERNAL MODULES ===
// Exposed for the composition root and the test suites.
pub mod api;
pub mod domain;

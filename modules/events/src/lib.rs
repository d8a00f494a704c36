// === PUBLIC CONTRACT ===
// Models, errors and the change-observer channel other crates consume.
pub mod contract;

pub use contract::{error, model, observer};

// === INTERNAL MODULES ===
// Exposed for the composition root and the test suites; external consumers
// should stick to `contract`.
pub mod api;
pub mod domain;
pub mod infra;

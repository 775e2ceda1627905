//! Shared client-side state modules.
//!
//! State is split by domain (`session`, `ui`) and provided to components
//! as `RwSignal` contexts from the root `App`.

pub mod session;
pub mod ui;

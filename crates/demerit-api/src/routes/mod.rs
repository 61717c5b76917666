//! # Route Modules
//!
//! One module per resource. Each module exposes a `router()` returning a
//! `Router<AppState>` that the application assembly in `lib.rs` merges.

pub mod violations;

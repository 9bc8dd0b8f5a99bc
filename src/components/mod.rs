//! Components - Reusable UI Components
//!
//! Presentational building blocks. Only `RemoteImage` does any I/O, and it
//! hands that to the image loader service.

pub mod composite;
pub mod layout;
pub mod primitives;

//! Primitive Components
//!
//! Basic building blocks: the opacity-feedback touchable and the remote image.

pub mod remote_image;
pub mod touchable;

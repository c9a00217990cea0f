//! WebGL backend for glimmer.
//!
//! This crate provides a [glimmer] backend for [WebGL].
//!
//! [glimmer]: https://crates.io/crates/glimmer
//! [WebGL]: https://www.khronos.org/webgl

pub mod webgl2;

pub use crate::webgl2::{StateQueryError, WebGL2};

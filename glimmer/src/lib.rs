//! # A small retained-mode shape registry
//!
//! glimmer keeps a list of 2D shapes resident on the GPU and replays their draw calls, frame after
//! frame, against a rendering device. Geometry is uploaded exactly once, when a shape is created;
//! rendering a frame never re-uploads anything.
//!
//! # Architecture
//!
//! The crate is split the same way as its backend crates expect it to be:
//!
//! - The [`backend`] module defines the capability set a rendering device must provide: buffers,
//!   vertex arrays, shader programs and a framebuffer to clear. Backend crates (such as
//!   glimmer-webgl) implement those traits for their concrete device type. By convention, the
//!   type variable `B` (for backend) is used everywhere a backend is expected.
//! - [`shape::Shape`] owns a mesh and its GPU resources. Resources are released when the shape is
//!   dropped.
//! - [`triangle`] is a geometry factory producing the only shape kind shipped for now.
//! - [`scene::Scene`] owns an ordered list of shapes and renders them in insertion order after
//!   setting the viewport and clearing the target.
//!
//! The device is always passed explicitly: nothing in this crate holds a hidden, process-wide
//! handle to it.
//!
//! # Threading
//!
//! Everything here is single-threaded. Backends are expected to be `!Send` and `!Sync`, and every
//! operation runs to completion before returning.
//!
//! # Error handling
//!
//! Construction errors are reported synchronously and never leave a half-built shape behind:
//!
//! - [`shape::GeometryError`] when the vertex / index data is malformed. It is detected before any
//!   device call is made.
//! - [`resource::ResourceError`] when the device refuses to allocate a resource.
//! - [`shader::ShaderError`] when the program lacks the attribute or uniform the shape needs.
//!
//! Those are gathered in [`shape::ShapeError`].

#![deny(missing_docs)]

pub mod backend;
pub mod context;
pub mod resource;
pub mod scene;
pub mod shader;
pub mod shape;
pub mod triangle;
pub mod vertex;

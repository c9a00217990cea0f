//! Backend interfacing.
//!
//! A backend is the rendering device seen as an opaque capability set. Each concern lives in its
//! own trait so that backend crates can implement them separately; [`Backend`] gathers all of them
//! and is what the rest of the crate asks for.
//!
//! Resources are handed out as associated `*Repr` types. A representation owns its device
//! resource and must release it when dropped.

pub mod buffer;
pub mod framebuffer;
pub mod shader;
pub mod vertex_array;

/// Every capability a device needs to upload and draw shapes.
///
/// This trait is automatically implemented for any type implementing the four backend traits.
pub trait Backend:
  buffer::Buffer + framebuffer::Framebuffer + shader::Shader + vertex_array::VertexArray
{
}

impl<B> Backend for B where
  B: ?Sized + buffer::Buffer + framebuffer::Framebuffer + shader::Shader + vertex_array::VertexArray
{
}

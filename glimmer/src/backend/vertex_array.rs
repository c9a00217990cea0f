//! Vertex array backend interface.
//!
//! A vertex array records how the bytes of a vertex buffer map to a shader input. It is the only
//! place where a [`VertexLayout`] is interpreted.

use crate::backend::buffer::Buffer;
use crate::resource::ResourceError;
use crate::shape::Mode;
use crate::vertex::VertexLayout;

/// Vertex arrays and indexed draw submission.
pub trait VertexArray: Buffer {
  /// Backend representation of a vertex array. Dropping it releases the GPU object.
  type VertexArrayRepr;

  /// Create a vertex array reading `vertices` into the attribute at `location`, following
  /// `layout`.
  ///
  /// Implementations must leave both the vertex array and the vertex buffer unbound once done.
  fn new_vertex_array(
    &mut self,
    vertices: &Self::BufferRepr,
    location: u32,
    layout: &VertexLayout,
  ) -> Result<Self::VertexArrayRepr, ResourceError>;

  /// Bind a vertex array, or unbind the current one with `None`.
  fn bind_vertex_array(&mut self, vertex_array: Option<&Self::VertexArrayRepr>);

  /// Bind an index buffer, or unbind the current one with `None`.
  fn bind_index_buffer(&mut self, buffer: Option<&Self::BufferRepr>);

  /// Draw `count` indices from the bound index buffer, grouped as `mode` primitives.
  fn draw_elements(&mut self, mode: Mode, count: usize);
}

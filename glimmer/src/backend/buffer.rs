//! Buffer backend interface.

use crate::resource::ResourceError;

/// GPU buffers holding vertex and index data.
///
/// Buffers are immutable once created: the data is uploaded at creation and never touched again.
pub trait Buffer {
  /// Backend representation of a buffer. Dropping it releases the GPU buffer.
  type BufferRepr;

  /// Allocate a buffer and upload vertex data into it.
  fn new_vertex_buffer(&mut self, data: &[f32]) -> Result<Self::BufferRepr, ResourceError>;

  /// Allocate a buffer and upload index data into it.
  ///
  /// Implementations must not leave the buffer bound once the upload is done.
  fn new_index_buffer(&mut self, data: &[u32]) -> Result<Self::BufferRepr, ResourceError>;
}

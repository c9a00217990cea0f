//! WebGL2 buffer implementation.

use js_sys::{Float32Array, Object, Uint32Array};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{WebGl2RenderingContext, WebGlBuffer};

use crate::webgl2::state::{Bind, WebGL2State};
use crate::webgl2::WebGL2;
use glimmer::backend::buffer::Buffer as BufferBackend;
use glimmer::resource::{ResourceError, ResourceKind};

/// WebGL buffer.
///
/// The data lives on the GPU only; nothing is cached on the CPU side.
#[derive(Debug)]
pub struct Buffer {
  pub(crate) gl_buf: WebGlBuffer,
  kind: ResourceKind,
  len: usize,
  state: Rc<RefCell<WebGL2State>>,
}

impl Drop for Buffer {
  fn drop(&mut self) {
    let mut state = self.state.borrow_mut();

    state.unbind_buffer(&self.gl_buf);
    state.ctx.delete_buffer(Some(&self.gl_buf));

    log::trace!("deleted {} ({} items)", self.kind, self.len);
  }
}

impl Buffer {
  /// Kind of data this buffer holds.
  pub fn kind(&self) -> ResourceKind {
    self.kind
  }

  /// Number of items uploaded at creation.
  pub fn len(&self) -> usize {
    self.len
  }

  /// Whether the buffer was created empty.
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}

/// Create a buffer on `target` and fill it with `data`.
///
/// Element array buffers are attached to the currently bound vertex array, so the vertex array
/// binding is reset before touching them and the buffer is unbound once uploaded.
fn upload(
  webgl2: &mut WebGL2,
  kind: ResourceKind,
  len: usize,
  data: &Object,
) -> Result<Buffer, ResourceError> {
  let mut state = webgl2.state.borrow_mut();

  // generate a buffer and force binding the handle; this prevent side-effects from previous bound
  // resources to prevent binding the buffer
  let gl_buf = state
    .create_buffer()
    .ok_or_else(|| ResourceError::cannot_create(kind))?;

  let target = match kind {
    ResourceKind::IndexBuffer => {
      state.bind_vertex_array(None, Bind::Cached);
      state.bind_element_array_buffer(Some(&gl_buf), Bind::Forced);
      WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER
    }

    _ => {
      state.bind_array_buffer(Some(&gl_buf), Bind::Forced);
      WebGl2RenderingContext::ARRAY_BUFFER
    }
  };

  state
    .ctx
    .buffer_data_with_array_buffer_view(target, data, WebGl2RenderingContext::STATIC_DRAW);

  let error = state.ctx.get_error();

  match kind {
    ResourceKind::IndexBuffer => state.bind_element_array_buffer(None, Bind::Cached),
    _ => state.bind_array_buffer(None, Bind::Cached),
  }

  drop(state);

  let buffer = Buffer {
    gl_buf,
    kind,
    len,
    state: webgl2.state.clone(),
  };

  if error != WebGl2RenderingContext::NO_ERROR {
    // the buffer is released when dropped here
    return Err(ResourceError::cannot_upload(
      kind,
      format!("WebGL error 0x{:x}", error),
    ));
  }

  log::trace!("uploaded {} ({} items)", kind, len);

  Ok(buffer)
}

impl BufferBackend for WebGL2 {
  type BufferRepr = Buffer;

  fn new_vertex_buffer(&mut self, data: &[f32]) -> Result<Self::BufferRepr, ResourceError> {
    let array = Float32Array::from(data);
    upload(self, ResourceKind::VertexBuffer, data.len(), &array)
  }

  fn new_index_buffer(&mut self, data: &[u32]) -> Result<Self::BufferRepr, ResourceError> {
    let array = Uint32Array::from(data);
    upload(self, ResourceKind::IndexBuffer, data.len(), &array)
  }
}

//! Vertex arrays and draw submission.

use crate::webgl2::state::{Bind, WebGL2State};
use crate::webgl2::WebGL2;
use glimmer::backend::vertex_array::VertexArray as VertexArrayBackend;
use glimmer::resource::{ResourceError, ResourceKind};
use glimmer::shape::Mode;
use glimmer::vertex::VertexLayout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{WebGl2RenderingContext, WebGlVertexArrayObject};

use super::buffer::Buffer;

/// WebGL vertex array object.
#[derive(Debug)]
pub struct VertexArray {
  vao: WebGlVertexArrayObject,
  state: Rc<RefCell<WebGL2State>>,
}

impl Drop for VertexArray {
  fn drop(&mut self) {
    let mut state = self.state.borrow_mut();

    state.unbind_vertex_array(&self.vao);
    state.ctx.delete_vertex_array(Some(&self.vao));
  }
}

impl VertexArrayBackend for WebGL2 {
  type VertexArrayRepr = VertexArray;

  fn new_vertex_array(
    &mut self,
    vertices: &Buffer,
    location: u32,
    layout: &VertexLayout,
  ) -> Result<Self::VertexArrayRepr, ResourceError> {
    let mut state = self.state.borrow_mut();

    let vao = state
      .create_vertex_array()
      .ok_or_else(|| ResourceError::cannot_create(ResourceKind::VertexArray))?;

    state.bind_vertex_array(Some(&vao), Bind::Forced);
    state.bind_array_buffer(Some(&vertices.gl_buf), Bind::Forced);

    state.ctx.vertex_attrib_pointer_with_i32(
      location,
      layout.components() as i32,
      WebGl2RenderingContext::FLOAT,
      false,
      layout.stride() as i32,
      0,
    );
    state.ctx.enable_vertex_attrib_array(location);

    state.bind_vertex_array(None, Bind::Cached);
    state.bind_array_buffer(None, Bind::Cached);

    Ok(VertexArray {
      vao,
      state: self.state.clone(),
    })
  }

  fn bind_vertex_array(&mut self, vertex_array: Option<&Self::VertexArrayRepr>) {
    self
      .state
      .borrow_mut()
      .bind_vertex_array(vertex_array.map(|v| &v.vao), Bind::Cached);
  }

  fn bind_index_buffer(&mut self, buffer: Option<&Self::BufferRepr>) {
    self
      .state
      .borrow_mut()
      .bind_element_array_buffer(buffer.map(|b| &b.gl_buf), Bind::Cached);
  }

  fn draw_elements(&mut self, mode: Mode, count: usize) {
    self.state.borrow().ctx.draw_elements_with_i32(
      webgl_mode(mode),
      saturate(count),
      WebGl2RenderingContext::UNSIGNED_INT,
      0,
    );
  }
}

fn saturate(count: usize) -> i32 {
  i32::try_from(count).unwrap_or(i32::MAX)
}

fn webgl_mode(mode: Mode) -> u32 {
  match mode {
    Mode::Point => WebGl2RenderingContext::POINTS,
    Mode::Triangle => WebGl2RenderingContext::TRIANGLES,
  }
}

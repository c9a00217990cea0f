//! Default framebuffer support for WebGL2.

use crate::webgl2::WebGL2;
use glimmer::backend::framebuffer::Framebuffer;
use web_sys::WebGl2RenderingContext;

impl Framebuffer for WebGL2 {
  fn set_viewport(&mut self, viewport: [i32; 4]) {
    self.state.borrow_mut().set_viewport(viewport);
  }

  fn set_clear_color(&mut self, color: [f32; 4]) {
    self.state.borrow_mut().set_clear_color(color);
  }

  fn clear_color_buffer(&mut self) {
    self
      .state
      .borrow()
      .ctx
      .clear(WebGl2RenderingContext::COLOR_BUFFER_BIT);
  }
}

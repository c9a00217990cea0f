//! Framebuffer backend interface.
//!
//! Only the default framebuffer (the surface being drawn to) is supported.

/// Output region and clearing of the default framebuffer.
pub trait Framebuffer {
  /// Set the output region, as `[x, y, width, height]`.
  ///
  /// Values are passed through to the device as-is.
  fn set_viewport(&mut self, viewport: [i32; 4]);

  /// Set the color used by [`Framebuffer::clear_color_buffer`].
  fn set_clear_color(&mut self, color: [f32; 4]);

  /// Clear the color buffer with the current clear color.
  fn clear_color_buffer(&mut self);
}

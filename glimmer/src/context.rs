//! Graphics context.
//!
//! A graphics context is whatever a platform hands back once it has acquired a drawing surface: it
//! owns the backend and knows the size of the surface. This crate doesn’t create contexts; platform
//! crates such as glimmer-web-sys do.
//!
//! Contexts are expected to be `!Send` and `!Sync`: the backend they wrap must only ever be used
//! from the thread that created it.

/// Class of graphics context.
pub trait GraphicsContext {
  /// Backend driven by this context.
  type Backend: ?Sized;

  /// Access the backend.
  fn backend(&mut self) -> &mut Self::Backend;

  /// Current size of the drawing surface, in pixels, as `[width, height]`.
  fn size(&self) -> [u32; 2];
}

//! WebGL 2.0 backend support.

pub mod buffer;
pub mod framebuffer;
pub mod shader;
pub mod state;
pub mod vertex_array;

pub use crate::webgl2::state::StateQueryError;
use crate::webgl2::state::WebGL2State;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::WebGl2RenderingContext;

/// The WebGL2 backend.
///
/// Every resource created by the backend keeps a handle on its graphics state, so the backend
/// may be dropped before the shapes it created.
#[derive(Debug)]
pub struct WebGL2 {
  pub(crate) state: Rc<RefCell<WebGL2State>>,
}

impl WebGL2 {
  /// Wrap a WebGL2 context, querying its initial state.
  pub fn new(ctx: WebGl2RenderingContext) -> Result<Self, StateQueryError> {
    let mut state = WebGL2State::new(ctx)?;

    log::debug!(
      "WebGL2 backend on {} ({}), {}",
      state.get_renderer_name().unwrap_or_else(|| "unknown renderer".to_owned()),
      state.get_vendor_name().unwrap_or_else(|| "unknown vendor".to_owned()),
      state.get_glsl_version().unwrap_or_else(|| "unknown GLSL version".to_owned()),
    );

    Ok(WebGL2 {
      state: Rc::new(RefCell::new(state)),
    })
  }
}

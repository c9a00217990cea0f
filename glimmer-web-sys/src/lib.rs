//! web-sys platform for glimmer.
//!
//! This crate grabs a `<canvas>` element from the current document, acquires a WebGL2 context on
//! it and wraps it into a [`WebGL2`] backend.

use glimmer::context::GraphicsContext;
use glimmer_webgl::{StateQueryError, WebGL2};
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, WebGl2RenderingContext, Window};

/// web-sys errors that might occur while initializing and using the platform.
#[non_exhaustive]
#[derive(Debug)]
pub enum WebSysWebGL2SurfaceError {
  CannotGrabWindow,
  CannotGrabDocument,
  NotSuchCanvasElement(String),
  CannotGrabWebGL2Context,
  NoAvailableWebGL2Context,
  BackendCreationError(StateQueryError),
}

impl WebSysWebGL2SurfaceError {
  fn cannot_grab_window() -> Self {
    WebSysWebGL2SurfaceError::CannotGrabWindow
  }

  fn cannot_grab_document() -> Self {
    WebSysWebGL2SurfaceError::CannotGrabDocument
  }

  fn not_such_canvas_element(name: impl Into<String>) -> Self {
    WebSysWebGL2SurfaceError::NotSuchCanvasElement(name.into())
  }

  fn cannot_grab_webgl2_context() -> Self {
    WebSysWebGL2SurfaceError::CannotGrabWebGL2Context
  }

  fn no_available_webgl2_context() -> Self {
    WebSysWebGL2SurfaceError::NoAvailableWebGL2Context
  }
}

impl fmt::Display for WebSysWebGL2SurfaceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      WebSysWebGL2SurfaceError::CannotGrabWindow => f.write_str("cannot grab the window node"),
      WebSysWebGL2SurfaceError::CannotGrabDocument => f.write_str("cannot grab the document node"),
      WebSysWebGL2SurfaceError::NotSuchCanvasElement(ref name) => {
        write!(f, "cannot grab canvas named {}", name)
      }
      WebSysWebGL2SurfaceError::CannotGrabWebGL2Context => {
        f.write_str("cannot grab WebGL2 context")
      }
      WebSysWebGL2SurfaceError::NoAvailableWebGL2Context => {
        f.write_str("no available WebGL2 context")
      }
      WebSysWebGL2SurfaceError::BackendCreationError(ref e) => {
        write!(f, "cannot create WebGL2 backend: {}", e)
      }
    }
  }
}

impl std::error::Error for WebSysWebGL2SurfaceError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      WebSysWebGL2SurfaceError::BackendCreationError(e) => Some(e),
      _ => None,
    }
  }
}

impl From<StateQueryError> for WebSysWebGL2SurfaceError {
  fn from(e: StateQueryError) -> Self {
    WebSysWebGL2SurfaceError::BackendCreationError(e)
  }
}

/// web-sys surface for WebGL2.
///
/// The canvas keeps whatever size the page gave it; [`GraphicsContext::size`] reads it back on
/// every call.
#[derive(Debug)]
pub struct WebSysWebGL2Surface {
  pub window: Window,
  pub document: Document,
  pub canvas: HtmlCanvasElement,
  backend: WebGL2,
}

impl WebSysWebGL2Surface {
  pub fn new(canvas_name: &str) -> Result<Self, WebSysWebGL2SurfaceError> {
    let window = web_sys::window().ok_or_else(WebSysWebGL2SurfaceError::cannot_grab_window)?;

    let document = window
      .document()
      .ok_or_else(WebSysWebGL2SurfaceError::cannot_grab_document)?;

    let canvas = document
      .get_element_by_id(canvas_name)
      .ok_or_else(|| WebSysWebGL2SurfaceError::not_such_canvas_element(canvas_name))?
      .dyn_into::<HtmlCanvasElement>()
      .map_err(|_| WebSysWebGL2SurfaceError::not_such_canvas_element(canvas_name))?;

    let webgl2 = canvas
      .get_context("webgl2")
      .map_err(|_| WebSysWebGL2SurfaceError::cannot_grab_webgl2_context())?
      .ok_or_else(WebSysWebGL2SurfaceError::no_available_webgl2_context)?;
    let webgl2: &JsValue = webgl2.as_ref();
    let context: WebGl2RenderingContext = webgl2.clone().into();

    let backend = WebGL2::new(context)?;

    log::debug!(
      "WebGL2 surface acquired on canvas {} ({}×{})",
      canvas_name,
      canvas.width(),
      canvas.height()
    );

    Ok(Self {
      window,
      document,
      canvas,
      backend,
    })
  }
}

impl GraphicsContext for WebSysWebGL2Surface {
  type Backend = WebGL2;

  fn backend(&mut self) -> &mut Self::Backend {
    &mut self.backend
  }

  fn size(&self) -> [u32; 2] {
    [self.canvas.width(), self.canvas.height()]
  }
}

/// Acquire a WebGL2 surface on the canvas with the given `id`.
pub fn init_surface(canvas_name: &str) -> Result<WebSysWebGL2Surface, WebSysWebGL2SurfaceError> {
  WebSysWebGL2Surface::new(canvas_name)
}

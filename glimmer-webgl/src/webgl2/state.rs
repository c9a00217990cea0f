//! Graphics state.

use js_sys::{Float32Array, Int32Array};
use std::{fmt, marker::PhantomData};
use web_sys::{WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlVertexArrayObject};

/// The graphics state.
///
/// This type represents the current state of a given graphics context. It acts
/// as a forward-gate to the few WebGL2 features shapes need but adds a small cache layer over
/// it to prevent from issuing the same API call (with the same parameters).
#[derive(Debug)]
pub struct WebGL2State {
  _phantom: PhantomData<*const ()>, // !Send and !Sync

  // WebGL context
  pub(crate) ctx: WebGl2RenderingContext,

  // viewport
  viewport: [i32; 4],

  // clear buffers
  clear_color: [f32; 4],

  // array buffer
  bound_array_buffer: Option<WebGlBuffer>,
  // element buffer
  bound_element_array_buffer: Option<WebGlBuffer>,

  // vertex array
  bound_vertex_array: Option<WebGlVertexArrayObject>,

  // shader program
  current_program: Option<WebGlProgram>,

  // vendor name; cached when asked the first time and then re-used
  vendor_name: Option<String>,

  // renderer name; cached when asked the first time and then re-used
  renderer_name: Option<String>,

  // GLSL version; cached when asked the first time and then re-used
  glsl_version: Option<String>,
}

impl WebGL2State {
  /// Create a new `WebGL2State` by querying the initial state of `ctx`.
  pub(crate) fn new(ctx: WebGl2RenderingContext) -> Result<Self, StateQueryError> {
    Self::get_from_context(ctx)
  }

  fn get_from_context(mut ctx: WebGl2RenderingContext) -> Result<Self, StateQueryError> {
    let viewport = get_ctx_viewport(&mut ctx)?;
    let clear_color = get_ctx_clear_color(&mut ctx)?;

    Ok(WebGL2State {
      _phantom: PhantomData,
      ctx,
      viewport,
      clear_color,
      bound_array_buffer: None,
      bound_element_array_buffer: None,
      bound_vertex_array: None,
      current_program: None,
      vendor_name: None,
      renderer_name: None,
      glsl_version: None,
    })
  }

  pub(crate) fn create_buffer(&mut self) -> Option<WebGlBuffer> {
    self.ctx.create_buffer()
  }

  pub(crate) fn bind_array_buffer(&mut self, buffer: Option<&WebGlBuffer>, bind: Bind) {
    if bind == Bind::Forced || self.bound_array_buffer.as_ref() != buffer {
      self
        .ctx
        .bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, buffer);
      self.bound_array_buffer = buffer.cloned();
    }
  }

  pub(crate) fn bind_element_array_buffer(&mut self, buffer: Option<&WebGlBuffer>, bind: Bind) {
    if bind == Bind::Forced || self.bound_element_array_buffer.as_ref() != buffer {
      self
        .ctx
        .bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, buffer);
      self.bound_element_array_buffer = buffer.cloned();
    }
  }

  /// Forget about `buffer` if it’s currently bound, so that a later buffer reusing the same
  /// handle isn’t mistaken for a cached binding.
  pub(crate) fn unbind_buffer(&mut self, buffer: &WebGlBuffer) {
    if self.bound_array_buffer.as_ref() == Some(buffer) {
      self.bind_array_buffer(None, Bind::Cached);
    } else if self.bound_element_array_buffer.as_ref() == Some(buffer) {
      self.bind_element_array_buffer(None, Bind::Cached);
    }
  }

  pub(crate) fn create_vertex_array(&mut self) -> Option<WebGlVertexArrayObject> {
    self.ctx.create_vertex_array()
  }

  pub(crate) fn bind_vertex_array(&mut self, vao: Option<&WebGlVertexArrayObject>, bind: Bind) {
    if bind == Bind::Forced || self.bound_vertex_array.as_ref() != vao {
      self.ctx.bind_vertex_array(vao);
      self.bound_vertex_array = vao.cloned();

      // the element array binding is part of the vertex array state
      self.bound_element_array_buffer = None;
    }
  }

  pub(crate) fn unbind_vertex_array(&mut self, vao: &WebGlVertexArrayObject) {
    if self.bound_vertex_array.as_ref() == Some(vao) {
      self.bind_vertex_array(None, Bind::Cached);
    }
  }

  pub(crate) fn use_program(&mut self, handle: Option<&WebGlProgram>) {
    if self.current_program.as_ref() != handle {
      self.ctx.use_program(handle);
      self.current_program = handle.cloned();
    }
  }

  pub(crate) fn unuse_program(&mut self, handle: &WebGlProgram) {
    if self.current_program.as_ref() == Some(handle) {
      self.use_program(None);
    }
  }

  pub(crate) fn set_viewport(&mut self, viewport: [i32; 4]) {
    if self.viewport != viewport {
      self
        .ctx
        .viewport(viewport[0], viewport[1], viewport[2], viewport[3]);
      self.viewport = viewport;
    }
  }

  pub(crate) fn set_clear_color(&mut self, clear_color: [f32; 4]) {
    if self.clear_color != clear_color {
      self.ctx.clear_color(
        clear_color[0],
        clear_color[1],
        clear_color[2],
        clear_color[3],
      );
      self.clear_color = clear_color;
    }
  }

  pub(crate) fn get_vendor_name(&mut self) -> Option<String> {
    self.vendor_name.as_ref().cloned().or_else(|| {
      let name = self.ctx.get_webgl_param(WebGl2RenderingContext::VENDOR)?;
      self.vendor_name = Some(name);
      self.vendor_name.clone()
    })
  }

  pub(crate) fn get_renderer_name(&mut self) -> Option<String> {
    self.renderer_name.as_ref().cloned().or_else(|| {
      let name = self.ctx.get_webgl_param(WebGl2RenderingContext::RENDERER)?;
      self.renderer_name = Some(name);
      self.renderer_name.clone()
    })
  }

  pub(crate) fn get_glsl_version(&mut self) -> Option<String> {
    self.glsl_version.as_ref().cloned().or_else(|| {
      let version = self
        .ctx
        .get_webgl_param(WebGl2RenderingContext::SHADING_LANGUAGE_VERSION)?;
      self.glsl_version = Some(version);
      self.glsl_version.clone()
    })
  }
}

/// An error that might happen when the context is queried.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StateQueryError {
  /// Unknown viewport initial state.
  UnknownViewportInitialState,
  /// Unknown clear color initial state.
  UnknownClearColorInitialState,
}

impl fmt::Display for StateQueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StateQueryError::UnknownViewportInitialState => write!(f, "unknown viewport initial state"),

      StateQueryError::UnknownClearColorInitialState => {
        write!(f, "unknown clear color initial state")
      }
    }
  }
}

impl std::error::Error for StateQueryError {}

fn get_ctx_viewport(ctx: &mut WebGl2RenderingContext) -> Result<[i32; 4], StateQueryError> {
  let array: Int32Array = ctx
    .get_webgl_param(WebGl2RenderingContext::VIEWPORT)
    .ok_or(StateQueryError::UnknownViewportInitialState)?;

  if array.length() != 4 {
    return Err(StateQueryError::UnknownViewportInitialState);
  }

  let mut viewport = [0; 4];
  array.copy_to(&mut viewport);

  Ok(viewport)
}

fn get_ctx_clear_color(ctx: &mut WebGl2RenderingContext) -> Result<[f32; 4], StateQueryError> {
  let array: Float32Array = ctx
    .get_webgl_param(WebGl2RenderingContext::COLOR_CLEAR_VALUE)
    .ok_or(StateQueryError::UnknownClearColorInitialState)?;

  if array.length() != 4 {
    return Err(StateQueryError::UnknownClearColorInitialState);
  }

  let mut color = [0.0; 4];
  array.copy_to(&mut color);

  Ok(color)
}

/// Should the binding be cached or forced to the provided value?
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Bind {
  Forced,
  Cached,
}

// Workaround around the lack of implementor for [`TryFrom`] on [`JsValue`].
trait GetWebGLParam<T> {
  fn get_webgl_param(&mut self, param: u32) -> Option<T>;
}

macro_rules! impl_GetWebGLParam_array {
  ($($arr_ty:ty),*) => {
    $(
      impl GetWebGLParam<$arr_ty> for WebGl2RenderingContext {
        fn get_webgl_param(&mut self, param: u32) -> Option<$arr_ty> {
          self
            .get_parameter(param)
            .ok()
            .map(|a| a.into())
        }
      }
    )*
  }
}

impl_GetWebGLParam_array!(Int32Array, Float32Array);

impl GetWebGLParam<String> for WebGl2RenderingContext {
  fn get_webgl_param(&mut self, param: u32) -> Option<String> {
    self.get_parameter(param).ok().and_then(|x| x.as_string())
  }
}

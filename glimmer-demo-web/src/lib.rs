//! Web demo: a canvas filled with triangles, driven from JavaScript.
//!
//! Positions and side lengths are expressed in clip space: the canvas spans `[-1, 1]` on both
//! axes.

use glimmer::context::GraphicsContext as _;
use glimmer::scene::Scene;
use glimmer::shader::Program;
use glimmer_web_sys::WebSysWebGL2Surface;
use glimmer_webgl::WebGL2;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

const VS: &str = include_str!("shape-vs.glsl");
const FS: &str = include_str!("shape-fs.glsl");

fn js_error(e: impl std::fmt::Display) -> JsValue {
  JsValue::from_str(&e.to_string())
}

/// Main demo object.
///
/// This object will be passed around in JavaScript and will act as a bridge between the JavaScript
/// code and the Rust code.
#[wasm_bindgen]
pub struct Demo {
  scene: Scene<WebGL2>,
  program: Rc<Program<WebGL2>>,
  surface: WebSysWebGL2Surface,
}

#[wasm_bindgen]
impl Demo {
  /// Add a triangle centered on `(x, y)`.
  pub fn add_triangle(&mut self, x: f32, y: f32, side: f32) -> Result<(), JsValue> {
    self
      .scene
      .add_shape(self.surface.backend(), &self.program, [x, y], side)
      .map_err(js_error)
  }

  /// Remove every triangle.
  pub fn clear_triangles(&mut self) {
    self.scene.clear_shapes();
  }

  /// Render a frame. `width` and `height` are usually the canvas size.
  pub fn render(&mut self, width: u32, height: u32) {
    self.scene.render(self.surface.backend(), width, height);
  }

  /// Render a frame covering the whole canvas.
  pub fn render_canvas(&mut self) {
    let [width, height] = self.surface.size();
    self.render(width, height);
  }

  /// Number of triangles.
  pub fn len(&self) -> usize {
    self.scene.len()
  }

  pub fn is_empty(&self) -> bool {
    self.scene.is_empty()
  }
}

#[wasm_bindgen]
pub fn get_demo(canvas_name: &str) -> Result<Demo, JsValue> {
  wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
  console_error_panic_hook::set_once();

  log::info!("creating the WebGL2 context…");
  let mut surface = WebSysWebGL2Surface::new(canvas_name).map_err(js_error)?;

  let program = Program::from_strings(surface.backend(), VS, FS).map_err(js_error)?;

  Ok(Demo {
    scene: Scene::new(),
    program: Rc::new(program),
    surface,
  })
}

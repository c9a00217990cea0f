//! Scenes.
//!
//! A [`Scene`] owns an ordered list of [`Shape`]s. Rendering a frame sets the viewport, clears the
//! color buffer with the background color and then draws every shape in the order it was added.
//!
//! A scene only ever grows one shape at a time ([`Scene::add_shape`]) or loses all of them at once
//! ([`Scene::clear_shapes`]); shapes are never edited in place. The scene is the sole owner of its
//! shapes, so dropping them, by clearing or by dropping the scene, releases their GPU resources.

use crate::backend::Backend;
use crate::shader::Program;
use crate::shape::{Shape, ShapeError};
use crate::triangle::new_triangle;
use log::{debug, trace, warn};
use std::fmt;
use std::rc::Rc;

/// Default background color.
pub const DEFAULT_BACKGROUND: [f32; 4] = [0.1, 0.1, 0.1, 1.];

/// Default fill color of the shapes added with [`Scene::add_shape`].
pub const DEFAULT_FILL: [f32; 3] = [1., 0.5, 0.];

/// Scene options.
///
/// Feel free to look at the different methods available to tweak the options. You may want to start
/// with `default()` though.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
  background: [f32; 4],
  fill: [f32; 3],
}

impl Default for SceneConfig {
  /// Defaults:
  ///
  /// - `background` set to [`DEFAULT_BACKGROUND`].
  /// - `fill` set to [`DEFAULT_FILL`].
  fn default() -> Self {
    SceneConfig {
      background: DEFAULT_BACKGROUND,
      fill: DEFAULT_FILL,
    }
  }
}

impl SceneConfig {
  /// Color the target is cleared with at the start of every frame.
  #[inline]
  pub fn set_background(self, background: [f32; 4]) -> Self {
    SceneConfig { background, ..self }
  }

  /// Get the background color.
  #[inline]
  pub fn background(&self) -> [f32; 4] {
    self.background
  }

  /// Fill color given to shapes added with [`Scene::add_shape`].
  #[inline]
  pub fn set_fill(self, fill: [f32; 3]) -> Self {
    SceneConfig { fill, ..self }
  }

  /// Get the fill color.
  #[inline]
  pub fn fill(&self) -> [f32; 3] {
    self.fill
  }
}

/// An ordered list of shapes, drawn in insertion order.
pub struct Scene<B>
where
  B: ?Sized + Backend,
{
  shapes: Vec<Shape<B>>,
  config: SceneConfig,
}

impl<B> Scene<B>
where
  B: ?Sized + Backend,
{
  /// Create an empty scene with the default configuration.
  pub fn new() -> Self {
    Self::with_config(SceneConfig::default())
  }

  /// Create an empty scene.
  pub fn with_config(config: SceneConfig) -> Self {
    Scene {
      shapes: Vec::new(),
      config,
    }
  }

  /// Scene configuration.
  pub fn config(&self) -> &SceneConfig {
    &self.config
  }

  /// Number of shapes.
  pub fn len(&self) -> usize {
    self.shapes.len()
  }

  /// Whether the scene has no shape.
  pub fn is_empty(&self) -> bool {
    self.shapes.is_empty()
  }

  /// Shapes, in draw order.
  pub fn shapes(&self) -> &[Shape<B>] {
    &self.shapes
  }

  /// Set the output region to `(0, 0, width, height)`.
  ///
  /// Dimensions too large for the device are saturated; nothing else is checked.
  pub fn set_viewport(&self, backend: &mut B, width: u32, height: u32) {
    backend.set_viewport([0, 0, saturate(width), saturate(height)]);
  }

  /// Clear the color buffer with the background color.
  pub fn clear(&self, backend: &mut B) {
    backend.set_clear_color(self.config.background);
    backend.clear_color_buffer();
  }

  /// Create a triangle centered on `position` with the configured fill color and append it.
  ///
  /// On failure, the scene is left untouched.
  pub fn add_shape(
    &mut self,
    backend: &mut B,
    program: &Rc<Program<B>>,
    position: [f32; 2],
    side_length: f32,
  ) -> Result<(), ShapeError> {
    let shape = new_triangle(backend, program, position, self.config.fill, side_length)
      .map_err(|e| {
        warn!("cannot add triangle at {:?}: {}", position, e);
        e
      })?;

    self.push(shape);
    Ok(())
  }

  /// Append an already built shape.
  pub fn push(&mut self, shape: Shape<B>) {
    self.shapes.push(shape);
    debug!("scene now has {} shape(s)", self.shapes.len());
  }

  /// Drop every shape, releasing their resources.
  pub fn clear_shapes(&mut self) {
    debug!("clearing {} shape(s)", self.shapes.len());
    self.shapes.clear();
  }

  /// Render a frame: set the viewport, clear, then draw every shape in insertion order.
  pub fn render(&self, backend: &mut B, width: u32, height: u32) {
    trace!(
      "rendering {} shape(s) at {}×{}",
      self.shapes.len(),
      width,
      height
    );

    self.set_viewport(backend, width, height);
    self.clear(backend);

    for shape in &self.shapes {
      shape.render(backend);
    }
  }
}

impl<B> Default for Scene<B>
where
  B: ?Sized + Backend,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<B> fmt::Debug for Scene<B>
where
  B: ?Sized + Backend,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    f.debug_struct("Scene")
      .field("shapes", &self.shapes)
      .field("config", &self.config)
      .finish()
  }
}

fn saturate(dim: u32) -> i32 {
  i32::try_from(dim).unwrap_or(i32::MAX)
}

//! Equilateral triangles.
//!
//! The triangle is built around a center point. Its first vertex sits `side_length` below the
//! center; the two others sit above it, on each side, at the same distance from the center:
//!
//! - `(cx, cy - side_length)`
//! - `(cx + side_length · cos 30°, cy + side_length · sin 30°)`
//! - `(cx - side_length · cos 30°, cy + side_length · sin 30°)`
//!
//! The right vertex comes before the left one so that the vertices wind counter-clockwise (positive
//! signed area) in a y-up frame.

use crate::backend::Backend;
use crate::shader::Program;
use crate::shape::{GeometryError, Mode, Shape, ShapeDesc, ShapeError};
use crate::vertex::VertexLayout;
use std::f32::consts::FRAC_PI_6;
use std::rc::Rc;

/// Indices of a triangle.
pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

/// Compute the vertex positions of a triangle, as three `(x, y)` pairs.
pub fn triangle_vertices(center: [f32; 2], side_length: f32) -> [f32; 6] {
  let [cx, cy] = center;
  let dx = side_length * FRAC_PI_6.cos();
  let dy = side_length * FRAC_PI_6.sin();

  [cx, cy - side_length, cx + dx, cy + dy, cx - dx, cy + dy]
}

/// Compute the vertices and indices of a triangle.
pub fn triangle_geometry(center: [f32; 2], side_length: f32) -> ([f32; 6], [u32; 3]) {
  (triangle_vertices(center, side_length), TRIANGLE_INDICES)
}

/// Build the description of a triangle shape.
pub fn triangle_desc(
  center: [f32; 2],
  color: [f32; 3],
  side_length: f32,
) -> Result<ShapeDesc, GeometryError> {
  if !side_length.is_finite() || side_length <= 0. {
    return Err(GeometryError::InvalidSize(side_length));
  }

  let (vertices, indices) = triangle_geometry(center, side_length);

  Ok(ShapeDesc {
    vertices: vertices.to_vec(),
    indices: indices.to_vec(),
    color,
    mode: Mode::Triangle,
    element_count: TRIANGLE_INDICES.len(),
    layout: VertexLayout::position_2d(),
  })
}

/// Create a triangle shape and upload it.
pub fn new_triangle<B>(
  backend: &mut B,
  program: &Rc<Program<B>>,
  center: [f32; 2],
  color: [f32; 3],
  side_length: f32,
) -> Result<Shape<B>, ShapeError>
where
  B: ?Sized + Backend,
{
  let desc = triangle_desc(center, color, side_length)?;
  Shape::new(backend, program, desc)
}

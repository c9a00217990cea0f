//! GPU-resident shapes.
//!
//! A [`Shape`] is a static mesh (2D vertex positions, an index list, a fill color, a primitive
//! mode and the number of indices to draw) uploaded to the device once, when it is created, and
//! redrawn as many times as needed afterwards.
//!
//! A shape owns three device resources: a vertex buffer, an index buffer and a vertex array. They
//! are never shared with another shape and they are all released when the shape is dropped. The
//! geometry is checked before any of them is created, and a failure while creating one of them
//! releases the ones already created, so a shape is either fully built or not built at all.
//!
//! Shapes are produced by geometry factories, such as [`crate::triangle::new_triangle`], that fill
//! a [`ShapeDesc`] and hand it to [`Shape::new`].

use crate::backend::shader::Shader;
use crate::backend::vertex_array::VertexArray;
use crate::backend::Backend;
use crate::resource::ResourceError;
use crate::shader::{Program, ShaderError, COLOR_UNIFORM};
use crate::vertex::VertexLayout;
use log::debug;
use std::fmt;
use std::rc::Rc;

/// Primitive mode.
///
/// It tells how the index list is grouped into primitives.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
  /// Every index is a single, unconnected point.
  Point,
  /// Every three indices form a triangle.
  Triangle,
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      Mode::Point => f.write_str("points"),
      Mode::Triangle => f.write_str("triangles"),
    }
  }
}

/// Malformed geometry.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
  /// The number of vertex scalars is not a multiple of the layout’s component count.
  IncompleteVertex {
    /// Number of scalars provided.
    len: usize,
    /// Number of scalars per vertex.
    components: usize,
  },
  /// The index list is empty.
  NoIndices,
  /// The element count is zero.
  NoElements,
  /// The element count is greater than the number of indices.
  TooManyElements {
    /// Requested element count.
    element_count: usize,
    /// Number of indices available.
    index_count: usize,
  },
  /// An index points past the last vertex.
  IndexOutOfRange {
    /// The faulty index.
    index: u32,
    /// Number of vertices.
    vertex_count: usize,
  },
  /// A size parameter given to a geometry factory is not a finite, positive number.
  InvalidSize(f32),
}

impl fmt::Display for GeometryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      GeometryError::IncompleteVertex { len, components } => write!(
        f,
        "{} vertex scalars cannot be grouped by {}",
        len, components
      ),

      GeometryError::NoIndices => f.write_str("no indices"),

      GeometryError::NoElements => f.write_str("element count is zero"),

      GeometryError::TooManyElements {
        element_count,
        index_count,
      } => write!(
        f,
        "element count ({}) exceeds index count ({})",
        element_count, index_count
      ),

      GeometryError::IndexOutOfRange {
        index,
        vertex_count,
      } => write!(
        f,
        "index {} out of range ({} vertices)",
        index, vertex_count
      ),

      GeometryError::InvalidSize(size) => write!(f, "invalid size: {}", size),
    }
  }
}

impl std::error::Error for GeometryError {}

/// Errors that might occur while creating a [`Shape`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
  /// The vertex / index data is malformed. No device resource was created.
  InvalidGeometry(GeometryError),
  /// The device refused to create one of the shape’s resources.
  ResourceCreation(ResourceError),
  /// The program doesn’t expose the inputs the shape needs.
  Shader(ShaderError),
}

impl fmt::Display for ShapeError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ShapeError::InvalidGeometry(ref e) => write!(f, "invalid geometry: {}", e),
      ShapeError::ResourceCreation(ref e) => write!(f, "resource creation failure: {}", e),
      ShapeError::Shader(ref e) => write!(f, "shader error: {}", e),
    }
  }
}

impl std::error::Error for ShapeError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ShapeError::InvalidGeometry(e) => Some(e),
      ShapeError::ResourceCreation(e) => Some(e),
      ShapeError::Shader(e) => Some(e),
    }
  }
}

impl From<GeometryError> for ShapeError {
  fn from(e: GeometryError) -> Self {
    ShapeError::InvalidGeometry(e)
  }
}

impl From<ResourceError> for ShapeError {
  fn from(e: ResourceError) -> Self {
    ShapeError::ResourceCreation(e)
  }
}

impl From<ShaderError> for ShapeError {
  fn from(e: ShaderError) -> Self {
    ShapeError::Shader(e)
  }
}

/// Everything needed to build a [`Shape`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDesc {
  /// Vertex scalars, grouped following `layout`.
  pub vertices: Vec<f32>,
  /// Indices into the vertices.
  pub indices: Vec<u32>,
  /// Fill color, RGB in `[0, 1]`.
  pub color: [f32; 3],
  /// Primitive mode.
  pub mode: Mode,
  /// Number of indices submitted per draw.
  pub element_count: usize,
  /// Vertex layout; defaults to 2D positions.
  pub layout: VertexLayout,
}

impl ShapeDesc {
  /// Check the geometry invariants.
  pub fn validate(&self) -> Result<(), GeometryError> {
    let components = self.layout.components();
    let len = self.vertices.len();

    if len % components != 0 {
      return Err(GeometryError::IncompleteVertex { len, components });
    }

    if self.indices.is_empty() {
      return Err(GeometryError::NoIndices);
    }

    if self.element_count == 0 {
      return Err(GeometryError::NoElements);
    }

    if self.element_count > self.indices.len() {
      return Err(GeometryError::TooManyElements {
        element_count: self.element_count,
        index_count: self.indices.len(),
      });
    }

    let vertex_count = len / components;
    match self
      .indices
      .iter()
      .find(|&&index| index as usize >= vertex_count)
    {
      Some(&index) => Err(GeometryError::IndexOutOfRange {
        index,
        vertex_count,
      }),
      None => Ok(()),
    }
  }
}

/// A mesh living on the GPU.
pub struct Shape<B>
where
  B: ?Sized + Backend,
{
  vertices: Vec<f32>,
  indices: Vec<u32>,
  color: [f32; 3],
  mode: Mode,
  element_count: usize,
  program: Rc<Program<B>>,
  color_uniform: <B as Shader>::UniformRepr,
  // drop order matters: the vertex array goes before the buffers it references
  vertex_array: <B as VertexArray>::VertexArrayRepr,
  vertex_buffer: B::BufferRepr,
  index_buffer: B::BufferRepr,
}

impl<B> Shape<B>
where
  B: ?Sized + Backend,
{
  /// Upload a shape to the device.
  ///
  /// The geometry is validated first; nothing is allocated on the device if it is malformed.
  /// Then the vertex attribute and the color uniform are resolved in `program`, and finally the
  /// vertex buffer, the index buffer and the vertex array are created, in that order.
  pub fn new(
    backend: &mut B,
    program: &Rc<Program<B>>,
    desc: ShapeDesc,
  ) -> Result<Self, ShapeError> {
    desc.validate()?;

    let location = backend.attrib_location(&program.repr, desc.layout.name)?;
    let color_uniform = backend.uniform_location(&program.repr, COLOR_UNIFORM)?;

    let vertex_buffer = backend.new_vertex_buffer(&desc.vertices)?;
    let index_buffer = backend.new_index_buffer(&desc.indices)?;
    let vertex_array = backend.new_vertex_array(&vertex_buffer, location, &desc.layout)?;

    debug!(
      "uploaded shape: {} vertices, {} indices, drawing {} {}",
      desc.vertices.len() / desc.layout.components(),
      desc.indices.len(),
      desc.element_count,
      desc.mode
    );

    Ok(Shape {
      vertices: desc.vertices,
      indices: desc.indices,
      color: desc.color,
      mode: desc.mode,
      element_count: desc.element_count,
      program: program.clone(),
      color_uniform,
      vertex_array,
      vertex_buffer,
      index_buffer,
    })
  }

  /// Draw the shape.
  ///
  /// Every binding made here is undone before returning, so the device is left as it was found.
  pub fn render(&self, backend: &mut B) {
    backend.use_program(Some(&self.program.repr));
    backend.bind_vertex_array(Some(&self.vertex_array));
    backend.bind_index_buffer(Some(&self.index_buffer));

    backend.set_uniform3(&self.color_uniform, self.color);
    backend.draw_elements(self.mode, self.element_count);

    backend.bind_index_buffer(None);
    backend.bind_vertex_array(None);
    backend.use_program(None);
  }

  /// Vertex scalars.
  pub fn vertices(&self) -> &[f32] {
    &self.vertices
  }

  /// Indices.
  pub fn indices(&self) -> &[u32] {
    &self.indices
  }

  /// Fill color.
  pub fn color(&self) -> [f32; 3] {
    self.color
  }

  /// Primitive mode.
  pub fn mode(&self) -> Mode {
    self.mode
  }

  /// Number of indices submitted per draw.
  pub fn element_count(&self) -> usize {
    self.element_count
  }

  /// Program the shape is drawn with.
  pub fn program(&self) -> &Rc<Program<B>> {
    &self.program
  }
}

impl<B> Drop for Shape<B>
where
  B: ?Sized + Backend,
{
  fn drop(&mut self) {
    debug!("releasing shape ({} indices)", self.indices.len());
  }
}

impl<B> fmt::Debug for Shape<B>
where
  B: ?Sized + Backend,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    f.debug_struct("Shape")
      .field("vertices", &self.vertices)
      .field("indices", &self.indices)
      .field("color", &self.color)
      .field("mode", &self.mode)
      .field("element_count", &self.element_count)
      .finish()
  }
}

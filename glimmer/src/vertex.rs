//! Vertex layouts.
//!
//! Vertices are stored as a flat list of `f32` scalars. A [`VertexLayout`] tells the backend how
//! many scalars make one vertex and which shader input receives them. Shapes are 2D, so the
//! default layout is two components fed into the `position` attribute; a 3D or per-vertex-color
//! geometry would only need a different layout.

/// Name of the vertex attribute used by the default layout.
pub const POSITION_ATTRIB: &str = "position";

/// Dimension of a vertex attribute.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VertexAttribDim {
  /// 1D.
  Dim1,
  /// 2D.
  Dim2,
  /// 3D.
  Dim3,
  /// 4D.
  Dim4,
}

impl VertexAttribDim {
  /// Number of scalar components.
  pub fn components(self) -> usize {
    match self {
      VertexAttribDim::Dim1 => 1,
      VertexAttribDim::Dim2 => 2,
      VertexAttribDim::Dim3 => 3,
      VertexAttribDim::Dim4 => 4,
    }
  }
}

/// How a vertex buffer maps to a shader input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VertexLayout {
  /// Name of the vertex attribute in the shader.
  pub name: &'static str,
  /// Number of `f32` per vertex.
  pub dim: VertexAttribDim,
}

impl VertexLayout {
  /// Create a new layout.
  pub const fn new(name: &'static str, dim: VertexAttribDim) -> Self {
    VertexLayout { name, dim }
  }

  /// 2D positions fed to [`POSITION_ATTRIB`].
  pub const fn position_2d() -> Self {
    VertexLayout::new(POSITION_ATTRIB, VertexAttribDim::Dim2)
  }

  /// Number of `f32` per vertex.
  pub fn components(&self) -> usize {
    self.dim.components()
  }

  /// Size in bytes of a whole vertex.
  pub fn stride(&self) -> usize {
    self.components() * std::mem::size_of::<f32>()
  }
}

impl Default for VertexLayout {
  /// Defaults to [`VertexLayout::position_2d`].
  fn default() -> Self {
    VertexLayout::position_2d()
  }
}

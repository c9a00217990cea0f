//! Device resource errors.

use std::fmt;

/// Kind of device resource.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ResourceKind {
  /// Buffer holding vertex positions.
  VertexBuffer,
  /// Buffer holding indices.
  IndexBuffer,
  /// Vertex array object.
  VertexArray,
  /// Shader program.
  Program,
}

impl fmt::Display for ResourceKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ResourceKind::VertexBuffer => f.write_str("vertex buffer"),
      ResourceKind::IndexBuffer => f.write_str("index buffer"),
      ResourceKind::VertexArray => f.write_str("vertex array"),
      ResourceKind::Program => f.write_str("shader program"),
    }
  }
}

/// The device refused to allocate a resource.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResourceError {
  /// The resource couldn’t be created.
  CannotCreate(ResourceKind),
  /// The resource was created but the device rejected its data.
  CannotUpload(ResourceKind, String),
}

impl ResourceError {
  /// The resource couldn’t be created.
  pub fn cannot_create(kind: ResourceKind) -> Self {
    ResourceError::CannotCreate(kind)
  }

  /// The resource was created but the device rejected its data.
  pub fn cannot_upload(kind: ResourceKind, reason: impl Into<String>) -> Self {
    ResourceError::CannotUpload(kind, reason.into())
  }

  /// Kind of resource that failed.
  pub fn kind(&self) -> ResourceKind {
    match *self {
      ResourceError::CannotCreate(kind) | ResourceError::CannotUpload(kind, _) => kind,
    }
  }
}

impl fmt::Display for ResourceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ResourceError::CannotCreate(kind) => write!(f, "cannot create {}", kind),
      ResourceError::CannotUpload(kind, ref reason) => {
        write!(f, "cannot upload {}: {}", kind, reason)
      }
    }
  }
}

impl std::error::Error for ResourceError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(
      ResourceError::cannot_create(ResourceKind::IndexBuffer).to_string(),
      "cannot create index buffer"
    );
    assert_eq!(
      ResourceError::cannot_upload(ResourceKind::VertexBuffer, "out of memory").to_string(),
      "cannot upload vertex buffer: out of memory"
    );
  }

  #[test]
  fn kind() {
    assert_eq!(
      ResourceError::cannot_upload(ResourceKind::VertexArray, "lost").kind(),
      ResourceKind::VertexArray
    );
  }
}

//! Shader programs.
//!
//! A [`Program`] is a compiled and linked pair of vertex and fragment stages. Shapes only need two
//! things from it: the location of the vertex attribute described by their
//! [`VertexLayout`](crate::vertex::VertexLayout), and a 3-component color uniform named
//! [`COLOR_UNIFORM`]. Programs are shared between shapes through [`Rc`](std::rc::Rc).

use crate::backend::shader::Shader;
use std::fmt;

/// Name of the color uniform every shape pushes its fill color into.
pub const COLOR_UNIFORM: &str = "color";

/// A shader stage type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StageType {
  /// Vertex shader.
  VertexShader,
  /// Fragment shader.
  FragmentShader,
}

impl fmt::Display for StageType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageType::VertexShader => f.write_str("vertex shader"),
      StageType::FragmentShader => f.write_str("fragment shader"),
    }
  }
}

/// Errors related to shader programs and their inputs.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShaderError {
  /// The device couldn’t allocate a program or a stage.
  CreationFailed(String),
  /// A stage failed to compile. The `String` holds the compilation log.
  CompilationFailed(StageType, String),
  /// Program link failed. The `String` holds the link log.
  LinkFailed(String),
  /// The program has no active vertex attribute with this name.
  InactiveAttribute(String),
  /// The program has no active uniform with this name.
  InactiveUniform(String),
}

impl ShaderError {
  /// The device couldn’t allocate a program or a stage.
  pub fn creation_failed(reason: impl Into<String>) -> Self {
    ShaderError::CreationFailed(reason.into())
  }

  /// A stage failed to compile.
  pub fn compilation_failed(ty: StageType, log: impl Into<String>) -> Self {
    ShaderError::CompilationFailed(ty, log.into())
  }

  /// Program link failed.
  pub fn link_failed(log: impl Into<String>) -> Self {
    ShaderError::LinkFailed(log.into())
  }

  /// No active vertex attribute with this name.
  pub fn inactive_attribute(name: impl Into<String>) -> Self {
    ShaderError::InactiveAttribute(name.into())
  }

  /// No active uniform with this name.
  pub fn inactive_uniform(name: impl Into<String>) -> Self {
    ShaderError::InactiveUniform(name.into())
  }
}

impl fmt::Display for ShaderError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ShaderError::CreationFailed(ref reason) => {
        write!(f, "cannot create shader program: {}", reason)
      }

      ShaderError::CompilationFailed(ty, ref log) => write!(f, "{} compilation error: {}", ty, log),

      ShaderError::LinkFailed(ref log) => write!(f, "shader program failed to link: {}", log),

      ShaderError::InactiveAttribute(ref name) => {
        write!(f, "inactive vertex attribute: {}", name)
      }

      ShaderError::InactiveUniform(ref name) => write!(f, "inactive uniform: {}", name),
    }
  }
}

impl std::error::Error for ShaderError {}

/// A linked shader program.
pub struct Program<B>
where
  B: ?Sized + Shader,
{
  pub(crate) repr: B::ProgramRepr,
}

impl<B> Program<B>
where
  B: ?Sized + Shader,
{
  /// Compile and link a program from vertex and fragment sources.
  pub fn from_strings(
    backend: &mut B,
    vertex_src: &str,
    fragment_src: &str,
  ) -> Result<Self, ShaderError> {
    let repr = backend.new_program(vertex_src, fragment_src)?;
    Ok(Program { repr })
  }

  /// Wrap a program the backend already built.
  pub fn from_repr(repr: B::ProgramRepr) -> Self {
    Program { repr }
  }

  /// Backend representation of the program.
  pub fn repr(&self) -> &B::ProgramRepr {
    &self.repr
  }
}

impl<B> fmt::Debug for Program<B>
where
  B: ?Sized + Shader,
  B::ProgramRepr: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    f.debug_struct("Program").field("repr", &self.repr).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(
      ShaderError::compilation_failed(StageType::FragmentShader, "0:1: syntax error").to_string(),
      "fragment shader compilation error: 0:1: syntax error"
    );
    assert_eq!(
      ShaderError::inactive_attribute("position").to_string(),
      "inactive vertex attribute: position"
    );
    assert_eq!(
      ShaderError::inactive_uniform(COLOR_UNIFORM).to_string(),
      "inactive uniform: color"
    );
  }
}

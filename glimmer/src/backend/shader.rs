//! Shader backend interface.

use crate::shader::ShaderError;

/// Shader programs and their named inputs.
pub trait Shader {
  /// Backend representation of a linked shader program.
  type ProgramRepr;

  /// Backend representation of a uniform location inside a program.
  type UniformRepr;

  /// Compile a vertex and a fragment stage and link them into a program.
  fn new_program(
    &mut self,
    vertex_src: &str,
    fragment_src: &str,
  ) -> Result<Self::ProgramRepr, ShaderError>;

  /// Look up the location of a named vertex attribute.
  ///
  /// Must fail with [`ShaderError::InactiveAttribute`] if the program has no such active input.
  fn attrib_location(
    &mut self,
    program: &Self::ProgramRepr,
    name: &str,
  ) -> Result<u32, ShaderError>;

  /// Look up the location of a named uniform.
  ///
  /// Must fail with [`ShaderError::InactiveUniform`] if the program has no such active uniform.
  fn uniform_location(
    &mut self,
    program: &Self::ProgramRepr,
    name: &str,
  ) -> Result<Self::UniformRepr, ShaderError>;

  /// Make a program current, or unbind the current one with `None`.
  fn use_program(&mut self, program: Option<&Self::ProgramRepr>);

  /// Upload a 3-component float value to a uniform of the current program.
  fn set_uniform3(&mut self, uniform: &Self::UniformRepr, value: [f32; 3]);
}

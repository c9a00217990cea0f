//! Shader support for WebGL2.

use crate::webgl2::{state::WebGL2State, WebGL2};
use glimmer::{
  backend::shader::Shader,
  shader::{ShaderError, StageType},
};
use std::{cell::RefCell, rc::Rc};
use web_sys::{WebGl2RenderingContext, WebGlProgram, WebGlShader, WebGlUniformLocation};

#[derive(Debug)]
struct Stage {
  handle: WebGlShader,
  state: Rc<RefCell<WebGL2State>>,
}

impl Drop for Stage {
  fn drop(&mut self) {
    self.state.borrow().ctx.delete_shader(Some(&self.handle));
  }
}

impl Stage {
  fn new(webgl2: &mut WebGL2, ty: StageType, src: &str) -> Result<Self, ShaderError> {
    let state = webgl2.state.borrow();

    let handle = state
      .ctx
      .create_shader(webgl_shader_type(ty))
      .ok_or_else(|| ShaderError::creation_failed(format!("unable to create {}", ty)))?;

    state.ctx.shader_source(&handle, &patch_shader_src(src));
    state.ctx.compile_shader(&handle);

    let compiled = state
      .ctx
      .get_shader_parameter(&handle, WebGl2RenderingContext::COMPILE_STATUS)
      .as_bool()
      .ok_or_else(|| {
        ShaderError::compilation_failed(ty, "cannot determine compilation status")
      })?;

    if compiled {
      Ok(Stage {
        handle,
        state: webgl2.state.clone(),
      })
    } else {
      let log = state
        .ctx
        .get_shader_info_log(&handle)
        .unwrap_or_else(|| "no compilation error".to_owned());

      state.ctx.delete_shader(Some(&handle));

      Err(ShaderError::compilation_failed(ty, log))
    }
  }
}

/// WebGL shader program.
#[derive(Debug)]
pub struct Program {
  pub(crate) handle: WebGlProgram,
  state: Rc<RefCell<WebGL2State>>,
}

impl Drop for Program {
  fn drop(&mut self) {
    let mut state = self.state.borrow_mut();

    state.unuse_program(&self.handle);
    state.ctx.delete_program(Some(&self.handle));
  }
}

impl Program {
  fn new(webgl2: &mut WebGL2, vertex: &Stage, fragment: &Stage) -> Result<Self, ShaderError> {
    // the state must not stay borrowed here: a program failing to link is dropped on return, and
    // its Drop borrows the state mutably
    let handle = {
      let state = webgl2.state.borrow();

      let handle = state
        .ctx
        .create_program()
        .ok_or_else(|| ShaderError::creation_failed("unable to allocate GPU shader program"))?;

      state.ctx.attach_shader(&handle, &vertex.handle);
      state.ctx.attach_shader(&handle, &fragment.handle);

      handle
    };

    let program = Program {
      handle,
      state: webgl2.state.clone(),
    };

    program.link()?;
    Ok(program)
  }

  fn link(&self) -> Result<(), ShaderError> {
    let handle = &self.handle;
    let state = self.state.borrow();

    state.ctx.link_program(handle);

    let linked = state
      .ctx
      .get_program_parameter(handle, WebGl2RenderingContext::LINK_STATUS)
      .as_bool();

    link_status(linked, || state.ctx.get_program_info_log(handle))
  }
}

/// Turn a link status and its lazily fetched info log into a result.
fn link_status(
  linked: Option<bool>,
  info_log: impl FnOnce() -> Option<String>,
) -> Result<(), ShaderError> {
  match linked {
    Some(true) => Ok(()),
    Some(false) => {
      let log = info_log().unwrap_or_else(|| "unknown link error".to_owned());
      Err(ShaderError::link_failed(log))
    }
    None => Err(ShaderError::link_failed("unknown link status")),
  }
}

impl Shader for WebGL2 {
  type ProgramRepr = Program;

  type UniformRepr = WebGlUniformLocation;

  fn new_program(
    &mut self,
    vertex_src: &str,
    fragment_src: &str,
  ) -> Result<Self::ProgramRepr, ShaderError> {
    let vertex = Stage::new(self, StageType::VertexShader, vertex_src)?;
    let fragment = Stage::new(self, StageType::FragmentShader, fragment_src)?;

    // stages are flagged for deletion when dropped here; the program keeps them alive
    Program::new(self, &vertex, &fragment)
  }

  fn attrib_location(
    &mut self,
    program: &Self::ProgramRepr,
    name: &str,
  ) -> Result<u32, ShaderError> {
    let location = self
      .state
      .borrow()
      .ctx
      .get_attrib_location(&program.handle, name);

    if location < 0 {
      Err(ShaderError::inactive_attribute(name))
    } else {
      Ok(location as u32)
    }
  }

  fn uniform_location(
    &mut self,
    program: &Self::ProgramRepr,
    name: &str,
  ) -> Result<Self::UniformRepr, ShaderError> {
    self
      .state
      .borrow()
      .ctx
      .get_uniform_location(&program.handle, name)
      .ok_or_else(|| ShaderError::inactive_uniform(name))
  }

  fn use_program(&mut self, program: Option<&Self::ProgramRepr>) {
    self
      .state
      .borrow_mut()
      .use_program(program.map(|p| &p.handle));
  }

  fn set_uniform3(&mut self, uniform: &Self::UniformRepr, value: [f32; 3]) {
    self
      .state
      .borrow()
      .ctx
      .uniform3f(Some(uniform), value[0], value[1], value[2]);
  }
}

fn webgl_shader_type(ty: StageType) -> u32 {
  match ty {
    StageType::VertexShader => WebGl2RenderingContext::VERTEX_SHADER,
    StageType::FragmentShader => WebGl2RenderingContext::FRAGMENT_SHADER,
  }
}

const GLSL_PRAGMA: &str = "#version 300 es\n\
                           precision highp float;\n\
                           precision highp int;\n";

fn patch_shader_src(src: &str) -> String {
  let mut pragma = String::from(GLSL_PRAGMA);
  pragma.push_str(src);
  pragma
}

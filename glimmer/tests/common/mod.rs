//! A backend recording every command it receives.

#![allow(dead_code)]

use glimmer::backend::buffer::Buffer;
use glimmer::backend::framebuffer::Framebuffer;
use glimmer::backend::shader::Shader;
use glimmer::backend::vertex_array::VertexArray;
use glimmer::resource::{ResourceError, ResourceKind};
use glimmer::shader::{Program, ShaderError};
use glimmer::shape::Mode;
use glimmer::vertex::VertexLayout;
use std::cell::RefCell;
use std::rc::Rc;

pub const VS: &str = "in vec2 position; void main() { gl_Position = vec4(position, 0., 1.); }";
pub const FS: &str = "uniform vec3 color; out vec4 frag; void main() { frag = vec4(color, 1.); }";

pub fn init_logger() {
  let _ = env_logger::builder().is_test(true).try_init();
}

/// A device command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
  Create(ResourceKind, u32),
  Delete(ResourceKind, u32),
  VertexAttribPointer { vao: u32, buffer: u32, location: u32, components: usize },
  UseProgram(Option<u32>),
  BindVertexArray(Option<u32>),
  BindIndexBuffer(Option<u32>),
  Uniform3([f32; 3]),
  DrawElements(Mode, usize),
  Viewport([i32; 4]),
  ClearColor([f32; 4]),
  Clear,
}

#[derive(Debug, Default)]
struct Log {
  commands: Vec<Command>,
  next_id: u32,
  live: Vec<(ResourceKind, u32)>,
}

impl Log {
  fn create(&mut self, kind: ResourceKind) -> u32 {
    self.next_id += 1;
    let id = self.next_id;
    self.commands.push(Command::Create(kind, id));
    self.live.push((kind, id));
    id
  }

  fn delete(&mut self, kind: ResourceKind, id: u32) {
    self.commands.push(Command::Delete(kind, id));
    self.live.retain(|&(k, i)| (k, i) != (kind, id));
  }
}

/// A recorded device resource; dropping it records its deletion.
#[derive(Debug)]
pub struct Handle {
  kind: ResourceKind,
  id: u32,
  log: Rc<RefCell<Log>>,
}

impl Drop for Handle {
  fn drop(&mut self) {
    self.log.borrow_mut().delete(self.kind, self.id);
  }
}

/// Recording backend.
///
/// Programs expose the `position` attribute and the `color` uniform only, unless hidden.
#[derive(Debug, Default)]
pub struct Recorder {
  log: Rc<RefCell<Log>>,
  refused: Vec<ResourceKind>,
  hidden: Vec<&'static str>,
  program: Option<u32>,
  vertex_array: Option<u32>,
  index_buffer: Option<u32>,
}

impl Recorder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make the device refuse to create a kind of resource.
  pub fn refuse(mut self, kind: ResourceKind) -> Self {
    self.refused.push(kind);
    self
  }

  /// Make programs behave as if an attribute or a uniform was optimized out.
  pub fn hide(mut self, name: &'static str) -> Self {
    self.hidden.push(name);
    self
  }

  pub fn program(&mut self) -> Rc<Program<Self>> {
    Rc::new(Program::from_strings(self, VS, FS).expect("recorded program"))
  }

  pub fn commands(&self) -> Vec<Command> {
    self.log.borrow().commands.clone()
  }

  /// Forget the commands recorded so far.
  pub fn reset(&self) {
    self.log.borrow_mut().commands.clear();
  }

  /// Drain the commands recorded so far.
  pub fn take(&self) -> Vec<Command> {
    std::mem::take(&mut self.log.borrow_mut().commands)
  }

  /// Resources created and not deleted yet.
  pub fn live(&self) -> Vec<(ResourceKind, u32)> {
    self.log.borrow().live.clone()
  }

  pub fn live_count(&self, kind: ResourceKind) -> usize {
    self.live().iter().filter(|(k, _)| *k == kind).count()
  }

  pub fn created(&self) -> usize {
    self
      .commands()
      .iter()
      .filter(|c| matches!(c, Command::Create(..)))
      .count()
  }

  pub fn draws(&self) -> Vec<(Mode, usize)> {
    self
      .commands()
      .into_iter()
      .filter_map(|c| match c {
        Command::DrawElements(mode, count) => Some((mode, count)),
        _ => None,
      })
      .collect()
  }

  /// Whether nothing is bound.
  pub fn is_unbound(&self) -> bool {
    self.program.is_none() && self.vertex_array.is_none() && self.index_buffer.is_none()
  }

  fn hides(&self, name: &str) -> bool {
    self.hidden.iter().any(|&hidden| hidden == name)
  }

  fn push(&self, command: Command) {
    self.log.borrow_mut().commands.push(command);
  }

  fn create(&mut self, kind: ResourceKind) -> Result<Handle, ResourceError> {
    if self.refused.contains(&kind) {
      return Err(ResourceError::cannot_create(kind));
    }

    let id = self.log.borrow_mut().create(kind);
    Ok(Handle {
      kind,
      id,
      log: self.log.clone(),
    })
  }
}

impl Buffer for Recorder {
  type BufferRepr = Handle;

  fn new_vertex_buffer(&mut self, _: &[f32]) -> Result<Self::BufferRepr, ResourceError> {
    self.create(ResourceKind::VertexBuffer)
  }

  fn new_index_buffer(&mut self, _: &[u32]) -> Result<Self::BufferRepr, ResourceError> {
    self.create(ResourceKind::IndexBuffer)
  }
}

impl Shader for Recorder {
  type ProgramRepr = Handle;

  type UniformRepr = String;

  fn new_program(&mut self, _: &str, _: &str) -> Result<Self::ProgramRepr, ShaderError> {
    self
      .create(ResourceKind::Program)
      .map_err(|e| ShaderError::creation_failed(e.to_string()))
  }

  fn attrib_location(&mut self, _: &Self::ProgramRepr, name: &str) -> Result<u32, ShaderError> {
    match name {
      "position" if !self.hides(name) => Ok(0),
      _ => Err(ShaderError::inactive_attribute(name)),
    }
  }

  fn uniform_location(
    &mut self,
    _: &Self::ProgramRepr,
    name: &str,
  ) -> Result<Self::UniformRepr, ShaderError> {
    match name {
      "color" if !self.hides(name) => Ok(name.to_owned()),
      _ => Err(ShaderError::inactive_uniform(name)),
    }
  }

  fn use_program(&mut self, program: Option<&Self::ProgramRepr>) {
    self.program = program.map(|p| p.id);
    self.push(Command::UseProgram(self.program));
  }

  fn set_uniform3(&mut self, _: &Self::UniformRepr, value: [f32; 3]) {
    assert!(self.program.is_some(), "uniform upload without a program");
    self.push(Command::Uniform3(value));
  }
}

impl VertexArray for Recorder {
  type VertexArrayRepr = Handle;

  fn new_vertex_array(
    &mut self,
    vertices: &Self::BufferRepr,
    location: u32,
    layout: &VertexLayout,
  ) -> Result<Self::VertexArrayRepr, ResourceError> {
    let vao = self.create(ResourceKind::VertexArray)?;
    self.push(Command::VertexAttribPointer {
      vao: vao.id,
      buffer: vertices.id,
      location,
      components: layout.components(),
    });
    Ok(vao)
  }

  fn bind_vertex_array(&mut self, vertex_array: Option<&Self::VertexArrayRepr>) {
    self.vertex_array = vertex_array.map(|v| v.id);
    self.push(Command::BindVertexArray(self.vertex_array));
  }

  fn bind_index_buffer(&mut self, buffer: Option<&Self::BufferRepr>) {
    self.index_buffer = buffer.map(|b| b.id);
    self.push(Command::BindIndexBuffer(self.index_buffer));
  }

  fn draw_elements(&mut self, mode: Mode, count: usize) {
    assert!(
      self.vertex_array.is_some() && self.index_buffer.is_some(),
      "draw without bound geometry"
    );
    self.push(Command::DrawElements(mode, count));
  }
}

impl Framebuffer for Recorder {
  fn set_viewport(&mut self, viewport: [i32; 4]) {
    self.push(Command::Viewport(viewport));
  }

  fn set_clear_color(&mut self, color: [f32; 4]) {
    self.push(Command::ClearColor(color));
  }

  fn clear_color_buffer(&mut self) {
    self.push(Command::Clear);
  }
}

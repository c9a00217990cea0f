mod common;

use common::{init_logger, Command, Recorder};
use glimmer::resource::ResourceKind;
use glimmer::scene::{Scene, SceneConfig, DEFAULT_BACKGROUND, DEFAULT_FILL};
use glimmer::shape::{GeometryError, Mode, ShapeError};

#[test]
fn single_triangle_frame() {
  init_logger();

  let mut backend = Recorder::new();
  let program = backend.program();
  let mut scene = Scene::new();

  scene
    .add_shape(&mut backend, &program, [0., 0.], 1.)
    .unwrap();
  backend.reset();

  scene.render(&mut backend, 800, 600);

  let commands = backend.take();
  let viewports: Vec<_> = commands
    .iter()
    .filter(|c| matches!(c, Command::Viewport(_)))
    .collect();
  let clears = commands.iter().filter(|c| **c == Command::Clear).count();

  assert_eq!(viewports, vec![&Command::Viewport([0, 0, 800, 600])]);
  assert_eq!(clears, 1);
  assert!(commands.contains(&Command::ClearColor(DEFAULT_BACKGROUND)));
  assert!(commands.contains(&Command::Uniform3(DEFAULT_FILL)));
  let draws: Vec<_> = commands
    .iter()
    .filter(|c| matches!(c, Command::DrawElements(..)))
    .collect();
  assert_eq!(draws, vec![&Command::DrawElements(Mode::Triangle, 3)]);
  assert!(backend.is_unbound());
}

#[test]
fn frame_order() {
  let mut backend = Recorder::new();
  let program = backend.program();
  let mut scene = Scene::new();
  scene
    .add_shape(&mut backend, &program, [0., 0.], 1.)
    .unwrap();
  backend.reset();

  scene.render(&mut backend, 4, 4);

  let commands = backend.take();
  assert_eq!(commands[0], Command::Viewport([0, 0, 4, 4]));
  assert_eq!(commands[1], Command::ClearColor(DEFAULT_BACKGROUND));
  assert_eq!(commands[2], Command::Clear);
  assert!(matches!(commands[3], Command::UseProgram(Some(_))));
}

#[test]
fn empty_scene_only_clears() {
  let mut backend = Recorder::new();
  let scene = Scene::new();

  scene.render(&mut backend, 640, 480);

  assert_eq!(
    backend.take(),
    vec![
      Command::Viewport([0, 0, 640, 480]),
      Command::ClearColor(DEFAULT_BACKGROUND),
      Command::Clear,
    ]
  );
}

#[test]
fn clear_shapes_then_render_only_clears() {
  init_logger();

  for n in 0..4 {
    let mut backend = Recorder::new();
    let program = backend.program();
    let mut scene = Scene::new();

    for i in 0..n {
      scene
        .add_shape(&mut backend, &program, [i as f32, 0.], 0.5)
        .unwrap();
    }

    scene.clear_shapes();
    assert!(scene.is_empty());
    backend.reset();

    scene.render(&mut backend, 100, 100);

    assert_eq!(
      backend.take(),
      vec![
        Command::Viewport([0, 0, 100, 100]),
        Command::ClearColor(DEFAULT_BACKGROUND),
        Command::Clear,
      ]
    );
  }
}

#[test]
fn clear_shapes_releases_resources() {
  init_logger();

  let mut backend = Recorder::new();
  let program = backend.program();
  let mut scene = Scene::new();

  for _ in 0..5 {
    scene
      .add_shape(&mut backend, &program, [0., 0.], 1.)
      .unwrap();
  }

  assert_eq!(backend.live_count(ResourceKind::VertexArray), 5);

  scene.clear_shapes();

  assert_eq!(backend.live(), vec![(ResourceKind::Program, 1)]);
}

#[test]
fn dropping_the_scene_releases_resources() {
  let mut backend = Recorder::new();
  let program = backend.program();
  let mut scene = Scene::new();

  scene
    .add_shape(&mut backend, &program, [0., 0.], 1.)
    .unwrap();
  drop(scene);
  drop(program);

  assert!(backend.live().is_empty());
}

#[test]
fn add_shape_appends_in_call_order() {
  init_logger();

  let mut backend = Recorder::new();
  let program = backend.program();
  let mut scene = Scene::new();
  let centers = [[0., 0.], [10., 0.], [0., 10.], [-5., -5.]];

  for (n, &center) in centers.iter().enumerate() {
    scene
      .add_shape(&mut backend, &program, center, 1.)
      .unwrap();
    assert_eq!(scene.len(), n + 1);
  }

  // the first vertex of a triangle sits right below its center
  let firsts: Vec<_> = scene
    .shapes()
    .iter()
    .map(|s| [s.vertices()[0], s.vertices()[1] + 1.])
    .collect();
  assert_eq!(firsts, centers.to_vec());

  backend.reset();
  scene.render(&mut backend, 10, 10);

  // vertex arrays are bound in the order shapes were added
  let bound: Vec<_> = backend
    .take()
    .into_iter()
    .filter_map(|c| match c {
      Command::BindVertexArray(Some(id)) => Some(id),
      _ => None,
    })
    .collect();
  let mut sorted = bound.clone();
  sorted.sort_unstable();

  assert_eq!(bound.len(), 4);
  assert_eq!(bound, sorted);
}

#[test]
fn render_is_idempotent() {
  let mut backend = Recorder::new();
  let program = backend.program();
  let mut scene = Scene::new();

  for i in 0..3 {
    scene
      .add_shape(&mut backend, &program, [i as f32, 0.], 1.)
      .unwrap();
  }

  backend.reset();
  scene.render(&mut backend, 320, 200);
  let first = backend.take();
  scene.render(&mut backend, 320, 200);
  let second = backend.take();

  assert_eq!(first, second);
  assert_eq!(first.len(), 3 + 3 * 8);
}

#[test]
fn failed_add_leaves_scene_untouched() {
  let mut backend = Recorder::new();
  let program = backend.program();
  let mut scene = Scene::new();

  scene
    .add_shape(&mut backend, &program, [0., 0.], 1.)
    .unwrap();

  let err = scene
    .add_shape(&mut backend, &program, [0., 0.], 0.)
    .unwrap_err();

  assert_eq!(err, ShapeError::InvalidGeometry(GeometryError::InvalidSize(0.)));
  assert_eq!(scene.len(), 1);
}

#[test]
fn refused_resource_leaves_scene_untouched() {
  let mut backend = Recorder::new().refuse(ResourceKind::VertexBuffer);
  let program = backend.program();
  let mut scene = Scene::new();

  assert!(matches!(
    scene.add_shape(&mut backend, &program, [0., 0.], 1.),
    Err(ShapeError::ResourceCreation(_))
  ));
  assert!(scene.is_empty());
}

#[test]
fn configured_colors() {
  let mut backend = Recorder::new();
  let program = backend.program();
  let config = SceneConfig::default()
    .set_background([0., 0., 0.5, 1.])
    .set_fill([0., 1., 0.]);
  let mut scene = Scene::with_config(config);

  scene
    .add_shape(&mut backend, &program, [0., 0.], 1.)
    .unwrap();
  backend.reset();
  scene.render(&mut backend, 1, 1);

  let commands = backend.take();
  assert!(commands.contains(&Command::ClearColor([0., 0., 0.5, 1.])));
  assert!(commands.contains(&Command::Uniform3([0., 1., 0.])));
  assert_eq!(scene.shapes()[0].color(), [0., 1., 0.]);
}

#[test]
fn viewport_is_passed_through() {
  let mut backend = Recorder::new();
  let scene = Scene::new();

  scene.set_viewport(&mut backend, 0, 0);

  assert_eq!(backend.take(), vec![Command::Viewport([0, 0, 0, 0])]);
}

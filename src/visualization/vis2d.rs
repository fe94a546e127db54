use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{CursorMoved, PrimaryWindow};

use crate::interaction::camera::{Camera as ViewCamera, PanDirection, ZoomDirection};
use crate::interaction::controller::InputEvent;
use crate::simulation::integrator::euler_step;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::snapshot::render_snapshot;

/// Component tagging each circle with its body index into Scenario.world.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

const WINDOW_TITLE: &str = "Gravitational Simulator";
const SCREEN_WIDTH: f32 = 1920.0;
const SCREEN_HEIGHT: f32 = 1080.0;
const BACKGROUND_COLOR: [f32; 3] = [50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0];

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} bodies",
        scenario.world.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::srgb(
            BACKGROUND_COLOR[0],
            BACKGROUND_COLOR[1],
            BACKGROUND_COLOR[2],
        )))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_view)
        // One frame = input, then one physics tick, then rendering reads the
        // snapshot. The chain keeps that order fixed.
        .add_systems(
            Update,
            (
                input_system,
                physics_step_system,
                sync_bodies_system,
                draw_arrow_system,
            )
                .chain(),
        )
        .run();
}

fn setup_view(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Screen space (top-left origin, y down) -> world space: the camera offset
/// is undone so the controller only ever sees world coordinates.
fn screen_to_world(p: Vec2, camera: &ViewCamera) -> NVec2 {
    NVec2::new(p.x as f64, p.y as f64) - camera.offset
}

/// Screen space -> Bevy render coordinates (centered origin, y up).
fn screen_to_render(p: NVec2) -> Vec2 {
    Vec2::new(
        p.x as f32 - SCREEN_WIDTH / 2.0,
        SCREEN_HEIGHT / 2.0 - p.y as f32,
    )
}

/// Translate window input into the discrete events the core consumes.
fn input_system(
    mut scenario: ResMut<Scenario>,
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut cursor_evr: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Scenario {
        parameters,
        world,
        controller,
        camera,
        ..
    } = &mut *scenario;

    if keys.just_pressed(KeyCode::Space) {
        controller.handle(InputEvent::ClearAll, world, parameters);
    }

    if keys.just_pressed(KeyCode::ArrowLeft) {
        camera.pan(PanDirection::Left);
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        camera.pan(PanDirection::Right);
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        camera.pan(PanDirection::Up);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        camera.pan(PanDirection::Down);
    }
    if keys.just_pressed(KeyCode::Equal) {
        camera.zoom(ZoomDirection::In);
    }
    if keys.just_pressed(KeyCode::Minus) {
        camera.zoom(ZoomDirection::Out);
    }

    for ev in cursor_evr.read() {
        let p = screen_to_world(ev.position, camera);
        controller.handle(InputEvent::PointerMoved(p), world, parameters);
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        let p = screen_to_world(cursor, camera);
        if buttons.just_pressed(MouseButton::Left) {
            controller.handle(InputEvent::PointerDown(p), world, parameters);
        }
        if buttons.just_released(MouseButton::Left) {
            controller.handle(InputEvent::PointerUp(p), world, parameters);
        }
    }
}

/// Per-frame physics integration, one fixed tick. Skipped while a creation
/// gesture is in progress.
fn physics_step_system(mut scenario: ResMut<Scenario>) {
    let Scenario {
        parameters,
        world,
        forces,
        controller,
        ..
    } = &mut *scenario;

    if controller.simulation_paused() {
        return;
    }
    euler_step(world, forces, parameters);
}

/// Keep one circle entity per body: spawn for new bodies, despawn after a
/// clear, move and rescale the rest from the render snapshot.
fn sync_bodies_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    scenario: Res<Scenario>,
    mut query: Query<(Entity, &BodyIndex, &mut Transform)>,
    mut spawned: Local<usize>,
) {
    let snap = render_snapshot(&scenario);
    let n = snap.bodies.len();

    for (entity, BodyIndex(i), mut transform) in &mut query {
        let Some(b) = snap.bodies.get(*i) else {
            commands.entity(entity).despawn();
            continue;
        };
        let on_screen = b.position + snap.camera.offset;
        transform.translation = screen_to_render(on_screen).extend(0.0);
        transform.scale = Vec3::splat((b.radius * snap.camera.zoom_scale) as f32);
    }

    // Unit circles scaled by radius, so resizing a body never rebuilds its mesh
    for (i, b) in snap.bodies.iter().enumerate().skip(*spawned) {
        let on_screen = b.position + snap.camera.offset;
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(1.0))),
                material: materials
                    .add(ColorMaterial::from(Color::srgb(b.color[0], b.color[1], b.color[2]))),
                transform: Transform::from_translation(screen_to_render(on_screen).extend(0.0))
                    .with_scale(Vec3::splat((b.radius * snap.camera.zoom_scale) as f32)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
    *spawned = n;
}

/// Draw the aiming arrow, if one is live, as a gizmo line.
fn draw_arrow_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let snap = render_snapshot(&scenario);
    if let Some(arrow) = snap.arrow {
        let start = screen_to_render(arrow.start + snap.camera.offset);
        let end = screen_to_render(arrow.end + snap.camera.offset);
        gizmos.line_2d(
            start,
            end,
            Color::srgb(arrow.color[0], arrow.color[1], arrow.color[2]),
        );
    }
}

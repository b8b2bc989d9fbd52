use bevy::prelude::*;

use crate::simulation::mode::Mode;
use crate::simulation::presets::emissive_intensity;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct MainCamera;

/// Open a window and run `scenario` one step per frame
pub fn run_3d(scenario: Scenario) {
    info!("run_3d: starting viewer with {} bodies", scenario.system.len());

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 200.0,
        })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(
            Update,
            (keyboard_controls, physics_step_3d, respawn_bodies, sync_transforms_3d, draw_trails).chain(),
        )
        .run();
}

fn to_vec3(x: &NVec3) -> Vec3 {
    Vec3::new(x.x as f32, x.y as f32, x.z as f32)
}

fn camera_for(mode: Mode) -> Transform {
    match mode {
        // Top-down; the galaxy lies in the XZ plane
        Mode::Galaxy => Transform::from_xyz(0.0, 2000.0, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
        _ => Transform::from_xyz(100.0, 100.0, 300.0).looking_at(Vec3::ZERO, Vec3::Y),
    }
}

/// Startup system: spawn camera and light. Bodies are spawned by `respawn_bodies`.
fn setup_3d(mut commands: Commands, scenario: Res<Scenario>) {
    commands.spawn((
        Camera3dBundle {
            transform: camera_for(scenario.mode()),
            ..Default::default()
        },
        MainCamera,
    ));

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1.0e9,
            range: 5000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });
}

/// Space start/stop, R reset, 1-4 mode, then the per-mode controllers
fn keyboard_controls(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::Space) {
        scenario.toggle();
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.reset();
    }

    let mode_keys = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4];
    for (key, mode) in mode_keys.into_iter().zip(Mode::ALL) {
        if keys.just_pressed(key) && scenario.mode() != mode {
            scenario.set_mode(mode);
        }
    }

    let result = match scenario.mode() {
        Mode::ThreeBody if keys.just_pressed(KeyCode::KeyT) => scenario.randomize_three_body(),
        Mode::Galaxy if keys.just_pressed(KeyCode::Equal) => {
            let count = scenario.system.len() + 100;
            scenario.set_star_count(count)
        }
        Mode::Galaxy if keys.just_pressed(KeyCode::Minus) => {
            let count = scenario.system.len().saturating_sub(100);
            scenario.set_star_count(count)
        }
        Mode::Custom if keys.just_pressed(KeyCode::KeyN) => scenario.add_random_star(),
        Mode::Custom if keys.just_pressed(KeyCode::KeyC) => scenario.add_sun().map(|_| ()),
        _ => Ok(()),
    };
    if let Err(e) = result {
        warn!("control ignored: {e}");
    }
}

/// Per-frame physics integration
fn physics_step_3d(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

/// Rebuild the sphere entities whenever the scenario's body layout changed
fn respawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
    existing: Query<Entity, With<BodyIndex>>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
    mut seen: Local<Option<(u64, Mode)>>,
) {
    let current = (scenario.generation(), scenario.mode());
    if *seen == Some(current) {
        return;
    }
    let mode_changed = !matches!(*seen, Some((_, mode)) if mode == current.1);
    *seen = Some(current);

    for e in &existing {
        commands.entity(e).despawn_recursive();
    }

    if mode_changed {
        if let Ok(mut transform) = camera.get_single_mut() {
            *transform = camera_for(current.1);
        }
    }

    for (i, b) in scenario.system.bodies.iter().enumerate() {
        let glow = emissive_intensity(b, scenario.mode());
        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(b.radius as f32).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: b.color,
                    emissive: b.color.to_linear() * glow,
                    ..Default::default()
                }),
                transform: Transform::from_translation(to_vec3(&b.x)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn sync_transforms_3d(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation = to_vec3(&b.x);
        }
    }
}

fn draw_trails(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    if !scenario.mode().records_trails() {
        return;
    }
    for (trail, b) in scenario.trails().iter().zip(scenario.system.bodies.iter()) {
        if trail.len() > 1 {
            gizmos.linestrip(trail.points().map(to_vec3), b.color);
        }
    }
}

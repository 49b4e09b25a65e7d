//! Orbit demo application
//!
//! Builds a three-level transform hierarchy (sun -> planet -> moon) plus a
//! camera rig, then steps the frame loop a fixed number of frames and logs
//! the world-space poses a renderer would consume. Headless: the point is
//! the hierarchy, not pixels.

use scene_engine::foundation::math::{utils, Vec3};
use scene_engine::foundation::time::Timer;
use scene_engine::scene::{Camera, MeshId, NodeId, RenderObject, SceneError, SceneGraph};

const FRAME_COUNT: u32 = 120;
const FIXED_DELTA: f32 = 1.0 / 60.0;

/// Orbital angular velocities in radians per second
const PLANET_ORBIT_SPEED: f32 = 0.8;
const MOON_ORBIT_SPEED: f32 = 2.4;

struct OrbitApp {
    graph: SceneGraph,
    camera: Camera,
    sun: NodeId,
    planet: NodeId,
    moon: NodeId,
    camera_rig: NodeId,
    renderables: Vec<RenderObject>,
}

impl OrbitApp {
    fn new() -> Result<Self, SceneError> {
        let mut graph = SceneGraph::new();

        // Sun at the origin; planet orbits the sun; moon orbits the planet.
        // The orbit radii live in the child translations, the orbital
        // motion in the parent rotations.
        let sun = graph.create_node(None)?;
        let planet = graph.create_node(Some(sun))?;
        let moon = graph.create_node(Some(planet))?;

        graph
            .node_mut(planet)
            .ok_or(SceneError::InvalidNode)?
            .local_mut()
            .set_translation(Vec3::new(6.0, 0.0, 0.0));
        graph
            .node_mut(moon)
            .ok_or(SceneError::InvalidNode)?
            .local_mut()
            .set_translation(Vec3::new(1.5, 0.0, 0.0));

        // Separate rig root so camera placement never disturbs the orbit
        // hierarchy.
        let camera_rig = graph.create_node(None)?;
        graph
            .node_mut(camera_rig)
            .ok_or(SceneError::InvalidNode)?
            .local_mut()
            .set_translation(Vec3::new(0.0, 4.0, 18.0));

        let mut camera = Camera::with_node(camera_rig);
        camera.set_perspective_projection(utils::deg_to_rad(45.0), 16.0 / 9.0, 0.1, 100.0);

        let renderables = vec![
            RenderObject::new().with_mesh(MeshId(0)).with_node(sun),
            RenderObject::new().with_mesh(MeshId(1)).with_node(planet),
            RenderObject::new().with_mesh(MeshId(2)).with_node(moon),
        ];

        Ok(Self {
            graph,
            camera,
            sun,
            planet,
            moon,
            camera_rig,
            renderables,
        })
    }

    /// Advance the simulation by one frame and refresh all world state
    fn update(&mut self, delta: f32) -> Result<(), SceneError> {
        let up = Vec3::new(0.0, 1.0, 0.0);
        self.graph
            .node_mut(self.sun)
            .ok_or(SceneError::InvalidNode)?
            .local_mut()
            .rotate(PLANET_ORBIT_SPEED * delta, up);
        self.graph
            .node_mut(self.planet)
            .ok_or(SceneError::InvalidNode)?
            .local_mut()
            .rotate(MOON_ORBIT_SPEED * delta, up);

        // All mutations are done: one pass per root, then the camera.
        self.graph.update(self.sun);
        self.graph.update(self.camera_rig);
        self.camera.update(&self.graph);
        Ok(())
    }

    fn log_frame(&self, frame: u32) {
        let Some(planet) = self.graph.node(self.planet) else {
            return;
        };
        let Some(moon) = self.graph.node(self.moon) else {
            return;
        };

        log::info!(
            "frame {:3}: planet at ({:6.2}, {:5.2}, {:6.2}), moon at ({:6.2}, {:5.2}, {:6.2})",
            frame,
            planet.world_position().x,
            planet.world_position().y,
            planet.world_position().z,
            moon.world_position().x,
            moon.world_position().y,
            moon.world_position().z,
        );

        for renderable in &self.renderables {
            if renderable.should_render() {
                let matrix = renderable.world_matrix(&self.graph);
                log::debug!(
                    "  mesh {:?} draw matrix translation: ({:.2}, {:.2}, {:.2})",
                    renderable.mesh(),
                    matrix[(0, 3)],
                    matrix[(1, 3)],
                    matrix[(2, 3)],
                );
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting orbit demo");

    let mut app = OrbitApp::new()?;
    let mut timer = Timer::new();

    for frame in 0..FRAME_COUNT {
        timer.tick();
        app.update(FIXED_DELTA)?;

        if frame % 30 == 0 {
            app.log_frame(frame);
        }
    }

    log::info!(
        "Simulated {} frames in {:.1} ms (view-projection determinant: {:.4})",
        timer.frame_count(),
        timer.elapsed_seconds() * 1000.0,
        app.camera.view_projection_matrix().determinant(),
    );
    log::info!("Orbit demo finished successfully");
    Ok(())
}

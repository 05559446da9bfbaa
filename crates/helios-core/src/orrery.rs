//! The composition root: owns every piece of simulation state and runs the
//! per-frame pipeline (drain input, move, propagate, fly camera, re-hover).

use glam::Vec2;

use crate::api::config::OrreryConfig;
use crate::assets::registry::{TextureId, TextureRegistry};
use crate::builder::{self, SceneHandles};
use crate::catalog;
use crate::core::graph::TransformGraph;
use crate::core::scene::Scene;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::Camera3D;
use crate::state::{SpeedState, UiMode};
use crate::systems::director::CameraDirector;
use crate::systems::motion;
use crate::systems::picking::Picker;

/// The planet currently under the pointer, for the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    /// Catalog index.
    pub planet: usize,
    pub name: &'static str,
    /// Pointer position in client pixels.
    pub client_x: f32,
    pub client_y: f32,
}

/// Full simulation state of the viewer.
pub struct Orrery {
    config: OrreryConfig,
    scene: Scene,
    graph: TransformGraph,
    handles: SceneHandles,
    starfield: Vec<[f32; 3]>,
    registry: TextureRegistry,
    camera: Camera3D,
    director: CameraDirector,
    picker: Picker,
    speeds: SpeedState,
    ui: UiMode,
    input: InputQueue,
    hover: Option<Hover>,
}

impl Orrery {
    pub fn new(config: OrreryConfig) -> Self {
        let mut registry = TextureRegistry::new();
        let (mut scene, mut graph, handles, starfield) = builder::build(&config, &mut registry);
        graph.propagate(&mut scene);

        let mut camera = Camera3D::new(config.fov_y_deg, config.aspect, config.near, config.far);
        camera.pos = config.home_pos;
        camera.target = config.home_look;

        let director = CameraDirector::new(config.home_pos, config.home_look);

        log::info!(
            "scene built: {} nodes, {} stars, {} textures",
            scene.len(),
            starfield.len(),
            registry.len()
        );

        Self {
            config,
            scene,
            graph,
            handles,
            starfield,
            registry,
            camera,
            director,
            picker: Picker::new(),
            speeds: SpeedState::from_catalog(),
            ui: UiMode::default(),
            input: InputQueue::new(),
            hover: None,
        }
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance the simulation by `dt` seconds of wall-clock time.
    pub fn tick(&mut self, dt: f32) {
        for event in self.input.drain() {
            self.apply_event(event);
        }

        if !self.ui.paused {
            motion::advance(&mut self.graph, &self.handles, &self.speeds, dt);
        }
        self.graph.propagate(&mut self.scene);
        self.director.advance(&mut self.camera);
        self.refresh_hover();
    }

    fn apply_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove {
                ndc_x,
                ndc_y,
                client_x,
                client_y,
            } => {
                self.picker
                    .set_pointer(Vec2::new(ndc_x, ndc_y), Vec2::new(client_x, client_y));
            }
            InputEvent::Click => {
                if self.director.is_transitioning() {
                    return;
                }
                let Some(hit) = self.picker.pick(&self.scene, &self.camera) else {
                    return;
                };
                let Some(index) = self.handles.bodies.iter().position(|&b| b == hit.id) else {
                    return;
                };
                let planet = &catalog::planets()[index];
                let world_pos = match self.scene.get(hit.id) {
                    Some(node) => node.pos,
                    None => return,
                };
                log::debug!("focus {}", planet.name);
                self.director
                    .focus_on(index, world_pos, planet.display_size, &self.camera);
            }
            InputEvent::SetSpeed { planet, value } => {
                if let Some(p) = catalog::planets().get(planet) {
                    self.speeds.set(p.name, value);
                }
            }
            InputEvent::TogglePause => self.ui.paused = !self.ui.paused,
            InputEvent::ToggleTheme => self.ui.light = !self.ui.light,
            InputEvent::ReturnToOverview => self.director.return_to_overview(&self.camera),
            InputEvent::Resize { aspect } => self.camera.set_aspect(aspect),
        }
    }

    fn refresh_hover(&mut self) {
        self.hover = self
            .picker
            .pick(&self.scene, &self.camera)
            .and_then(|hit| self.handles.bodies.iter().position(|&b| b == hit.id))
            .map(|index| {
                let screen = self.picker.screen_pos();
                Hover {
                    planet: index,
                    name: catalog::planets()[index].name,
                    client_x: screen.x,
                    client_y: screen.y,
                }
            });
    }

    // -- Accessors for the bridge --

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    pub fn hover(&self) -> Option<&Hover> {
        self.hover.as_ref()
    }

    /// Catalog index of the focused planet, `None` in overview.
    pub fn focused(&self) -> Option<usize> {
        self.director.focused()
    }

    pub fn ui(&self) -> UiMode {
        self.ui
    }

    pub fn speeds(&self) -> &SpeedState {
        &self.speeds
    }

    pub fn starfield(&self) -> &[[f32; 3]] {
        &self.starfield
    }

    pub fn registry(&self) -> &TextureRegistry {
        &self.registry
    }

    /// Record a host-reported texture load result.
    pub fn texture_loaded(&mut self, id: TextureId, ok: bool) {
        self.registry.mark(id, ok);
    }
}

use helios_core::systems::render::build_render_buffer;
use helios_core::{
    FrameClock, InputEvent, Orrery, OrreryConfig, RenderBuffer, TextureId, Theme,
};

/// Owns the simulation plus the frame clock and render buffer.
///
/// Lives in `thread_local!` storage behind the wasm exports, because
/// wasm-bindgen exports are free functions.
pub struct Runner {
    orrery: Orrery,
    buffer: RenderBuffer,
    /// Column-major view-projection matrix, repacked every tick so the host
    /// sees camera transitions and aspect changes.
    camera_buffer: [f32; Self::CAMERA_FLOATS],
    clock: FrameClock,
}

impl Runner {
    pub const CAMERA_FLOATS: usize = 16;

    pub fn new(config: OrreryConfig) -> Self {
        Self {
            orrery: Orrery::new(config),
            buffer: RenderBuffer::new(),
            camera_buffer: [0.0; Self::CAMERA_FLOATS],
            clock: FrameClock::new(),
        }
    }

    /// Push an input event from a DOM closure.
    pub fn push_input(&mut self, event: InputEvent) {
        self.orrery.push_input(event);
    }

    /// Run one frame: advance the simulation by the elapsed wall-clock time
    /// and repack the render buffer.
    pub fn tick(&mut self, now_ms: f64) {
        let dt = self.clock.delta(now_ms);
        self.orrery.tick(dt);
        self.camera_buffer = self.orrery.camera().view_projection().to_cols_array();
        build_render_buffer(self.orrery.scene(), self.orrery.registry(), &mut self.buffer);
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    /// Record a host-reported texture load result.
    pub fn texture_loaded(&mut self, id: u32, ok: bool) {
        self.orrery.texture_loaded(TextureId(id), ok);
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.buffer.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera_buffer.as_ptr()
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.orrery.starfield().as_ptr() as *const f32
    }

    pub fn star_count(&self) -> u32 {
        self.orrery.starfield().len() as u32
    }

    pub fn theme(&self) -> Theme {
        if self.orrery.ui().light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Scene clear color for the active theme.
    pub fn clear_color(&self) -> [f32; 3] {
        self.theme().palette().clear_color
    }
}

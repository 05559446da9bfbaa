use bytemuck::{Pod, Zeroable};

/// Geometry kind discriminator in the wire format.
pub const KIND_SPHERE: f32 = 0.0;
pub const KIND_RING: f32 = 1.0;
pub const KIND_GUIDE: f32 = 2.0;

/// Texture slot value meaning "untextured, use the fallback color".
pub const TEX_NONE: f32 = -1.0;

/// Per-instance render data read by the host page's WebGL layer.
/// Must match the host protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// Geometry kind: 0 sphere, 1 ring, 2 orbit guide.
    pub kind: f32,
    /// World position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Tilt about X in radians (ring inclination, guide tilt).
    pub rot_x: f32,
    /// Spin about Y in radians (texture rotation).
    pub rot_y: f32,
    /// Sphere radius, or ring/guide inner radius.
    pub p0: f32,
    /// Ring/guide outer radius (unused for spheres).
    pub p1: f32,
    /// Texture slot, or -1.0 while unresolved.
    pub tex: f32,
    /// Fallback color.
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all instances for one frame.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for wasm-boundary reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

pub mod api;
pub mod assets;
pub mod builder;
pub mod catalog;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod orrery;
pub mod renderer;
pub mod rng;
pub mod state;
pub mod systems;
pub mod theme;

// Re-export key types at crate root for convenience
pub use api::config::OrreryConfig;
pub use api::types::NodeId;
pub use assets::manifest::{TextureEntry, TextureManifest};
pub use assets::registry::{LoadState, TextureId, TextureRegistry};
pub use builder::SceneHandles;
pub use catalog::{PlanetDescriptor, RingDescriptor};
pub use components::node::{Node, Shape};
pub use core::graph::{LocalTransform, TransformGraph};
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use extensions::{lerp, lerp_vec3};
pub use input::queue::{InputEvent, InputQueue};
pub use orrery::{Hover, Orrery};
pub use renderer::camera::{Camera3D, Ray};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use rng::Rng;
pub use state::{SpeedState, UiMode};
pub use systems::director::CameraDirector;
pub use systems::picking::{Hit, Picker};
pub use theme::{Palette, Theme};

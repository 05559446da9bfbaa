//! wasm-bindgen entry point for the solar-system viewer.
//!
//! `boot` builds the simulation, wires the DOM and starts a
//! self-rescheduling requestAnimationFrame loop. After each tick the host's
//! render callback is invoked to draw the flat instance buffers exposed by
//! the accessor exports.

pub mod panel;
pub mod runner;

pub use runner::Runner;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use helios_core::{OrreryConfig, RenderInstance};

use panel::ControlPanel;

thread_local! {
    static RUNNER: RefCell<Option<Rc<RefCell<Runner>>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut Runner) -> R) -> R {
    RUNNER.with(|cell| {
        let borrow = cell.borrow();
        let rc = borrow
            .as_ref()
            .expect("Viewer not initialized. Call boot() first.");
        let mut runner = rc.borrow_mut();
        f(&mut runner)
    })
}

/// Initialize the viewer and start the frame loop.
/// `render` is called once per frame after the buffers are repacked.
#[wasm_bindgen]
pub fn boot(render: js_sys::Function) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let width = window
        .inner_width()?
        .as_f64()
        .unwrap_or(16.0);
    let height = window
        .inner_height()?
        .as_f64()
        .unwrap_or(9.0)
        .max(1.0);

    let config = OrreryConfig {
        aspect: (width / height) as f32,
        ..OrreryConfig::default()
    };
    let runner = Rc::new(RefCell::new(Runner::new(config)));
    let control_panel = ControlPanel::bind(&document, runner.clone())?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner.clone());
    });

    // Standard self-rescheduling rAF pattern: the closure holds an Rc to the
    // slot it lives in so it can request the next frame.
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let slot_clone = slot.clone();
    let loop_window = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        {
            let mut r = runner.borrow_mut();
            r.tick(now_ms);
            if let Err(e) = control_panel.sync(&r) {
                log::warn!("panel sync failed: {e:?}");
            }
        }

        if render.call0(&JsValue::NULL).is_err() {
            log::warn!("host render callback failed");
        }

        if let Some(closure) = slot_clone.borrow().as_ref() {
            if loop_window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("requestAnimationFrame failed; frame loop stopped");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    {
        let borrow = slot.borrow();
        let closure = borrow
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame closure missing"))?;
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    }

    log::info!("solar-system viewer: booted");
    Ok(())
}

/// JSON manifest of texture slots the host should load.
#[wasm_bindgen]
pub fn texture_manifest() -> Result<String, JsValue> {
    with_runner(|r| r.orrery().registry().manifest().to_json())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Host callback reporting a texture load result for a manifest slot.
#[wasm_bindgen]
pub fn texture_loaded(id: u32, ok: bool) {
    with_runner(|r| r.texture_loaded(id, ok));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_instance_stride_floats() -> u32 {
    RenderInstance::FLOATS as u32
}

/// Column-major view-projection matrix (16 floats), rewritten every tick.
#[wasm_bindgen]
pub fn get_camera_ptr() -> *const f32 {
    with_runner(|r| r.camera_ptr())
}

#[wasm_bindgen]
pub fn get_camera_floats() -> u32 {
    Runner::CAMERA_FLOATS as u32
}

#[wasm_bindgen]
pub fn get_stars_ptr() -> *const f32 {
    with_runner(|r| r.stars_ptr())
}

#[wasm_bindgen]
pub fn get_star_count() -> u32 {
    with_runner(|r| r.star_count())
}

#[wasm_bindgen]
pub fn get_clear_r() -> f32 {
    with_runner(|r| r.clear_color()[0])
}

#[wasm_bindgen]
pub fn get_clear_g() -> f32 {
    with_runner(|r| r.clear_color()[1])
}

#[wasm_bindgen]
pub fn get_clear_b() -> f32 {
    with_runner(|r| r.clear_color()[2])
}

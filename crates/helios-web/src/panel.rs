//! DOM bindings for the control panel, tooltip and theme.
//!
//! Event closures push `InputEvent`s into the shared runner; `sync` writes
//! simulation state back into the DOM once per frame, diffing against small
//! caches so unchanged styles are not rewritten.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent};

use helios_core::{catalog, InputEvent, Theme};

use crate::runner::Runner;

/// Handles to the DOM the panel writes each frame. Optional elements are
/// `None` when the page omits them; those writes are skipped silently.
pub struct ControlPanel {
    body: HtmlElement,
    panel: Option<HtmlElement>,
    tooltip: Option<HtmlElement>,
    pause_btn: Option<HtmlElement>,
    theme_btn: Option<HtmlElement>,
    back_btn: HtmlElement,
    warning: Option<HtmlElement>,
    // Diff caches; `None` forces the first sync to apply everything.
    last_paused: Cell<Option<bool>>,
    last_light: Cell<Option<bool>>,
    back_visible: Cell<bool>,
    tooltip_visible: Cell<bool>,
    warned: Cell<bool>,
}

impl ControlPanel {
    /// Look up the page elements and attach all event listeners.
    /// Fails only on a missing canvas or body; everything else is optional.
    pub fn bind(document: &Document, runner: Rc<RefCell<Runner>>) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let canvas = document
            .get_element_by_id("solar-canvas")
            .ok_or_else(|| JsValue::from_str("missing #solar-canvas"))?
            .dyn_into::<HtmlCanvasElement>()?;

        bind_sliders(document, &runner);
        bind_pointer(&canvas, &runner);
        bind_resize(&canvas, &runner)?;

        let pause_btn = html_by_id(document, "pause-btn");
        if let Some(btn) = &pause_btn {
            bind_click(btn, &runner, InputEvent::TogglePause);
        }

        let theme_btn = html_by_id(document, "theme-toggle");
        if let Some(btn) = &theme_btn {
            bind_click(btn, &runner, InputEvent::ToggleTheme);
        }

        let back_btn = match html_by_id(document, "back-btn") {
            Some(btn) => btn,
            None => create_back_button(document, &body)?,
        };
        bind_click(&back_btn, &runner, InputEvent::ReturnToOverview);

        Ok(Self {
            body,
            panel: html_by_id(document, "control-panel"),
            tooltip: html_by_id(document, "planet-tooltip"),
            pause_btn,
            theme_btn,
            back_btn,
            warning: html_by_id(document, "file-warning"),
            last_paused: Cell::new(None),
            last_light: Cell::new(None),
            back_visible: Cell::new(false),
            tooltip_visible: Cell::new(false),
            warned: Cell::new(false),
        })
    }

    /// Write the current simulation state into the DOM.
    pub fn sync(&self, runner: &Runner) -> Result<(), JsValue> {
        let orrery = runner.orrery();
        let ui = orrery.ui();

        if self.last_paused.get() != Some(ui.paused) {
            self.last_paused.set(Some(ui.paused));
            if let Some(btn) = &self.pause_btn {
                btn.set_text_content(Some(if ui.paused { "Resume" } else { "Pause" }));
            }
        }

        if self.last_light.get() != Some(ui.light) {
            self.last_light.set(Some(ui.light));
            self.apply_theme(runner.theme())?;
        }

        let focused = orrery.focused().is_some();
        if self.back_visible.get() != focused {
            self.back_visible.set(focused);
            self.back_btn
                .style()
                .set_property("display", if focused { "block" } else { "none" })?;
        }

        if let Some(tooltip) = &self.tooltip {
            match orrery.hover() {
                Some(hover) => {
                    if !self.tooltip_visible.get() {
                        self.tooltip_visible.set(true);
                        tooltip.style().set_property("display", "block")?;
                    }
                    tooltip.set_text_content(Some(hover.name));
                    tooltip
                        .style()
                        .set_property("left", &format!("{}px", hover.client_x + 12.0))?;
                    tooltip
                        .style()
                        .set_property("top", &format!("{}px", hover.client_y - 10.0))?;
                }
                None => {
                    if self.tooltip_visible.get() {
                        self.tooltip_visible.set(false);
                        tooltip.style().set_property("display", "none")?;
                    }
                }
            }
        }

        if !self.warned.get() && orrery.registry().failed_count() > 0 {
            self.warned.set(true);
            if let Some(warning) = &self.warning {
                warning.style().set_property("display", "block")?;
            }
        }

        Ok(())
    }

    fn apply_theme(&self, theme: Theme) -> Result<(), JsValue> {
        let palette = theme.palette();

        self.body
            .style()
            .set_property("background", palette.body_background)?;

        if let Some(panel) = &self.panel {
            panel
                .style()
                .set_property("background", palette.panel_background)?;
            panel.style().set_property("color", palette.panel_foreground)?;
        }

        if let Some(tooltip) = &self.tooltip {
            tooltip
                .style()
                .set_property("background", palette.tooltip_background)?;
            tooltip
                .style()
                .set_property("color", palette.tooltip_foreground)?;
        }

        if let Some(warning) = &self.warning {
            warning
                .style()
                .set_property("background", palette.warning_background)?;
        }

        if let Some(btn) = &self.theme_btn {
            btn.set_text_content(Some(theme.toggle_label()));
        }

        Ok(())
    }
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

/// Wire one slider + readout per catalog planet. Pages may omit some.
fn bind_sliders(document: &Document, runner: &Rc<RefCell<Runner>>) {
    for (index, planet) in catalog::planets().iter().enumerate() {
        let lower = planet.name.to_lowercase();
        let slider = document
            .get_element_by_id(&format!("speed-{lower}"))
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
        let readout = html_by_id(document, &format!("val-{lower}"));

        let (Some(slider), Some(readout)) = (slider, readout) else {
            continue;
        };

        slider.set_value(&planet.base_speed.to_string());
        readout.set_text_content(Some(&format!("{:.2}", planet.base_speed)));

        let runner = runner.clone();
        let slider_ref = slider.clone();
        let closure = Closure::wrap(Box::new(move |_: Event| {
            let raw = slider_ref.value();
            if let Ok(value) = raw.parse::<f32>() {
                runner
                    .borrow_mut()
                    .push_input(InputEvent::SetSpeed { planet: index, value });
            }
            readout.set_text_content(Some(&raw));
        }) as Box<dyn FnMut(Event)>);
        let _ = slider
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn bind_click(target: &HtmlElement, runner: &Rc<RefCell<Runner>>, event: InputEvent) {
    let runner = runner.clone();
    let closure = Closure::wrap(Box::new(move || {
        runner.borrow_mut().push_input(event);
    }) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Canvas mousemove and click. NDC has +Y up, so screen Y is inverted.
fn bind_pointer(canvas: &HtmlCanvasElement, runner: &Rc<RefCell<Runner>>) {
    let move_runner = runner.clone();
    let move_canvas = canvas.clone();
    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
        let rect = move_canvas.get_bounding_client_rect();
        let cx = e.client_x() as f64;
        let cy = e.client_y() as f64;
        let ndc_x = ((cx - rect.left()) / rect.width()) * 2.0 - 1.0;
        let ndc_y = -(((cy - rect.top()) / rect.height()) * 2.0 - 1.0);
        move_runner.borrow_mut().push_input(InputEvent::PointerMove {
            ndc_x: ndc_x as f32,
            ndc_y: ndc_y as f32,
            client_x: cx as f32,
            client_y: cy as f32,
        });
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let click_runner = runner.clone();
    let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
        click_runner.borrow_mut().push_input(InputEvent::Click);
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

/// Track window resizes: update the canvas backing size and the camera aspect.
fn bind_resize(canvas: &HtmlCanvasElement, runner: &Rc<RefCell<Runner>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let runner = runner.clone();
    let canvas = canvas.clone();
    let win = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let height = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0)
            .max(1.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        runner.borrow_mut().push_input(InputEvent::Resize {
            aspect: (width / height) as f32,
        });
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

/// Pages without a back button get one appended to the body, styled inline.
fn create_back_button(document: &Document, body: &HtmlElement) -> Result<HtmlElement, JsValue> {
    let btn = document
        .create_element("button")?
        .dyn_into::<HtmlElement>()?;
    btn.set_id("back-btn");
    btn.set_text_content(Some("Back to Solar System"));

    let style = btn.style();
    style.set_property("display", "none")?;
    style.set_property("position", "absolute")?;
    style.set_property("top", "20px")?;
    style.set_property("right", "20px")?;
    style.set_property("z-index", "1002")?;
    style.set_property("padding", "8px 18px")?;
    style.set_property("font-size", "15px")?;
    style.set_property("border-radius", "8px")?;
    style.set_property("border", "none")?;
    style.set_property("background", "#ffd700")?;
    style.set_property("color", "#222")?;
    style.set_property("cursor", "pointer")?;

    body.append_child(&btn)?;
    Ok(btn)
}

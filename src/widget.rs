//! Browser shell around [`WidgetCore`].
//!
//! ARCHITECTURE
//! ============
//! Everything that touches the page lives in one shared `Runtime`: the core,
//! the mounted nodes, the four event listeners, the resize debounce timer and
//! the animation-frame loop. Callbacks hold `Rc` clones of it, forward each
//! event into the core, and apply the returned [`Action`] to the element.
//!
//! OWNERSHIP
//! =========
//! The registered listeners and the self-rescheduling frame closure keep the
//! runtime alive, the same way DOM listeners keep a JS object alive. `Friend`
//! is only a handle: dropping it (or the JS wrapper being collected) leaves
//! the widget running. `destroy` is the only teardown path.
//!
//! TEARDOWN
//! ========
//! `destroy` marks the core destroyed first, so any callback that still fires
//! afterwards finds a no-op. It then cancels the pending frame, drops the
//! debounce `Timeout` (which clears it), detaches the listeners, releases the
//! frame closure, and unmounts. Releasing the closures breaks the reference
//! cycle, so the runtime is freed once the last handle goes.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent, Window};

use crate::config::OptionsInput;
use crate::consts::{BOUNCING_CLASS_NAME, RESIZE_DEBOUNCE_MS, ROTATION_PROPERTY};
use crate::dom::{DomSurface, bounding_rect, client_point};
use crate::engine::{Action, WidgetCore};
use crate::geometry::Rect;
use crate::mount::MountedElement;
use crate::style;

type Shared = Rc<RefCell<Runtime>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// State reachable from every callback.
struct Runtime {
    core: WidgetCore,
    surface: Option<DomSurface>,
    mounted: Option<MountedElement>,
    element: Option<HtmlElement>,
    listeners: Vec<Listener>,
    frame_callback: FrameCallback,
    frame_id: Option<i32>,
    resize_timer: Option<Timeout>,
}

impl Runtime {
    fn element_rect(&self) -> Option<Rect> {
        self.element.as_ref().map(bounding_rect)
    }

    /// Write an engine action through to the element.
    fn apply(&self, action: Action) {
        let Some(element) = &self.element else {
            return;
        };
        let result = match action {
            Action::None => Ok(()),
            Action::SetRotation(angle) => element
                .style()
                .set_property(ROTATION_PROPERTY, &style::rotation_value(angle)),
            Action::AddBounceClass => element.class_list().add_1(BOUNCING_CLASS_NAME),
            Action::RemoveBounceClass => element.class_list().remove_1(BOUNCING_CLASS_NAME),
        };
        if let Err(err) = result {
            log::warn!("Friend #{}: {action:?} failed: {err:?}", self.core.id());
        }
    }
}

/// Run `f` against the runtime unless it is already borrowed.
fn with_runtime(shared: &Shared, f: impl FnOnce(&mut Runtime)) {
    if let Ok(mut runtime) = shared.try_borrow_mut() {
        f(&mut runtime);
    }
}

/// One installed DOM listener, kept so it can be removed again.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(target: EventTarget, kind: &'static str, callback: Closure<dyn FnMut(Event)>) -> Option<Self> {
        match target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self { target, kind, callback }),
            Err(err) => {
                log::warn!("failed to listen for {kind}: {err:?}");
                None
            }
        }
    }

    fn detach(self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.kind);
        }
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Option<i32> {
    let Ok(slot) = callback.try_borrow() else {
        return None;
    };
    let closure = slot.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            log::warn!("requestAnimationFrame failed: {err:?}");
            None
        }
    }
}

/// Handle to a mounted, running widget.
#[wasm_bindgen]
pub struct Friend {
    runtime: Shared,
}

#[wasm_bindgen]
impl Friend {
    /// `new Friend(options)` or `new Friend(image, corner?, rotationOffset?)`.
    #[wasm_bindgen(constructor)]
    pub fn new(image_or_options: JsValue, corner: JsValue, rotation_offset: JsValue) -> Friend {
        Self::from_input(options_input(&image_or_options, &corner, &rotation_offset))
    }

    /// Process-unique instance number (a `BigInt` on the JS side).
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u64 {
        match self.runtime.try_borrow() {
            Ok(runtime) => runtime.core.id().get(),
            Err(_) => 0,
        }
    }

    /// DOM id of the widget element.
    #[wasm_bindgen(getter, js_name = elementId)]
    pub fn element_id(&self) -> String {
        match self.runtime.try_borrow() {
            Ok(runtime) => runtime.core.ids().element,
            Err(_) => String::new(),
        }
    }

    /// Current accumulated heading in degrees.
    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f64 {
        match self.runtime.try_borrow() {
            Ok(runtime) => runtime.core.current_angle(),
            Err(_) => 0.0,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn bouncing(&self) -> bool {
        match self.runtime.try_borrow() {
            Ok(runtime) => runtime.core.is_bouncing(),
            Err(_) => false,
        }
    }

    /// Stop the widget and remove it from the page.
    pub fn destroy(&self) {
        let Ok(mut runtime) = self.runtime.try_borrow_mut() else {
            log::warn!("destroy called while the widget is busy");
            return;
        };
        if !runtime.core.destroy() {
            return;
        }
        if let Some(id) = runtime.frame_id.take() {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    log::warn!("Friend #{}: cancelAnimationFrame failed: {err:?}", runtime.core.id());
                }
            }
        }
        drop(runtime.resize_timer.take());
        runtime.element = None;
        let listeners = mem::take(&mut runtime.listeners);
        let frame = match runtime.frame_callback.try_borrow_mut() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        let surface = runtime.surface.take();
        let mounted = runtime.mounted.take();
        drop(runtime);

        // Closures hold runtime clones; release them outside the borrow.
        for listener in listeners {
            listener.detach();
        }
        drop(frame);
        if let (Some(mut surface), Some(mut mounted)) = (surface, mounted) {
            mounted.unmount(&mut surface);
        }
    }
}

impl Friend {
    /// Resolve options, mount, attach listeners and start the frame loop.
    #[must_use]
    pub fn from_input(input: OptionsInput) -> Self {
        let mut core = WidgetCore::new(input);
        let ids = core.ids();
        let mut surface = DomSurface::from_window();
        let mounted = surface
            .as_mut()
            .map(|s| MountedElement::mount(s, ids.clone(), core.config()));
        if surface.is_none() {
            log::warn!("Friend #{}: no document; running detached", core.id());
        }
        let element = surface.as_ref().and_then(|s| s.html_element(&ids.element));
        core.mark_mounted();

        let runtime = Rc::new(RefCell::new(Runtime {
            core,
            surface,
            mounted,
            element: element.clone(),
            listeners: Vec::new(),
            frame_callback: Rc::new(RefCell::new(None)),
            frame_id: None,
            resize_timer: None,
        }));
        if let Some(window) = web_sys::window() {
            let listeners = build_listeners(&runtime, &window, element.as_ref());
            with_runtime(&runtime, |rt| rt.listeners = listeners);
            start_frames(&runtime, &window);
        }
        Self { runtime }
    }

    /// Whether a resize is waiting out its debounce window.
    #[must_use]
    pub fn resize_pending(&self) -> bool {
        match self.runtime.try_borrow() {
            Ok(runtime) => runtime.core.resize_pending(),
            Err(_) => false,
        }
    }

    /// Whether the center has been measured since mount.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        match self.runtime.try_borrow() {
            Ok(runtime) => runtime.core.center().is_some(),
            Err(_) => false,
        }
    }
}

fn build_listeners(runtime: &Shared, window: &Window, element: Option<&HtmlElement>) -> Vec<Listener> {
    let mut listeners = Vec::new();
    let mut listen = |target: EventTarget, kind: &'static str, callback: Closure<dyn FnMut(Event)>| {
        if let Some(listener) = Listener::attach(target, kind, callback) {
            listeners.push(listener);
        }
    };

    if let Some(document) = window.document() {
        let shared = Rc::clone(runtime);
        let on_move = Closure::wrap(Box::new(move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            with_runtime(&shared, |rt| rt.core.on_pointer_move(client_point(mouse)));
        }) as Box<dyn FnMut(Event)>);
        listen(document.clone().into(), "mousemove", on_move);

        let shared = Rc::clone(runtime);
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            with_runtime(&shared, |rt| {
                let rect = rt.element_rect();
                let action = rt.core.on_click(client_point(mouse), rect);
                rt.apply(action);
            });
        }) as Box<dyn FnMut(Event)>);
        listen(document.into(), "click", on_click);
    }

    let shared = Rc::clone(runtime);
    let on_resize = Closure::wrap(Box::new(move |_event: Event| {
        let weak = Rc::downgrade(&shared);
        with_runtime(&shared, |rt| {
            let Some(ticket) = rt.core.on_resize() else {
                return;
            };
            // Replacing the previous Timeout drops (and clears) it.
            rt.resize_timer = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                with_runtime(&shared, |rt| {
                    if rt.core.resize_due(ticket) {
                        let rect = rt.element_rect();
                        rt.core.recompute_center(rect);
                    }
                });
            }));
        });
    }) as Box<dyn FnMut(Event)>);
    listen(window.clone().into(), "resize", on_resize);

    if let Some(element) = element {
        let shared = Rc::clone(runtime);
        let on_animation_end = Closure::wrap(Box::new(move |_event: Event| {
            with_runtime(&shared, |rt| {
                let action = rt.core.on_animation_end();
                rt.apply(action);
            });
        }) as Box<dyn FnMut(Event)>);
        listen(element.clone().into(), "animationend", on_animation_end);
    }

    listeners
}

/// Install the self-rescheduling frame callback. The first frame measures the
/// center once layout has settled.
fn start_frames(runtime: &Shared, window: &Window) {
    let callback: FrameCallback = match runtime.try_borrow() {
        Ok(rt) => Rc::clone(&rt.frame_callback),
        Err(_) => return,
    };
    let shared = Rc::clone(runtime);
    let rescheduler = Rc::clone(&callback);
    let frame_window = window.clone();
    let mut needs_center = true;
    let frame = Closure::wrap(Box::new(move |_ts: f64| {
        with_runtime(&shared, |rt| {
            if needs_center {
                needs_center = false;
                let rect = rt.element_rect();
                rt.core.recompute_center(rect);
            }
            let action = rt.core.on_frame();
            if action == Action::None {
                rt.frame_id = None;
                return;
            }
            rt.apply(action);
            rt.frame_id = request_frame(&frame_window, &rescheduler);
        });
    }) as Box<dyn FnMut(f64)>);

    if let Ok(mut slot) = callback.try_borrow_mut() {
        *slot = Some(frame);
    }
    let frame_id = request_frame(window, &callback);
    with_runtime(runtime, |rt| rt.frame_id = frame_id);
}

/// Install the console logger and panic hook. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already installed");
    }
}

/// Normalize the two constructor shapes. Non-string legacy arguments count as
/// not supplied.
fn options_input(image_or_options: &JsValue, corner: &JsValue, rotation_offset: &JsValue) -> OptionsInput {
    if image_or_options.is_object() {
        return OptionsInput::Object(js_to_json(image_or_options).unwrap_or(Value::Null));
    }
    OptionsInput::Legacy {
        image: image_or_options.as_string(),
        corner: corner.as_string(),
        rotation_offset: js_to_json(rotation_offset),
    }
}

/// Convert a JS value to JSON. `undefined`, `null` and unserializable values
/// map to `None`.
fn js_to_json(value: &JsValue) -> Option<Value> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let text = match js_sys::JSON::stringify(value) {
        Ok(text) => text.as_string()?,
        Err(err) => {
            log::warn!("option value is not serializable: {err:?}");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(json) => Some(json),
        Err(err) => {
            log::warn!("option value is not valid JSON: {err}");
            None
        }
    }
}

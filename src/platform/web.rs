//! Browser mount point
//!
//! Binds a [`Backdrop`] to a canvas element, drives it with
//! `requestAnimationFrame` and keeps it sized to the window. Callbacks hold
//! only weak references to the mounted state, so dropping the handle frees
//! everything.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement, Window};

use super::{FrameHandle, FrameScheduler};
use crate::backdrop::{Backdrop, Viewport};
use crate::renderer::CanvasSurface;
use crate::settings::BackdropSettings;

type FrameCallback = Closure<dyn FnMut(f64)>;
type ResizeCallback = Closure<dyn FnMut(Event)>;

/// [`FrameScheduler`] over `window.requestAnimationFrame`
pub struct RafScheduler {
    window: Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            log::warn!("Frame requested after teardown");
            return FrameHandle(0);
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => FrameHandle(id),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

/// State shared between the handle and the browser callbacks
struct Mounted {
    backdrop: Backdrop<CanvasSurface>,
    scheduler: RafScheduler,
}

impl Mounted {
    fn frame(&mut self) {
        let Mounted { backdrop, scheduler } = self;
        backdrop.frame(scheduler);
    }

    fn unmount(&mut self) {
        let Mounted { backdrop, scheduler } = self;
        backdrop.unmount(scheduler);
    }
}

/// A mounted backdrop. Call `unmount()` (or drop/free it) to tear it down.
#[wasm_bindgen]
pub struct BackdropHandle {
    window: Window,
    mounted: Option<Rc<RefCell<Mounted>>>,
    frame_callback: Rc<RefCell<Option<FrameCallback>>>,
    resize_listener: Option<ResizeCallback>,
}

#[wasm_bindgen]
impl BackdropHandle {
    /// Stop the animation and remove the resize listener
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.borrow_mut().unmount();
        }

        if let Some(listener) = self.resize_listener.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove resize listener: {:?}", e);
            }
        }

        // No frame is pending any more, so the callback can go
        self.frame_callback.borrow_mut().take();
    }

    /// Whether the animation loop is still running
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.borrow().backdrop.animation().is_running())
    }
}

impl Drop for BackdropHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Install the console logger and panic hook. Safe to call more than once.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialised");
    }
}

/// Mount a backdrop on the canvas with id `canvas_id`.
///
/// Returns `undefined` when the canvas (or its 2D context) is not available
/// yet; nothing is started in that case.
#[wasm_bindgen(js_name = mountBackdrop)]
pub fn mount_backdrop(canvas_id: &str) -> Option<BackdropHandle> {
    let window = web_sys::window()?;
    let canvas = window
        .document()
        .and_then(|d| d.get_element_by_id(canvas_id))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
    if canvas.is_none() {
        log::warn!("No canvas with id '{}'", canvas_id);
    }
    mount_on_canvas(window, canvas, BackdropSettings::load())
}

/// Mount onto an already resolved canvas
pub fn mount_on_canvas(
    window: Window,
    canvas: Option<HtmlCanvasElement>,
    settings: BackdropSettings,
) -> Option<BackdropHandle> {
    let surface = canvas.and_then(|canvas| {
        style_as_background(&canvas);
        CanvasSurface::new(canvas)
    });

    // Filled in once the backdrop exists; frames only fire after that
    let slot: Rc<RefCell<Weak<RefCell<Mounted>>>> = Rc::new(RefCell::new(Weak::new()));
    let frame_callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    {
        let slot = slot.clone();
        *frame_callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            if let Some(mounted) = slot.borrow().upgrade() {
                mounted.borrow_mut().frame();
            }
        }));
    }

    let mut scheduler = RafScheduler {
        window: window.clone(),
        callback: frame_callback.clone(),
    };
    let seed = js_sys::Date::now() as u64;
    let backdrop = Backdrop::mount(
        surface,
        window_viewport(&window),
        settings,
        seed,
        &mut scheduler,
    )?;

    let mounted = Rc::new(RefCell::new(Mounted { backdrop, scheduler }));
    *slot.borrow_mut() = Rc::downgrade(&mounted);

    let resize_listener = {
        let weak = Rc::downgrade(&mounted);
        let win = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            if let Some(mounted) = weak.upgrade() {
                mounted.borrow_mut().backdrop.resize(window_viewport(&win));
            }
        });
        match window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(closure),
            Err(e) => {
                log::warn!("Failed to add resize listener: {:?}", e);
                None
            }
        }
    };

    log::info!("Hex backdrop running (seed {})", seed);

    Some(BackdropHandle {
        window,
        mounted: Some(mounted),
        frame_callback,
        resize_listener,
    })
}

/// Current `innerWidth` x `innerHeight`
fn window_viewport(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Fixed, full-window layer behind the page content that ignores the pointer
fn style_as_background(canvas: &HtmlCanvasElement) {
    let style = canvas.style();
    for (name, value) in [
        ("position", "fixed"),
        ("inset", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", "0"),
        ("pointer-events", "none"),
    ] {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("Failed to set canvas style {}: {:?}", name, e);
        }
    }
}

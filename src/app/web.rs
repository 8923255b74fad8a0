//! Browser integration (WASM only).
//!
//! Each mounted section owns three things, all released when it is
//! dropped or [`unmount`](MountedSection::unmount)ed:
//!
//! - a [`ScrollSession`] shared between the callbacks below
//! - a [`ScrollListener`] on the window's `scroll` event
//! - an [`AnimationFrameLoop`] that ticks the session every frame
//!
//! Mounting is guarded like an error boundary: if a section cannot be set
//! up, its element shows [`FALLBACK_MESSAGE`](crate::app::section::FALLBACK_MESSAGE)
//! instead and the failure is logged.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Window};

use crate::animation::ScrollMetrics;
use crate::app::Instant;
use crate::app::section::{Section, fallback_markup};
use crate::app::session::ScrollSession;
use crate::app::settings::AnimatorSettings;
use crate::errors::{Error, Result};

fn global_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::WasmError("no global window".into()))
}

/// Reads scroll offset, document height, and viewport height from the page.
#[must_use]
pub fn measure(window: &Window) -> ScrollMetrics {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let document = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |e| f64::from(e.scroll_height()));

    ScrollMetrics::new(scroll_top as f32, document as f32, viewport as f32)
}

/// A `scroll` listener on the window, removed on drop.
pub struct ScrollListener {
    target: Window,
    callback: Closure<dyn FnMut(Event)>,
}

impl ScrollListener {
    pub fn new(target: Window, handler: impl FnMut(Event) + 'static) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(Self { target, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove scroll listener: {e:?}");
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A self-rescheduling `requestAnimationFrame` loop, cancelled on drop.
///
/// Must not be dropped from inside its own frame callback.
pub struct AnimationFrameLoop {
    window: Window,
    request_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationFrameLoop {
    pub fn start(window: Window, mut on_frame: impl FnMut(f64) + 'static) -> Result<Self> {
        let request_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next_window = window.clone();
        let next_id = Rc::clone(&request_id);
        let this: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::downgrade(&callback);

        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            on_frame(timestamp);

            // The loop was dropped during this frame
            let Some(cell) = this.upgrade() else { return };
            let slot = cell.borrow();
            if let Some(cb) = slot.as_ref() {
                match next_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next_id.set(Some(id)),
                    Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
                }
            }
        }));

        let first = {
            let slot = callback.borrow();
            let cb = slot
                .as_ref()
                .ok_or_else(|| Error::WasmError("frame callback missing".into()))?;
            window.request_animation_frame(cb.as_ref().unchecked_ref())?
        };
        request_id.set(Some(first));

        Ok(Self {
            window,
            request_id,
            callback,
        })
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.request_id.take()
            && let Err(e) = self.window.cancel_animation_frame(id)
        {
            log::warn!("Failed to cancel animation frame: {e:?}");
        }
        self.callback.borrow_mut().take();
    }
}

/// A section with a live scroll session. Dropping it releases the
/// listener and the frame loop.
pub struct MountedSection {
    section: Section,
    element: Element,
    session: Rc<RefCell<ScrollSession>>,
    _listener: ScrollListener,
    _frames: AnimationFrameLoop,
}

impl MountedSection {
    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    /// The section's root element, for callers attaching their own measurements.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    #[must_use]
    pub fn session(&self) -> &Rc<RefCell<ScrollSession>> {
        &self.session
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for MountedSection {
    fn drop(&mut self) {
        log::debug!("Unmounting {} section", self.section);
    }
}

/// Finds the section's element and starts its scroll session.
pub fn mount_section(section: Section, settings: AnimatorSettings) -> Result<MountedSection> {
    let window = global_window()?;
    let document = window
        .document()
        .ok_or_else(|| Error::WasmError("window has no document".into()))?;
    let element = document
        .get_element_by_id(section.element_id())
        .ok_or_else(|| Error::ElementNotFound(section.element_id().to_string()))?;

    let session = Rc::new(RefCell::new(ScrollSession::new(settings, measure(&window))));

    let listener = {
        let session = Rc::clone(&session);
        let page = window.clone();
        ScrollListener::new(window.clone(), move |_event: Event| {
            session.borrow_mut().on_measure(Instant::now(), measure(&page));
        })?
    };

    let frames = {
        let session = Rc::clone(&session);
        AnimationFrameLoop::start(window, move |_timestamp| {
            session.borrow_mut().tick(Instant::now());
        })?
    };

    log::info!("Mounted {section} section");

    Ok(MountedSection {
        section,
        element,
        session,
        _listener: listener,
        _frames: frames,
    })
}

/// Mounts a section, replacing its contents with the fallback message on failure.
pub fn mount_or_fallback(section: Section, settings: AnimatorSettings) -> Option<MountedSection> {
    match mount_section(section, settings) {
        Ok(mounted) => Some(mounted),
        Err(e) => {
            log::error!("Failed to mount {section} section: {e}");
            show_fallback(section);
            None
        }
    }
}

/// Puts the fallback message in the section's element. A section without
/// an element gets one appended to the body, so the message is always shown.
fn show_fallback(section: Section) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let element = match document.get_element_by_id(section.element_id()) {
        Some(element) => element,
        None => match create_section_element(&document, section) {
            Ok(element) => element,
            Err(e) => {
                log::error!("Cannot show fallback for {section} section: {e}");
                return;
            }
        },
    };
    element.set_inner_html(&fallback_markup());
}

fn create_section_element(document: &Document, section: Section) -> Result<Element> {
    let body = document
        .body()
        .ok_or_else(|| Error::WasmError("document has no body".into()))?;
    let element = document.create_element("section")?;
    element.set_id(section.element_id());
    body.append_child(&element)?;
    Ok(element)
}

/// Installs the console logger and panic hook.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    crate::app::init_logging();
}

/// JS-facing handle over one mounted section.
#[wasm_bindgen]
pub struct SectionHandle {
    inner: Option<MountedSection>,
}

#[wasm_bindgen]
impl SectionHandle {
    /// Mounts the section whose root element has id `section_id`
    /// (`hero`, `features`, or `cta`).
    #[wasm_bindgen(constructor)]
    pub fn new(section_id: &str) -> std::result::Result<SectionHandle, JsValue> {
        let section = Section::from_element_id(section_id)
            .ok_or_else(|| JsValue::from_str(&format!("unknown section '{section_id}'")))?;
        Ok(Self {
            inner: mount_or_fallback(section, AnimatorSettings::default()),
        })
    }

    /// False when mounting failed and the fallback message is showing.
    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }

    pub fn progress(&self) -> f32 {
        self.read(|s| s.progress()).unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = cameraPosition)]
    pub fn camera_position(&self) -> Vec<f32> {
        self.read(|s| s.outputs().camera_position.to_array().to_vec())
            .unwrap_or_default()
    }

    /// Camera position after per-frame easing.
    #[wasm_bindgen(js_name = easedCameraPosition)]
    pub fn eased_camera_position(&self) -> Vec<f32> {
        self.read(|s| s.rig().camera.position.to_array().to_vec())
            .unwrap_or_default()
    }

    pub fn color(&self) -> String {
        self.read(|s| s.outputs().color.to_hex()).unwrap_or_default()
    }

    /// Material color after per-frame easing.
    #[wasm_bindgen(js_name = materialColor)]
    pub fn material_color(&self) -> String {
        self.read(|s| s.rig().material.color.to_hex())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = morphInfluences)]
    pub fn morph_influences(&self) -> Vec<f32> {
        self.read(|s| s.outputs().morph_influences.as_slice().to_vec())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = scrollRef)]
    pub fn scroll_ref(&self) -> Option<Element> {
        self.inner.as_ref().map(|m| m.element().clone())
    }

    pub fn unmount(&mut self) {
        if let Some(mounted) = self.inner.take() {
            mounted.unmount();
        }
    }
}

impl SectionHandle {
    fn read<R>(&self, f: impl FnOnce(&ScrollSession) -> R) -> Option<R> {
        self.inner.as_ref().map(|m| f(&m.session.borrow()))
    }
}

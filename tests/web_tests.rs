//! Browser Integration Tests (WASM only)
//!
//! Tests for:
//! - Fallback message when a section cannot be mounted
//! - Scroll listener and frame loop released on unmount
//! - The JS-facing section handle
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, Event};

use scrollscape::app::web::{SectionHandle, mount_or_fallback, mount_section};
use scrollscape::app::{AnimatorSettings, FALLBACK_MESSAGE, Section};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_section(section: Section) -> Element {
    let document = document();
    let element = document.create_element("section").unwrap();
    element.set_id(section.element_id());
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn dispatch_scroll() {
    let event = Event::new("scroll").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

// ============================================================================
// Error Boundary
// ============================================================================

#[wasm_bindgen_test]
fn missing_element_shows_fallback() {
    assert!(document().get_element_by_id("hero").is_none());
    assert!(mount_section(Section::Hero, AnimatorSettings::default()).is_err());

    let mounted = mount_or_fallback(Section::Hero, AnimatorSettings::default());
    assert!(mounted.is_none());

    let element = document().get_element_by_id("hero").unwrap();
    assert!(element.inner_html().contains(FALLBACK_MESSAGE));
}

// ============================================================================
// Lifecycle
// ============================================================================

#[wasm_bindgen_test]
fn unmount_releases_scroll_listener() {
    add_section(Section::Features);
    let mounted = mount_section(Section::Features, AnimatorSettings::default()).unwrap();
    let session = Rc::clone(mounted.session());

    // Page heights are never negative, so a measurement overwrites these
    session.borrow_mut().on_resize(-1.0, -1.0);
    dispatch_scroll();
    assert!(session.borrow().metrics().document_height >= 0.0);

    mounted.unmount();
    session.borrow_mut().on_resize(-1.0, -1.0);
    dispatch_scroll();
    assert_eq!(session.borrow().metrics().document_height, -1.0);

    // Neither the listener nor the frame loop holds the session any more
    assert_eq!(Rc::strong_count(&session), 1);
}

#[wasm_bindgen_test]
fn section_handle_mounts_and_unmounts() {
    let element = add_section(Section::Cta);

    let mut handle = SectionHandle::new("cta").unwrap();
    assert!(handle.mounted());
    assert_eq!(handle.scroll_ref(), Some(element));
    assert_eq!(handle.morph_influences().len(), 5);

    handle.unmount();
    assert!(!handle.mounted());
    assert!(handle.scroll_ref().is_none());

    assert!(SectionHandle::new("footer").is_err());
}

//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::core::{EditPoint, Viewport};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the hidden terminal input.
#[inline]
pub fn focus_terminal_input() {
    focus_element("input[aria-label=\"command input\"]");
}

/// Scroll metrics of a container.
pub fn viewport(container: &Element) -> Viewport {
    Viewport {
        scroll_top: f64::from(container.scroll_top()),
        height: f64::from(container.client_height()),
        content_height: f64::from(container.scroll_height()),
    }
}

/// Vertical extent of the first element matching `selector` inside
/// `container`, in the container's content coordinates.
pub fn edit_point(container: &Element, selector: &str) -> Option<EditPoint> {
    let target = container.query_selector(selector).ok().flatten()?;
    let outer = container.get_bounding_client_rect();
    let inner = target.get_bounding_client_rect();
    let offset = f64::from(container.scroll_top()) - outer.top();
    Some(EditPoint {
        top: inner.top() + offset,
        bottom: inner.bottom() + offset,
    })
}

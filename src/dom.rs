//! `web-sys` implementation of the mount [`Surface`].

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::error::MountError;
use crate::geometry::{Point, Rect};
use crate::mount::{ElementSpec, Surface};

/// The live page document.
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    /// The current window's document, if running in a browser.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|document| Self { document })
    }

    /// Look up an element by id as an `HtmlElement`.
    #[must_use]
    pub fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_ref::<HtmlElement>()
            .cloned()
    }
}

impl Surface for DomSurface {
    fn has_node(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn append_element(&mut self, spec: &ElementSpec) -> Result<(), MountError> {
        let body = self.document.body().ok_or(MountError::MissingBody)?;
        let element = self.document.create_element("div").map_err(js_error)?;
        element.set_id(&spec.id);
        element.set_class_name(spec.class_name);
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return Err(MountError::Dom(format!("{} is not an HtmlElement", spec.id)));
        };
        let style = html.style();
        for (name, value) in &spec.styles {
            style.set_property(name, value).map_err(js_error)?;
        }
        body.append_child(&element).map_err(js_error)?;
        Ok(())
    }

    fn append_style(&mut self, id: &str, css: &str) -> Result<(), MountError> {
        let head = self.document.head().ok_or(MountError::MissingHead)?;
        let style = self.document.create_element("style").map_err(js_error)?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(js_error)?;
        Ok(())
    }

    fn remove_node(&mut self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(node) => {
                node.remove();
                true
            }
            None => false,
        }
    }
}

/// Current on-screen box of `element`.
#[must_use]
pub fn bounding_rect(element: &HtmlElement) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

/// Viewport coordinates of a mouse event.
#[must_use]
pub fn client_point(event: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn js_error(err: JsValue) -> MountError {
    MountError::Dom(format!("{err:?}"))
}

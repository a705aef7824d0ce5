//! Mounted element manager: creates and removes the widget's DOM footprint.
//!
//! A widget owns exactly two nodes: the element appended to `<body>` and its
//! stylesheet appended to `<head>`. Both are named from the instance id so
//! several widgets can share a page. Writes go through the [`Surface`] trait;
//! the browser implementation lives in [`crate::dom`].

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use crate::config::Config;
use crate::consts::CLASS_NAME;
use crate::engine::InstanceId;
use crate::error::MountError;
use crate::style;

/// Deterministic identifiers derived from an instance id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    /// DOM id of the widget element, `friend-el-{id}`.
    pub element: String,
    /// DOM id of the stylesheet, `friend-el-{id}-styles`.
    pub style: String,
    /// Keyframes name for the bounce animation, `bounce-{id}`.
    pub animation: String,
}

impl ElementIds {
    #[must_use]
    pub fn for_instance(id: InstanceId) -> Self {
        let element = format!("{CLASS_NAME}-{id}");
        Self {
            style: format!("{element}-styles"),
            animation: format!("bounce-{id}"),
            element,
        }
    }
}

/// Everything needed to create the widget element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    pub id: String,
    pub class_name: &'static str,
    pub styles: Vec<(&'static str, String)>,
}

/// The document operations the mount manager needs.
pub trait Surface {
    /// Whether a node with `id` exists anywhere in the document.
    fn has_node(&self, id: &str) -> bool;

    /// Create the element described by `spec` and append it to the body.
    fn append_element(&mut self, spec: &ElementSpec) -> Result<(), MountError>;

    /// Create a `<style>` node with `id` and `css` and append it to the head.
    fn append_style(&mut self, id: &str, css: &str) -> Result<(), MountError>;

    /// Remove the node with `id`. Returns whether one was found.
    fn remove_node(&mut self, id: &str) -> bool;
}

/// Record of what [`MountedElement::mount`] attached.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedElement {
    ids: ElementIds,
    element_attached: bool,
    style_attached: bool,
}

impl MountedElement {
    /// Attach the element and stylesheet for `config`.
    ///
    /// The stylesheet is skipped when a node with its id already exists.
    /// Failures are logged and leave the corresponding flag unset; mounting
    /// itself never fails.
    pub fn mount<S: Surface + ?Sized>(surface: &mut S, ids: ElementIds, config: &Config) -> Self {
        let spec = ElementSpec {
            id: ids.element.clone(),
            class_name: CLASS_NAME,
            styles: style::element_styles(config),
        };
        let element_attached = match surface.append_element(&spec) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("{}: element not attached: {err}", ids.element);
                false
            }
        };

        let style_attached = if surface.has_node(&ids.style) {
            log::debug!("{}: stylesheet already present", ids.style);
            false
        } else {
            match surface.append_style(&ids.style, &style::stylesheet(config, &ids)) {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("{}: stylesheet not attached: {err}", ids.style);
                    false
                }
            }
        };

        Self { ids, element_attached, style_attached }
    }

    #[must_use]
    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Whether the element node was appended by this mount.
    #[must_use]
    pub fn element_attached(&self) -> bool {
        self.element_attached
    }

    /// Whether the stylesheet node was appended by this mount.
    #[must_use]
    pub fn style_attached(&self) -> bool {
        self.style_attached
    }

    /// Remove the element and stylesheet. Nodes already gone are skipped.
    pub fn unmount<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if !surface.remove_node(&self.ids.element) {
            log::debug!("{}: element already removed", self.ids.element);
        }
        if !surface.remove_node(&self.ids.style) {
            log::debug!("{}: stylesheet already removed", self.ids.style);
        }
        self.element_attached = false;
        self.style_attached = false;
    }
}

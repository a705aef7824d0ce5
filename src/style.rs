//! Inline style and stylesheet text for a mounted widget.
//!
//! The engine only ever writes one value at runtime, the
//! `--rotation-angle` custom property. Everything else (the rotate+scale
//! transform, the bounce keyframes, the mobile media query) lives in the
//! per-instance stylesheet produced here.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::config::Config;
use crate::consts::{BOUNCING_CLASS_NAME, ROTATION_PROPERTY};
use crate::mount::ElementIds;

/// Inline style declarations for the widget element, in application order.
#[must_use]
pub fn element_styles(config: &Config) -> Vec<(&'static str, String)> {
    let mut styles = vec![
        ("position", "fixed".to_owned()),
        ("width", px(config.size.width)),
        ("height", px(config.size.height)),
        ("z-index", config.z_index.to_string()),
        ("pointer-events", "none".to_owned()),
        ("background-image", format!("url('{}')", escape_url(&config.image))),
        ("background-size", "contain".to_owned()),
        ("background-repeat", "no-repeat".to_owned()),
        ("background-position", "center".to_owned()),
    ];
    styles.extend(position_styles(config));
    styles
}

/// The two inset declarations that pin the element to its corner.
#[must_use]
pub fn position_styles(config: &Config) -> Vec<(&'static str, String)> {
    let offset = px(config.edge_offset);
    config
        .anchor()
        .edges()
        .into_iter()
        .map(|edge| (edge, offset.clone()))
        .collect()
}

/// Value written to the rotation custom property for `angle` degrees.
#[must_use]
pub fn rotation_value(angle: f64) -> String {
    format!("{angle}deg")
}

/// The per-instance stylesheet.
#[must_use]
pub fn stylesheet(config: &Config, ids: &ElementIds) -> String {
    let el = &ids.element;
    let anim = &ids.animation;
    let rotation = rotation_value(config.rotation_offset);
    let breakpoint = px(config.mobile_breakpoint);
    let prop = ROTATION_PROPERTY;
    let bouncing = BOUNCING_CLASS_NAME;
    format!(
        "#{el} {{\n\
         \x20   {prop}: {rotation}; --scale: 1;\n\
         \x20   transform: rotate(var({prop})) scale(var(--scale));\n\
         \x20   transform-origin: center center; transition: transform 0.1s linear;\n\
         }}\n\
         #{el}.{bouncing} {{\n\
         \x20   animation: {anim} 0.3s ease-out; transition: none;\n\
         }}\n\
         @keyframes {anim} {{\n\
         \x20   0%,100%{{--scale:1}}15%{{--scale:.9}}30%{{--scale:.8}}45%{{--scale:1}}\
         60%{{--scale:1.2}}75%{{--scale:1.05}}90%{{--scale:.95}}\n\
         }}\n\
         @media (max-width: {breakpoint}) {{ #{el} {{ display: none; }} }}\n"
    )
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Keep a user-supplied URL from closing the quoted `url('...')` early.
fn escape_url(url: &str) -> String {
    url.replace('\\', "\\\\").replace('\'', "\\'")
}

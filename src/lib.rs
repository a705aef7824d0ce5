//! Mouse-reactive companion character for web pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Each
//! [`widget::Friend`] places a small image in a corner of the viewport, turns
//! it smoothly toward the mouse pointer every animation frame, and plays a
//! short bounce when it is clicked. Any number of instances can live on one
//! page; each one owns uniquely named DOM nodes and tears them down again on
//! `destroy()`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | `wasm-bindgen` shell: listeners, frame loop, teardown |
//! | [`engine`] | Testable [`engine::WidgetCore`] and the [`engine::Action`]s it emits |
//! | [`config`] | Option resolution with defaults and warnings |
//! | [`orientation`] | Angle wraparound and exponential smoothing |
//! | [`bounce`] | Click-to-bounce state machine |
//! | [`debounce`] | Generation-ticket debouncer for resize handling |
//! | [`mount`] | Element/stylesheet creation behind the [`mount::Surface`] trait |
//! | [`dom`] | `web-sys` implementation of [`mount::Surface`] |
//! | [`style`] | Inline styles and the per-instance stylesheet |
//! | [`geometry`] | Points and rectangles in viewport pixels |
//! | [`error`] | Configuration warnings and mount errors |
//! | [`consts`] | Defaults, class names, timings |

pub mod bounce;
pub mod config;
pub mod consts;
pub mod debounce;
pub mod dom;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod mount;
pub mod orientation;
pub mod style;
pub mod widget;

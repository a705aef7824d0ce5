//! Option resolution: user-supplied options merged over defaults.
//!
//! Options arrive as loosely typed JSON (whatever the embedding page passed to
//! the constructor), either as a full record or as the legacy three-argument
//! shorthand. Both shapes go through [`resolve`], which never fails: a field
//! with the wrong type keeps its default and yields a [`ConfigWarning`].
//!
//! Keys use the JavaScript spelling (`zIndex`, `edgeOffset`, ...). The
//! snake_case spelling is accepted as an alias.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde_json::{Map, Value};

use crate::consts::{
    DEFAULT_EDGE_OFFSET_PX, DEFAULT_HEIGHT_PX, DEFAULT_IMAGE, DEFAULT_MOBILE_BREAKPOINT_PX,
    DEFAULT_ROTATION_OFFSET_DEG, DEFAULT_SMOOTHING, DEFAULT_WIDTH_PX, DEFAULT_Z_INDEX,
};
use crate::error::ConfigWarning;

/// Screen corner the widget is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    #[default]
    BottomLeft,
}

impl Corner {
    /// Parse a corner name such as `"top-right"`. Unknown names yield `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "top-left" => Some(Self::TopLeft),
            "top-right" => Some(Self::TopRight),
            "bottom-right" => Some(Self::BottomRight),
            "bottom-left" => Some(Self::BottomLeft),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
        }
    }

    /// The vertical and horizontal inset properties this corner pins.
    #[must_use]
    pub fn edges(self) -> [&'static str; 2] {
        match self {
            Self::TopLeft => ["top", "left"],
            Self::TopRight => ["top", "right"],
            Self::BottomRight => ["bottom", "right"],
            Self::BottomLeft => ["bottom", "left"],
        }
    }
}

/// Rendered size of the widget in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Default for Size {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH_PX, height: DEFAULT_HEIGHT_PX }
    }
}

/// Fully resolved, read-only widget configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Background image URL.
    pub image: String,
    pub size: Size,
    pub z_index: i64,
    /// Fraction of the angular gap closed per frame, in (0, 1].
    pub smoothing: f64,
    /// Viewport width in pixels at or below which the widget is hidden.
    pub mobile_breakpoint: f64,
    /// Corner name as supplied. Interpreted by [`Config::anchor`].
    pub corner: String,
    /// Distance from the anchored edges, in pixels.
    pub edge_offset: f64,
    /// Degrees added to the pointer bearing.
    pub rotation_offset: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image: DEFAULT_IMAGE.to_owned(),
            size: Size::default(),
            z_index: DEFAULT_Z_INDEX,
            smoothing: DEFAULT_SMOOTHING,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT_PX,
            corner: Corner::default().as_str().to_owned(),
            edge_offset: DEFAULT_EDGE_OFFSET_PX,
            rotation_offset: DEFAULT_ROTATION_OFFSET_DEG,
        }
    }
}

impl Config {
    /// The anchor corner. Unrecognized names fall back to bottom-left.
    #[must_use]
    pub fn anchor(&self) -> Corner {
        Corner::parse(&self.corner).unwrap_or_default()
    }
}

/// Constructor input, in either accepted shape.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsInput {
    /// A full options record.
    Object(Value),
    /// The positional shorthand: image, corner, rotation offset.
    Legacy {
        image: Option<String>,
        corner: Option<String>,
        rotation_offset: Option<Value>,
    },
}

impl Default for OptionsInput {
    fn default() -> Self {
        Self::Object(Value::Object(Map::new()))
    }
}

impl From<Value> for OptionsInput {
    fn from(value: Value) -> Self {
        Self::Object(value)
    }
}

impl OptionsInput {
    /// Shorthand form with a numeric rotation offset.
    #[must_use]
    pub fn legacy(image: impl Into<String>, corner: Option<&str>, rotation_offset: Option<f64>) -> Self {
        Self::Legacy {
            image: Some(image.into()),
            corner: corner.map(str::to_owned),
            rotation_offset: rotation_offset.map(Value::from),
        }
    }

    /// Normalize both shapes into one options record.
    fn into_value(self) -> Value {
        match self {
            Self::Object(value) => value,
            Self::Legacy { image, corner, rotation_offset } => {
                let mut root = Map::new();
                if let Some(image) = image {
                    root.insert("image".to_owned(), Value::String(image));
                }
                if let Some(corner) = corner {
                    root.insert("corner".to_owned(), Value::String(corner));
                }
                if let Some(offset) = rotation_offset {
                    root.insert("rotationOffset".to_owned(), offset);
                }
                Value::Object(root)
            }
        }
    }
}

/// Output of [`resolve`]: the configuration plus any fallbacks taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
}

/// Merge `input` over the defaults.
#[must_use]
pub fn resolve(input: OptionsInput) -> Resolved {
    let value = input.into_value();
    let mut config = Config::default();
    let mut warnings = Vec::new();

    let Some(root) = value.as_object() else {
        if !value.is_null() {
            warnings.push(ConfigWarning::NotAnObject { field: "options" });
        }
        return Resolved { config, warnings };
    };

    if let Some(image) = read_string(root, &["image"], "image", &mut warnings) {
        config.image = image;
    }

    match field(root, &["size"]) {
        Some(Value::Object(size)) => {
            if let Some(width) = read_number(size, &["width"], "size.width", &mut warnings) {
                config.size.width = width;
            }
            if let Some(height) = read_number(size, &["height"], "size.height", &mut warnings) {
                config.size.height = height;
            }
        }
        Some(_) => warnings.push(ConfigWarning::NotAnObject { field: "size" }),
        None => {}
    }

    if let Some(z_index) = field(root, &["zIndex", "z_index"]) {
        match z_index.as_i64() {
            Some(z) => config.z_index = z,
            None if z_index.is_number() => warnings.push(ConfigWarning::NotAnInteger { field: "zIndex" }),
            None => warnings.push(ConfigWarning::NotANumber { field: "zIndex" }),
        }
    }

    if let Some(smoothing) = read_number(root, &["smoothing"], "smoothing", &mut warnings) {
        if smoothing > 0.0 && smoothing <= 1.0 {
            config.smoothing = smoothing;
        } else {
            warnings.push(ConfigWarning::SmoothingOutOfRange { value: smoothing });
        }
    }

    if let Some(bp) = read_number(root, &["mobileBreakpoint", "mobile_breakpoint"], "mobileBreakpoint", &mut warnings)
    {
        config.mobile_breakpoint = bp;
    }

    if let Some(corner) = read_string(root, &["corner"], "corner", &mut warnings) {
        config.corner = corner;
    }

    if let Some(offset) = read_number(root, &["edgeOffset", "edge_offset"], "edgeOffset", &mut warnings) {
        config.edge_offset = offset;
    }

    if let Some(offset) = read_number(root, &["rotationOffset", "rotation_offset"], "rotationOffset", &mut warnings) {
        config.rotation_offset = offset;
    }

    Resolved { config, warnings }
}

/// First present, non-null value among `keys`.
fn field<'a>(root: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| root.get(*key).filter(|value| !value.is_null()))
}

fn read_number(
    root: &Map<String, Value>,
    keys: &[&str],
    name: &'static str,
    warnings: &mut Vec<ConfigWarning>,
) -> Option<f64> {
    let value = field(root, keys)?;
    if let Some(n) = value.as_f64() {
        return Some(n);
    }
    warnings.push(ConfigWarning::NotANumber { field: name });
    None
}

fn read_string(
    root: &Map<String, Value>,
    keys: &[&str],
    name: &'static str,
    warnings: &mut Vec<ConfigWarning>,
) -> Option<String> {
    let value = field(root, keys)?;
    if let Some(s) = value.as_str() {
        return Some(s.to_owned());
    }
    warnings.push(ConfigWarning::NotAString { field: name });
    None
}

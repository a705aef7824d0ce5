use super::*;
use crate::config::{Corner, Size};
use crate::engine::InstanceId;

fn ids() -> ElementIds {
    ElementIds::for_instance(InstanceId::next())
}

fn names(styles: &[(&'static str, String)]) -> Vec<&'static str> {
    styles.iter().map(|(name, _)| *name).collect()
}

// =============================================================
// position_styles
// =============================================================

#[test]
fn every_corner_sets_exactly_two_edges() {
    for corner in [Corner::TopLeft, Corner::TopRight, Corner::BottomRight, Corner::BottomLeft] {
        let config = Config { corner: corner.as_str().to_owned(), ..Config::default() };
        let styles = position_styles(&config);
        assert_eq!(names(&styles), corner.edges().to_vec());
        assert!(styles.iter().all(|(_, v)| v == "20px"));
    }
}

#[test]
fn unknown_corner_positions_bottom_left() {
    let config = Config { corner: "middle".to_owned(), ..Config::default() };
    assert_eq!(names(&position_styles(&config)), vec!["bottom", "left"]);
}

#[test]
fn fractional_offset_is_kept() {
    let config = Config { edge_offset: 7.5, ..Config::default() };
    assert!(position_styles(&config).iter().all(|(_, v)| v == "7.5px"));
}

// =============================================================
// element_styles
// =============================================================

#[test]
fn element_styles_cover_layout_and_image() {
    let config = Config {
        image: "/pets/dog.png".to_owned(),
        size: Size { width: 120.0, height: 80.0 },
        z_index: 42,
        ..Config::default()
    };
    let styles = element_styles(&config);
    let get = |name: &str| styles.iter().find(|(n, _)| *n == name).map(|(_, v)| v.clone());
    assert_eq!(get("position").as_deref(), Some("fixed"));
    assert_eq!(get("width").as_deref(), Some("120px"));
    assert_eq!(get("height").as_deref(), Some("80px"));
    assert_eq!(get("z-index").as_deref(), Some("42"));
    assert_eq!(get("pointer-events").as_deref(), Some("none"));
    assert_eq!(get("background-image").as_deref(), Some("url('/pets/dog.png')"));
    assert_eq!(get("background-size").as_deref(), Some("contain"));
}

#[test]
fn element_styles_set_two_of_four_insets() {
    let styles = element_styles(&Config::default());
    let insets = names(&styles)
        .into_iter()
        .filter(|n| matches!(*n, "top" | "bottom" | "left" | "right"))
        .count();
    assert_eq!(insets, 2);
}

#[test]
fn image_quotes_are_escaped() {
    let config = Config { image: "it's.png".to_owned(), ..Config::default() };
    let styles = element_styles(&config);
    assert!(styles.iter().any(|(n, v)| *n == "background-image" && v == "url('it\\'s.png')"));
}

// =============================================================
// stylesheet
// =============================================================

#[test]
fn stylesheet_drives_transform_from_custom_property() {
    let ids = ids();
    let css = stylesheet(&Config::default(), &ids);
    assert!(css.contains("--rotation-angle: 90deg;"));
    assert!(css.contains("transform: rotate(var(--rotation-angle)) scale(var(--scale));"));
}

#[test]
fn stylesheet_names_bounce_keyframes_per_instance() {
    let ids = ids();
    let css = stylesheet(&Config::default(), &ids);
    assert!(css.contains(&format!("#{}.bouncing {{", ids.element)));
    assert!(css.contains(&format!("animation: {} 0.3s ease-out;", ids.animation)));
    assert!(css.contains(&format!("@keyframes {} {{", ids.animation)));
}

#[test]
fn stylesheet_hides_below_breakpoint() {
    let ids = ids();
    let config = Config { mobile_breakpoint: 768.0, ..Config::default() };
    let css = stylesheet(&config, &ids);
    assert!(css.contains(&format!("@media (max-width: 768px) {{ #{} {{ display: none; }} }}", ids.element)));
}

#[test]
fn stylesheets_of_two_instances_do_not_share_names() {
    let a = ids();
    let b = ids();
    let css_a = stylesheet(&Config::default(), &a);
    assert!(!css_a.contains(&b.element));
    assert!(!css_a.contains(&b.animation));
}

// =============================================================
// rotation_value
// =============================================================

#[test]
fn rotation_value_formats_degrees() {
    assert_eq!(rotation_value(90.0), "90deg");
    assert_eq!(rotation_value(-12.5), "-12.5deg");
}

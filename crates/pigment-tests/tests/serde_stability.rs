//! Serialized field order and width stability
//!
//! The channel sequence of each color type is a contract for external
//! codecs: fixed order, fixed width. JSON keeps struct field order, so
//! string comparison pins the layout.

use pigment_core::{Hsl, Lab, Mono, Oklab, Rgb, Xyz};

#[test]
fn rgb_field_order() {
    let json = serde_json::to_string(&Rgb::new(1, 2, 3).with_alpha(4)).unwrap();
    assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":4}"#);
}

#[test]
fn mono_field_order() {
    let json = serde_json::to_string(&Mono::new(7).with_alpha(9)).unwrap();
    assert_eq!(json, r#"{"v":7,"a":9}"#);
}

#[test]
fn hsl_field_order() {
    let hsl = Hsl::new(90.0, 1.0, 0.0).with_alpha(10);
    let json = serde_json::to_string(&hsl).unwrap();
    assert_eq!(json, r#"{"h":9000,"s":255,"l":0,"alpha":10}"#);
}

#[test]
fn lab_is_four_doubles() {
    let json = serde_json::to_string(&Lab::with_alpha(50.0, 1.5, -2.5, 255.0)).unwrap();
    assert_eq!(json, r#"{"l":50.0,"a":1.5,"b":-2.5,"alpha":255.0}"#);
}

#[test]
fn alpha_less_spaces_have_three_fields() {
    let xyz = serde_json::to_value(Xyz::new(1.0, 2.0, 3.0)).unwrap();
    assert_eq!(xyz.as_object().unwrap().len(), 3);

    let oklab = serde_json::to_value(Oklab::new(0.5, 0.1, -0.1)).unwrap();
    assert_eq!(oklab.as_object().unwrap().len(), 3);
}

#[test]
fn json_roundtrip_preserves_values() {
    let rgb = Rgb::new(200, 100, 50).with_alpha(25);
    let back: Rgb = serde_json::from_str(&serde_json::to_string(&rgb).unwrap()).unwrap();
    assert_eq!(back, rgb);

    let lab = Lab::new(62.5, -17.25, 33.0);
    let back: Lab = serde_json::from_str(&serde_json::to_string(&lab).unwrap()).unwrap();
    assert_eq!(back, lab);
}

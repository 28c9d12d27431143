//! Pinned conversion scenarios
//!
//! Concrete reference values per space, plus the circular-domain and
//! clamping contracts the conversion engine guarantees.

use pigment_core::{ColorSpace, Hsl, Hsv, Lab, Lch, Oklab, Rgb, Xyz, convert};

#[test]
fn pure_red_to_hsl() {
    let hsl = Hsl::from_rgb(Rgb::new(255, 0, 0));
    assert_eq!(hsl.h, 0);
    assert_eq!(hsl.s, 255);
    assert!((hsl.l as i32 - 127).abs() <= 2, "l was {}", hsl.l);
}

#[test]
fn hsl_roundtrip_scenario() {
    let rgb = Hsl::new(180.0, 0.5, 0.6).to_rgb();
    let back = Hsl::from_rgb(rgb);
    assert!((back.hue_degrees() - 180.0).abs() < 2.0);
    assert!((back.s as i32 - 127).abs() <= 2);
    assert!((back.l as i32 - 153).abs() <= 2);
}

#[test]
fn lab_mid_gray() {
    let rgb = Lab::new(50.0, 0.0, 0.0).to_rgb();
    for ch in [rgb.r, rgb.g, rgb.b] {
        assert!((ch as i32 - 119).abs() <= 2, "got {rgb:?}");
    }
}

#[test]
fn lch_normalization() {
    let lch = Lch::new(400.0, -10.0, 450.0);
    assert_eq!(lch.l, 100.0);
    assert_eq!(lch.c, 0.0);
    assert!((lch.h - 90.0).abs() < 1e-9);
}

#[test]
fn oklab_blue_roundtrip() {
    let back = Oklab::from_rgb(Rgb::new(0, 0, 255)).to_rgb();
    assert!((back.r as i32).abs() <= 3);
    assert!((back.g as i32).abs() <= 3);
    assert!((back.b as i32 - 255).abs() <= 3);
}

#[test]
fn hsv_blue_exact() {
    assert_eq!(Hsv::new(240.0, 1.0, 1.0).to_rgb(), Rgb::new(0, 0, 255));
}

#[test]
fn hsl_hue_wraparound() {
    let rotated = Hsl::new(350.0, 0.5, 0.5).adjust_hue(20.0);
    assert_eq!(rotated.h, 1000); // 10.00 degrees in fixed point
}

#[test]
fn xyz_normalize_lower_clamp_only() {
    let xyz = Xyz::new(-10.0, 50.0, 200.0).normalize();
    assert_eq!(xyz.to_array(), [0.0, 50.0, 200.0]);
}

#[test]
fn achromatic_hsl_contract() {
    for v in [0u8, 51, 128, 200, 255] {
        let hsl = Hsl::from_rgb(Rgb::new(v, v, v));
        assert_eq!(hsl.s, 0);
        let back = hsl.to_rgb();
        assert_eq!((back.r, back.g, back.b), (v, v, v));
    }
}

#[test]
fn complement_idempotence() {
    for hue in [0.0, 47.5, 180.0, 359.9] {
        let hsl = Hsl::new(hue, 0.7, 0.4);
        assert_eq!(hsl.complement().complement().h, hsl.h);
    }
}

#[test]
fn delta_e_identity_and_positivity() {
    let x = Lab::from_rgb(Rgb::new(120, 40, 200));
    let y = Lab::from_rgb(Rgb::new(121, 40, 200));
    assert_eq!(x.delta_e(&x), 0.0);
    assert!(x.delta_e(&y) > 0.0);

    let ox = Oklab::from_rgb(Rgb::new(120, 40, 200));
    assert_eq!(ox.distance(&ox), 0.0);

    let lx = Lch::from_lab(&x);
    assert_eq!(lx.distance(&lx), 0.0);
}

#[test]
fn convert_routes_through_hub() {
    // Explicit two-step conversion and the generic router must agree
    let hsv = Hsv::new(33.0, 0.4, 0.9);
    let via_router: Lab = convert(&hsv);
    let via_hub = Lab::from_rgb(hsv.to_rgb());
    assert_eq!(via_router.to_rgb(), via_hub.to_rgb());
}

#[test]
fn white_point_fidelity() {
    // White lands at the matrix row sums scaled per component by D65:
    // x = 0.95047 * 95.047, y = 100, z = 1.08883 * 108.883
    let xyz = Xyz::from_rgb(Rgb::WHITE);
    assert!((xyz.x - 90.339).abs() < 0.01);
    assert!((xyz.y - 100.0).abs() < 0.01);
    assert!((xyz.z - 118.555).abs() < 0.01);

    let oklab = Oklab::from_rgb(Rgb::WHITE);
    assert!((oklab.l - 1.0).abs() < 1e-3);
}

#[test]
fn hsv_asymptotic_adjustment() {
    let hsv = Hsv::new(0.0, 0.5, 0.5);
    // Headroom law, not additive clamping
    assert!((hsv.adjust_brightness(0.5).v - 0.75).abs() < 1e-6);
    assert!((hsv.adjust_brightness(-0.5).v - 0.25).abs() < 1e-6);
    assert!((hsv.adjust_saturation(0.5).s - 0.75).abs() < 1e-6);
}

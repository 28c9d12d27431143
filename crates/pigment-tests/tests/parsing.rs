//! Textual parsing boundary
//!
//! Structural problems fail; out-of-range numeric components clamp.

use pigment_core::{Hsl, ParseError, Rgb, parse, parse_hsl, parse_rgb};

#[test]
fn hex_forms() -> anyhow::Result<()> {
    assert_eq!(parse("#1a2b3c")?, Rgb::new(26, 43, 60));
    assert_eq!(parse("1A2B3C")?, Rgb::new(26, 43, 60));
    assert_eq!(parse("#abc")?, Rgb::new(170, 187, 204));

    let with_alpha = parse("#1a2b3c80")?;
    assert_eq!(with_alpha.a, 128);
    Ok(())
}

#[test]
fn hex_structural_failures() {
    assert!(matches!(parse(""), Err(ParseError::Empty)));
    assert!(matches!(parse("#12345"), Err(ParseError::HexLength(5))));
    assert!(matches!(parse("#1234567"), Err(ParseError::HexLength(7))));
    assert!(matches!(parse("#zzzzzz"), Err(ParseError::HexDigit(_))));
}

#[test]
fn css_rgb_forms() {
    assert_eq!(parse("rgb(1, 2, 3)").unwrap(), Rgb::new(1, 2, 3));
    assert_eq!(parse("rgba(1,2,3,0.0)").unwrap().a, 0);
    // Whitespace anywhere between tokens is fine
    assert_eq!(parse("rgb( 10 , 20 , 30 )").unwrap(), Rgb::new(10, 20, 30));
}

#[test]
fn css_rgb_clamps_components() {
    assert_eq!(parse("rgb(999, -1, 128)").unwrap(), Rgb::new(255, 0, 128));
}

#[test]
fn css_rgb_failures() {
    assert!(matches!(
        parse("rgb(1,2)"),
        Err(ParseError::ComponentCount { actual: 2, .. })
    ));
    assert!(matches!(
        parse("rgb(a,b,c)"),
        Err(ParseError::InvalidComponent(_))
    ));
    assert!(matches!(
        parse_rgb("hwb(1,2,3)"),
        Err(ParseError::UnknownFunction(_))
    ));
}

#[test]
fn css_hsl_forms() {
    let hsl: Hsl = parse_hsl("hsl(120, 100%, 50%)").unwrap();
    assert!((hsl.hue_degrees() - 120.0).abs() < 0.01);
    assert_eq!(hsl.s, 255);

    let hsla = parse_hsl("hsla(240, 50%, 50%, 0.5)").unwrap();
    assert_eq!(hsla.alpha, 128);
}

#[test]
fn parse_accepts_all_forms() {
    // The top-level entry point routes every notation to RGB
    assert!(parse("#fff").is_ok());
    assert!(parse("rgb(0,0,0)").is_ok());
    assert!(parse("hsl(10, 10%, 10%)").is_ok());
    assert!(parse("hsla(10, 10%, 10%, 0.1)").is_ok());
}

#[test]
fn parse_never_substitutes_a_default() {
    // Failures surface; nothing silently becomes black
    let outcome = parse("rgb(oops)");
    assert!(outcome.is_err());
}

use super::*;

#[test]
fn dom_rect_converts_to_edges() {
    let r = DomRect::new(100.0, 100.0, 100.0, 50.0).to_rect();
    assert_eq!(r.x0, 100.0);
    assert_eq!(r.y0, 100.0);
    assert_eq!(r.x1, 200.0);
    assert_eq!(r.y1, 150.0);
    assert_eq!(DomRect::from(r), DomRect::new(100.0, 100.0, 100.0, 50.0));
}

#[test]
fn dom_rect_accepts_xy_aliases() {
    let r: DomRect = serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4}"#).unwrap();
    assert_eq!(r, DomRect::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn dom_rect_validation_rejects_negative_and_nan() {
    assert!(DomRect::new(0.0, 0.0, -1.0, 0.0).validate().is_err());
    assert!(DomRect::new(f64::NAN, 0.0, 1.0, 1.0).validate().is_err());
    assert!(DomRect::new(-5.0, -5.0, 0.0, 0.0).validate().is_ok());
}

#[test]
fn strict_rect_conversion_rejects_inverted_and_nan() {
    let ok = DomRect::try_from_rect(Rect::new(10.0, 20.0, 70.0, 40.0)).unwrap();
    assert_eq!(ok, DomRect::new(10.0, 20.0, 60.0, 20.0));
    assert!(DomRect::try_from_rect(Rect::new(60.0, 0.0, 0.0, 20.0)).is_err());
    assert!(DomRect::try_from_rect(Rect::new(f64::NAN, 0.0, 0.0, 20.0)).is_err());
}

#[test]
fn css_position_parses_case_insensitively() {
    assert_eq!(" Relative ".parse::<CssPosition>().unwrap(), CssPosition::Relative);
    assert_eq!("sticky".parse::<CssPosition>().unwrap(), CssPosition::Sticky);
    assert!("".parse::<CssPosition>().is_err());
    assert_eq!(CssPosition::Fixed.to_string(), "fixed");
}

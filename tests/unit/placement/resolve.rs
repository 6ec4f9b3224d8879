use super::*;
use crate::placement::model::{Alignment, Offset, Position};

fn anchor() -> Rect {
    Rect::new(100.0, 100.0, 200.0, 150.0)
}

fn content() -> Rect {
    Rect::new(0.0, 0.0, 60.0, 20.0)
}

fn short_viewport() -> Rect {
    Rect::new(0.0, 0.0, 300.0, 140.0)
}

fn bottom_center() -> Placement {
    Placement::new(Position::Bottom, Alignment::Center)
}

#[test]
fn default_config_only_positions() {
    let out = compute_placement(
        anchor(),
        content(),
        short_viewport(),
        bottom_center(),
        &PlacementConfig::default(),
    );
    assert_eq!(out.coords, Point::new(120.0, 150.0));
    assert_eq!(out.placement, bottom_center());
    assert_eq!(out.offset, Vec2::ZERO);
    assert_eq!(out.overflow.bottom, 30.0);
}

#[test]
fn auto_placement_flips_and_recomputes() {
    let cfg = PlacementConfig {
        auto_placement: true,
        ..PlacementConfig::default()
    };
    let out = compute_placement(anchor(), content(), short_viewport(), bottom_center(), &cfg);
    assert_eq!(out.placement, Placement::new(Position::Top, Alignment::Center));
    assert_eq!(out.coords, Point::new(120.0, 80.0));
    assert!(out.overflow.is_none());
}

#[test]
fn flip_reapplies_offset_for_the_new_side() {
    let cfg = PlacementConfig {
        auto_placement: true,
        offset: Some(Offset::Main(8.0)),
        ..PlacementConfig::default()
    };
    let out = compute_placement(anchor(), content(), short_viewport(), bottom_center(), &cfg);
    assert_eq!(out.placement.position, Position::Top);
    assert_eq!(out.offset, Vec2::new(0.0, -8.0));
    assert_eq!(out.coords, Point::new(120.0, 72.0));
}

#[test]
fn stick_to_edges_without_flip_keeps_position() {
    let cfg = PlacementConfig {
        stick_to_edges: true,
        ..PlacementConfig::default()
    };
    let out = compute_placement(anchor(), content(), short_viewport(), bottom_center(), &cfg);
    assert_eq!(out.placement, bottom_center());
    assert_eq!(out.coords, Point::new(120.0, 120.0));
    assert!(out.coords.y <= anchor().y1);
    assert!(out.coords.y >= anchor().y0 - content().height());
}

#[test]
fn flip_then_stick_uses_final_placement() {
    let cfg = PlacementConfig {
        auto_placement: true,
        stick_to_edges: true,
        ..PlacementConfig::default()
    };
    let viewport = Rect::new(0.0, 90.0, 300.0, 140.0);
    let out = compute_placement(anchor(), content(), viewport, bottom_center(), &cfg);
    assert_eq!(out.placement.position, Position::Top);
    assert_eq!(out.coords, Point::new(120.0, 90.0));
    assert!(out.overflow.is_none());
}

#[test]
fn flip_then_stick_clamps_with_the_flipped_offset() {
    let cfg = PlacementConfig {
        auto_placement: true,
        stick_to_edges: true,
        offset: Some(Offset::Main(8.0)),
        ..PlacementConfig::default()
    };
    let viewport = Rect::new(0.0, 80.0, 300.0, 140.0);
    let out = compute_placement(anchor(), content(), viewport, bottom_center(), &cfg);
    assert_eq!(out.placement, Placement::new(Position::Top, Alignment::Center));
    assert_eq!(out.offset, Vec2::new(0.0, -8.0));
    assert_eq!(out.coords, Point::new(120.0, 80.0));
    let h = content().height();
    assert!(out.coords.y >= anchor().y0 - 8.0 - h);
    assert!(out.coords.y <= anchor().y1 - 8.0);
    assert!(out.overflow.is_none());
}

#[test]
fn flip_that_still_overflows_is_not_retried() {
    let cfg = PlacementConfig {
        auto_placement: true,
        ..PlacementConfig::default()
    };
    let tight = Rect::new(0.0, 90.0, 300.0, 140.0);
    let out = compute_placement(anchor(), content(), tight, bottom_center(), &cfg);
    assert_eq!(out.placement.position, Position::Top);
    assert_eq!(out.overflow.top, 10.0);
}

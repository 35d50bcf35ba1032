use vitae_reorder::{Rect, clamp_to_parent, closest_center, restrict_to_vertical_axis};

// ── Rect basics ──────────────────────────────────────────────────

#[test]
fn center_is_midpoint() {
    let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(rect.center(), (60.0, 40.0));
}

#[test]
fn translated_shifts_origin_only() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0).translated(5.0, -3.0);
    assert_eq!(rect, Rect::new(5.0, -3.0, 10.0, 10.0));
}

// ── Axis restriction ─────────────────────────────────────────────

#[test]
fn vertical_restriction_zeroes_horizontal_movement() {
    assert_eq!(restrict_to_vertical_axis((37.5, -12.0)), (0.0, -12.0));
    assert_eq!(restrict_to_vertical_axis((0.0, 8.0)), (0.0, 8.0));
}

// ── Parent clamping ──────────────────────────────────────────────

#[test]
fn rect_inside_parent_is_unchanged() {
    let parent = Rect::new(0.0, 0.0, 200.0, 400.0);
    let rect = Rect::new(10.0, 50.0, 100.0, 30.0);
    assert_eq!(clamp_to_parent(rect, parent), rect);
}

#[test]
fn rect_dragged_above_parent_clamps_to_top() {
    let parent = Rect::new(0.0, 100.0, 200.0, 400.0);
    let rect = Rect::new(10.0, 20.0, 100.0, 30.0);
    let clamped = clamp_to_parent(rect, parent);
    assert_eq!(clamped.y, 100.0);
    assert_eq!(clamped.height, 30.0);
}

#[test]
fn rect_dragged_below_parent_clamps_to_bottom() {
    let parent = Rect::new(0.0, 0.0, 200.0, 100.0);
    let rect = Rect::new(0.0, 95.0, 200.0, 30.0);
    let clamped = clamp_to_parent(rect, parent);
    assert_eq!(clamped.y, 70.0);
}

#[test]
fn rect_larger_than_parent_pins_to_origin() {
    let parent = Rect::new(10.0, 10.0, 50.0, 50.0);
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let clamped = clamp_to_parent(rect, parent);
    assert_eq!((clamped.x, clamped.y), (10.0, 10.0));
}

// ── Closest center ───────────────────────────────────────────────

#[test]
fn closest_center_picks_nearest_sibling() {
    let active = Rect::new(0.0, 95.0, 100.0, 20.0);
    let candidates = [
        ("top", Rect::new(0.0, 0.0, 100.0, 20.0)),
        ("middle", Rect::new(0.0, 100.0, 100.0, 20.0)),
        ("bottom", Rect::new(0.0, 200.0, 100.0, 20.0)),
    ];
    assert_eq!(closest_center(&active, &candidates), Some("middle"));
}

#[test]
fn closest_center_of_empty_list_is_none() {
    let active = Rect::new(0.0, 0.0, 10.0, 10.0);
    let candidates: [(&str, Rect); 0] = [];
    assert_eq!(closest_center(&active, &candidates), None);
}

#[test]
fn closest_center_tie_resolves_to_earliest() {
    let active = Rect::new(0.0, 100.0, 100.0, 20.0);
    let candidates = [
        ("above", Rect::new(0.0, 50.0, 100.0, 20.0)),
        ("below", Rect::new(0.0, 150.0, 100.0, 20.0)),
    ];
    assert_eq!(closest_center(&active, &candidates), Some("above"));
}

#[test]
fn closest_center_ignores_horizontal_after_restriction() {
    // With movement restricted to the vertical axis, a sibling directly
    // above beats one far below even if the latter is horizontally aligned.
    let delta = restrict_to_vertical_axis((500.0, -40.0));
    let active = Rect::new(0.0, 100.0, 100.0, 20.0).translated(delta.0, delta.1);
    let candidates = [
        ("near", Rect::new(0.0, 40.0, 100.0, 20.0)),
        ("far", Rect::new(0.0, 300.0, 100.0, 20.0)),
    ];
    assert_eq!(closest_center(&active, &candidates), Some("near"));
}

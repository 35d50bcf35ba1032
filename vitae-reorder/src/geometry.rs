//! Collision geometry for pointer-driven drags.
//!
//! Pure rectangle math: the host feeds in the measured bounds of the dragged
//! item, its siblings, and the container; these functions pick the hovered
//! target and constrain movement. Dragging is vertical-only and clipped to
//! the parent container.

/// An axis-aligned rectangle in host layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle's center point.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// This rectangle shifted by the given delta.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Zeroes the horizontal component of a drag delta.
/// Sections only move up and down within their column.
#[must_use]
pub fn restrict_to_vertical_axis(delta: (f64, f64)) -> (f64, f64) {
    (0.0, delta.1)
}

/// Clamps a dragged rectangle so it stays inside the parent container.
///
/// A rectangle larger than the parent pins to the parent's top-left edge.
#[must_use]
pub fn clamp_to_parent(rect: Rect, parent: Rect) -> Rect {
    let max_x = parent.x + (parent.width - rect.width).max(0.0);
    let max_y = parent.y + (parent.height - rect.height).max(0.0);
    Rect {
        x: rect.x.clamp(parent.x, max_x),
        y: rect.y.clamp(parent.y, max_y),
        ..rect
    }
}

/// Picks the candidate whose center is nearest the active rectangle's center.
///
/// Ties resolve to the earliest candidate; an empty candidate list yields
/// `None`. Callers pass only valid siblings, so the winner is always a legal
/// drop target.
#[must_use]
pub fn closest_center<I: Clone>(active: &Rect, candidates: &[(I, Rect)]) -> Option<I> {
    let (ax, ay) = active.center();
    let mut best: Option<(&I, f64)> = None;

    for (id, rect) in candidates {
        let (cx, cy) = rect.center();
        let distance = ((cx - ax).powi(2) + (cy - ay).powi(2)).sqrt();
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((id, distance));
        }
    }

    best.map(|(id, _)| id.clone())
}

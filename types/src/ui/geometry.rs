//! Vertical page geometry.
//!
//! The page is a single column; only vertical extents matter for visibility.
//! Units are abstract (terminal rows in the TUI).

/// A region of the page in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: i32,
    pub height: u32,
}

impl Region {
    #[must_use]
    pub const fn new(top: i32, height: u32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(self) -> i64 {
        i64::from(self.top) + i64::from(self.height)
    }
}

/// The visible window onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub scroll_top: i32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(scroll_top: i32, height: u32) -> Self {
        Self { scroll_top, height }
    }

    /// The viewport grown by `margin` on both edges (shrunk when negative).
    ///
    /// Returns `(top, bottom)` as a half-open interval, or `None` when a
    /// negative margin collapses the box.
    #[must_use]
    pub fn margin_box(self, margin: i32) -> Option<(i64, i64)> {
        let top = i64::from(self.scroll_top) - i64::from(margin);
        let bottom = i64::from(self.scroll_top) + i64::from(self.height) + i64::from(margin);
        (bottom > top).then_some((top, bottom))
    }
}

/// Fraction of `region` inside the viewport's margin box, in `[0, 1]`.
///
/// A zero-height region counts as fully visible when its top lies inside
/// the box.
#[must_use]
pub fn visible_fraction(region: Region, viewport: Viewport, root_margin: i32) -> f64 {
    let Some((box_top, box_bottom)) = viewport.margin_box(root_margin) else {
        return 0.0;
    };

    let top = i64::from(region.top);
    if region.height == 0 {
        return if (box_top..box_bottom).contains(&top) {
            1.0
        } else {
            0.0
        };
    }

    let overlap = region.bottom().min(box_bottom) - top.max(box_top);
    if overlap <= 0 {
        return 0.0;
    }
    (overlap as f64 / f64::from(region.height)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::{Region, Viewport, visible_fraction};

    #[test]
    fn fully_inside() {
        let f = visible_fraction(Region::new(2, 4), Viewport::new(0, 20), 0);
        assert!((f - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn below_the_fold() {
        let f = visible_fraction(Region::new(30, 5), Viewport::new(0, 20), 0);
        assert!(f.abs() < f64::EPSILON);
    }

    #[test]
    fn partially_visible() {
        // Rows 18..22 against a viewport of rows 0..20: two of four rows show.
        let f = visible_fraction(Region::new(18, 4), Viewport::new(0, 20), 0);
        assert!((f - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn positive_margin_reaches_below_the_fold() {
        let region = Region::new(21, 4);
        let viewport = Viewport::new(0, 20);
        assert!(visible_fraction(region, viewport, 0).abs() < f64::EPSILON);
        assert!(visible_fraction(region, viewport, 3) > 0.0);
    }

    #[test]
    fn negative_margin_shrinks_the_box() {
        let region = Region::new(18, 2);
        let viewport = Viewport::new(0, 20);
        assert!(visible_fraction(region, viewport, 0) > 0.0);
        assert!(visible_fraction(region, viewport, -2).abs() < f64::EPSILON);
    }

    #[test]
    fn collapsed_margin_box_sees_nothing() {
        let f = visible_fraction(Region::new(0, 10), Viewport::new(0, 4), -5);
        assert!(f.abs() < f64::EPSILON);
    }

    #[test]
    fn zero_height_region() {
        let viewport = Viewport::new(10, 10);
        assert!((visible_fraction(Region::new(12, 0), viewport, 0) - 1.0).abs() < f64::EPSILON);
        assert!(visible_fraction(Region::new(25, 0), viewport, 0).abs() < f64::EPSILON);
    }
}

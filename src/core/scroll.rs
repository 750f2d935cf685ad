//! Keeps the edit point inside the scrolling viewport.
//!
//! Pure geometry: the view measures the scroll container and the cursor
//! element, and applies whatever offset [`ScrollController::adjust`] returns.

/// Scroll container metrics, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
    pub content_height: f64,
}

impl Viewport {
    fn max_scroll(&self) -> f64 {
        (self.content_height - self.height).max(0.0)
    }

    /// True when the content overflows vertically.
    pub fn is_constrained(&self) -> bool {
        self.content_height > self.height
    }
}

/// Vertical extent of the cursor, relative to the top of the content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EditPoint {
    pub top: f64,
    pub bottom: f64,
}

/// What caused the view to re-check the scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTrigger {
    OutputChanged,
    BufferChanged,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollController;

impl ScrollController {
    /// Output changes always re-check; buffer edits only when the viewport
    /// is vertically constrained.
    pub fn should_adjust(trigger: ScrollTrigger, constrained: bool) -> bool {
        match trigger {
            ScrollTrigger::OutputChanged => true,
            ScrollTrigger::BufferChanged => constrained,
        }
    }

    /// New `scroll_top` that brings `point` fully into view, or `None` when it
    /// already is. One application always suffices.
    pub fn adjust(viewport: Viewport, point: EditPoint) -> Option<f64> {
        let visible_bottom = viewport.scroll_top + viewport.height;

        let target = if point.bottom > visible_bottom {
            point.bottom - viewport.height
        } else if point.top < viewport.scroll_top {
            point.top
        } else {
            return None;
        };

        let target = target.clamp(0.0, viewport.max_scroll());
        (target != viewport.scroll_top).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_top: f64) -> Viewport {
        Viewport {
            scroll_top,
            height: 100.0,
            content_height: 500.0,
        }
    }

    fn point(top: f64) -> EditPoint {
        EditPoint {
            top,
            bottom: top + 20.0,
        }
    }

    #[test]
    fn test_visible_point_needs_no_adjustment() {
        assert_eq!(ScrollController::adjust(viewport(0.0), point(40.0)), None);
        assert_eq!(ScrollController::adjust(viewport(0.0), point(80.0)), None);
    }

    #[test]
    fn test_point_below_scrolls_down() {
        assert_eq!(
            ScrollController::adjust(viewport(0.0), point(480.0)),
            Some(400.0)
        );
    }

    #[test]
    fn test_point_above_scrolls_up() {
        assert_eq!(
            ScrollController::adjust(viewport(300.0), point(120.0)),
            Some(120.0)
        );
    }

    #[test]
    fn test_converges_in_one_step() {
        for (scroll_top, top) in [(0.0, 480.0), (300.0, 0.0), (200.0, 250.0), (0.0, 90.0)] {
            let mut v = viewport(scroll_top);
            let p = point(top);
            if let Some(next) = ScrollController::adjust(v, p) {
                v.scroll_top = next;
            }
            assert_eq!(ScrollController::adjust(v, p), None);
            assert!(p.top >= v.scroll_top && p.bottom <= v.scroll_top + v.height);
        }
    }

    #[test]
    fn test_target_clamped_to_content() {
        let v = Viewport {
            scroll_top: 0.0,
            height: 100.0,
            content_height: 110.0,
        };
        assert_eq!(ScrollController::adjust(v, point(95.0)), Some(10.0));
    }

    #[test]
    fn test_should_adjust() {
        assert!(ScrollController::should_adjust(ScrollTrigger::OutputChanged, false));
        assert!(ScrollController::should_adjust(ScrollTrigger::BufferChanged, true));
        assert!(!ScrollController::should_adjust(ScrollTrigger::BufferChanged, false));
    }
}

/// A point on the target element or on the viewport, as a fraction of its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    #[cfg_attr(not(test), allow(dead_code))]
    Center,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
        }
    }
}

/// "When this edge of the target meets that edge of the viewport".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub target: Edge,
    pub viewport: Edge,
}

/// Scroll runway over which a section's progress goes from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ScrollRange {
    /// From the section's top entering at the bottom of the screen until its
    /// bottom leaves through the top.
    pub const ENTER_EXIT: Self = Self::new(Edge::Start, Edge::End, Edge::End, Edge::Start);
    /// While a tall section with a sticky child is pinned to the viewport.
    pub const PINNED: Self = Self::new(Edge::Start, Edge::Start, Edge::End, Edge::End);
    /// From the section's top at the top of the screen until its bottom leaves.
    pub const LEAVING: Self = Self::new(Edge::Start, Edge::Start, Edge::End, Edge::Start);

    pub const fn new(start_target: Edge, start_viewport: Edge, end_target: Edge, end_viewport: Edge) -> Self {
        Self {
            start: ScrollOffset { target: start_target, viewport: start_viewport },
            end: ScrollOffset { target: end_target, viewport: end_viewport },
        }
    }
}

/// Raw progress of a section through `range`, not clamped.
///
/// `top` and `height` are the element's bounding box relative to the viewport
/// (as `getBoundingClientRect` reports them). Returns `None` when there is no
/// runway to scroll through, e.g. a collapsed zero-height container.
pub fn section_progress(top: f64, height: f64, viewport_height: f64, range: ScrollRange) -> Option<f64> {
    // signed distance left to scroll before each offset is reached
    let remaining = |offset: ScrollOffset| {
        top + offset.target.fraction() * height - offset.viewport.fraction() * viewport_height
    };
    let to_start = remaining(range.start);
    let runway = remaining(range.end) - to_start;
    if !runway.is_finite() || runway <= 0.0 {
        return None;
    }
    let progress = -to_start / runway;
    progress.is_finite().then_some(progress)
}

/// [`section_progress`] held to `[0, 1]`, so an off-screen section rests at
/// one end instead of driving its animation past it.
pub fn clamped_section_progress(top: f64, height: f64, viewport_height: f64, range: ScrollRange) -> Option<f64> {
    section_progress(top, height, viewport_height, range).map(|progress| progress.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    #[test]
    fn enter_exit_spans_section_plus_viewport() {
        let range = ScrollRange::ENTER_EXIT;
        // top edge just touching the bottom of the screen
        assert_eq!(section_progress(800.0, 1200.0, VIEWPORT, range), Some(0.0));
        // bottom edge just leaving the top of the screen
        assert_eq!(section_progress(-1200.0, 1200.0, VIEWPORT, range), Some(1.0));
        assert_eq!(section_progress(-200.0, 1200.0, VIEWPORT, range), Some(0.5));
    }

    #[test]
    fn pinned_spans_overflow_only() {
        let range = ScrollRange::PINNED;
        // 250vh section: 1200px of pinned runway
        assert_eq!(section_progress(0.0, 2000.0, VIEWPORT, range), Some(0.0));
        assert_eq!(section_progress(-600.0, 2000.0, VIEWPORT, range), Some(0.5));
        assert_eq!(section_progress(-1200.0, 2000.0, VIEWPORT, range), Some(1.0));
    }

    #[test]
    fn leaving_spans_section_height() {
        let range = ScrollRange::LEAVING;
        assert_eq!(section_progress(0.0, 1000.0, VIEWPORT, range), Some(0.0));
        assert_eq!(section_progress(-250.0, 1000.0, VIEWPORT, range), Some(0.25));
    }

    #[test]
    fn centre_line_range() {
        // section passes across the middle of the screen
        let range = ScrollRange::new(Edge::Start, Edge::Center, Edge::End, Edge::Center);
        assert_eq!(section_progress(400.0, 1000.0, VIEWPORT, range), Some(0.0));
        assert_eq!(section_progress(-100.0, 1000.0, VIEWPORT, range), Some(0.5));
        assert_eq!(section_progress(-600.0, 1000.0, VIEWPORT, range), Some(1.0));
    }

    #[test]
    fn outside_the_runway_is_not_clamped() {
        let before = section_progress(400.0, 2000.0, VIEWPORT, ScrollRange::PINNED).unwrap();
        let after = section_progress(-1800.0, 2000.0, VIEWPORT, ScrollRange::PINNED).unwrap();
        assert!(before < 0.0);
        assert!(after > 1.0);
    }

    #[test]
    fn clamped_progress_rests_at_the_ends() {
        let range = ScrollRange::ENTER_EXIT;
        // card far below the fold reads below zero unclamped
        assert_eq!(section_progress(4400.0, 1200.0, VIEWPORT, range), Some(-1.8));
        assert_eq!(clamped_section_progress(4400.0, 1200.0, VIEWPORT, range), Some(0.0));
        assert_eq!(clamped_section_progress(-5000.0, 1200.0, VIEWPORT, range), Some(1.0));
        assert_eq!(clamped_section_progress(-200.0, 1200.0, VIEWPORT, range), Some(0.5));
        assert_eq!(clamped_section_progress(0.0, 0.0, VIEWPORT, ScrollRange::LEAVING), None);
    }

    #[test]
    fn no_runway_gives_none() {
        // collapsed container
        assert_eq!(section_progress(0.0, 0.0, VIEWPORT, ScrollRange::LEAVING), None);
        // section shorter than the viewport cannot be pinned
        assert_eq!(section_progress(0.0, 600.0, VIEWPORT, ScrollRange::PINNED), None);
        assert_eq!(section_progress(f64::NAN, 600.0, VIEWPORT, ScrollRange::ENTER_EXIT), None);
    }
}

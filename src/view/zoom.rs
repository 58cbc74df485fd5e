//! Zoom and pan state for the schematic image
//!
//! The schematic can be toggled between fitted and 2× zoom by clicking, and
//! panned by dragging while zoomed. A click that follows a drag of more than
//! five pixels is swallowed so releasing a pan gesture does not zoom back
//! out. The recenter scroll computed on zoom-in must be applied *after* the
//! zoomed layout has been committed, so it is returned to the caller rather
//! than applied here; browser hosts run it on a zero-delay timer.

/// Pixel-space point
type Point = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    press: Point,
    scroll_start: Point,
}

/// Result of a click on the schematic
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// The click ended a drag gesture; ignore it
    Suppressed,
    /// Zoomed in; scroll the viewport to `scroll_to` after the next render
    ZoomedIn {
        /// Target `(scroll_left, scroll_top)` centering the clicked point
        scroll_to: Point,
    },
    /// Zoomed back out to the fitted view
    ZoomedOut,
}

/// Zoom/pan state machine for the schematic viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomPan {
    zoomed: bool,
    drag: Option<Drag>,
    has_dragged: bool,
}

impl ZoomPan {
    /// Magnification applied when zoomed in
    pub const ZOOM_FACTOR: f64 = 2.0;
    /// Movement (pixels, either axis) before a gesture counts as a drag
    pub const DRAG_THRESHOLD: f64 = 5.0;

    pub fn new() -> Self {
        ZoomPan::default()
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer press at viewport position `press`, with the viewport
    /// currently scrolled to `scroll`. Starts a pan gesture when zoomed;
    /// does nothing otherwise.
    pub fn press(&mut self, press: Point, scroll: Point) {
        if !self.zoomed {
            return;
        }
        self.drag = Some(Drag {
            press,
            scroll_start: scroll,
        });
        self.has_dragged = false;
    }

    /// Pointer move during a gesture
    ///
    /// Returns the scroll offsets to apply, or `None` when no gesture is
    /// active. Dragging the pointer left scrolls the content right: the new
    /// offset is the starting offset plus the press-to-pointer delta.
    pub fn drag_to(&mut self, position: Point) -> Option<Point> {
        let drag = self.drag?;
        let delta = (drag.press.0 - position.0, drag.press.1 - position.1);
        if delta.0.abs() > Self::DRAG_THRESHOLD || delta.1.abs() > Self::DRAG_THRESHOLD {
            self.has_dragged = true;
        }
        Some((
            drag.scroll_start.0 + delta.0,
            drag.scroll_start.1 + delta.1,
        ))
    }

    /// Pointer release; the gesture ends but a completed drag keeps its
    /// mark so the click that follows can be suppressed
    pub fn release(&mut self) {
        self.drag = None;
    }

    /// Pointer left the viewport; cancels any gesture
    pub fn leave(&mut self) {
        self.drag = None;
    }

    /// Click at viewport position `at` inside a viewport of `size`
    ///
    /// Zooming in centers the clicked point: at 2× the point lands at
    /// `at · 2`, and scrolling by `at · 2 − size / 2` (clamped at the
    /// origin) puts it mid-viewport.
    pub fn click(&mut self, at: Point, size: Point) -> ClickOutcome {
        if self.has_dragged {
            self.has_dragged = false;
            return ClickOutcome::Suppressed;
        }
        if self.zoomed {
            self.zoomed = false;
            ClickOutcome::ZoomedOut
        } else {
            self.zoomed = true;
            ClickOutcome::ZoomedIn {
                scroll_to: (
                    (at.0 * Self::ZOOM_FACTOR - size.0 / 2.0).max(0.0),
                    (at.1 * Self::ZOOM_FACTOR - size.1 / 2.0).max(0.0),
                ),
            }
        }
    }
}

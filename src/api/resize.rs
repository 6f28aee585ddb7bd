use crate::core::Viewport;

/// In-flight viewport interpolation started by `PlotEngine::resize`.
///
/// Stepping is host-driven and deterministic: the engine never owns a clock,
/// it only accumulates the elapsed time the host reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeTransition {
    pub(super) from: Viewport,
    pub(super) to: Viewport,
    pub(super) elapsed_seconds: f64,
    pub(super) duration_seconds: f64,
}

impl ResizeTransition {
    pub(super) fn new(from: Viewport, to: Viewport, duration_seconds: f64) -> Self {
        Self {
            from,
            to,
            elapsed_seconds: 0.0,
            duration_seconds,
        }
    }

    #[must_use]
    pub fn source(&self) -> Viewport {
        self.from
    }

    #[must_use]
    pub fn target(&self) -> Viewport {
        self.to
    }

    /// Raw progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.elapsed_seconds / self.duration_seconds).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed_seconds >= self.duration_seconds
    }

    /// Viewport at the current eased progress, rounded to whole pixels.
    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        let eased = ease_in_out_cubic(self.progress());
        let lerp = |a: u32, b: u32| -> u32 {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * eased;
            value.round().max(1.0) as u32
        };
        Viewport::new(
            lerp(self.from.width, self.to.width),
            lerp(self.from.height, self.to.height),
        )
    }
}

/// Cubic in-out easing; monotonic on [0, 1] with fixed endpoints.
pub(super) fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

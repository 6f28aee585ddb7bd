use crate::core::{AxisScale, ScaleKind};

pub(super) const X_TICK_TARGET_SPACING_PX: f64 = 80.0;
pub(super) const Y_TICK_TARGET_SPACING_PX: f64 = 50.0;

pub(super) fn tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Selects tick positions in domain units for one axis.
pub(super) fn select_ticks(scale: AxisScale, target_count: usize) -> Vec<f64> {
    let (start, end) = scale.domain();
    let (min, max) = if start <= end { (start, end) } else { (end, start) };

    match scale.kind() {
        ScaleKind::Linear => linear_ticks(min, max, target_count),
        ScaleKind::Log => log_ticks(min, max, target_count),
    }
}

/// "Nice" linear ticks on 1/2/5 x 10^k steps covering [min, max].
fn linear_ticks(min: f64, max: f64, target_count: usize) -> Vec<f64> {
    let span = max - min;
    if span <= 0.0 {
        return vec![min];
    }

    let step = nice_step(span / target_count.max(1) as f64);
    let first = (min / step).ceil() * step;

    // Ticks are derived from an index, not accumulated: when `step` falls
    // below the float ULP at the domain magnitude, `tick += step` would
    // never advance.
    let mut ticks = Vec::new();
    for index in 0.. {
        let tick = first + index as f64 * step;
        // Epsilon guards the endpoint against float rounding.
        if tick > max + step * 1e-9 {
            break;
        }
        ticks.push(tick);
    }
    ticks.dedup();
    ticks
}

/// Powers of ten spanning [min, max], thinned to the target count.
fn log_ticks(min: f64, max: f64, target_count: usize) -> Vec<f64> {
    if min <= 0.0 || max <= 0.0 {
        return Vec::new();
    }

    let first_decade = min.log10().ceil() as i32;
    let last_decade = max.log10().floor() as i32;
    if first_decade > last_decade {
        // Domain within a single decade; fall back to linear subdivision.
        return linear_ticks(min, max, target_count);
    }

    let decades: Vec<f64> = (first_decade..=last_decade)
        .map(|exp| 10f64.powi(exp))
        .collect();
    if decades.len() <= target_count.max(1) {
        return decades;
    }

    let stride = decades.len().div_ceil(target_count.max(1));
    let last = decades[decades.len() - 1];
    let mut thinned: Vec<f64> = decades.into_iter().step_by(stride).collect();
    // Striding may skip the top decade; the domain boundary tick stays.
    if thinned.last() != Some(&last) {
        thinned.push(last);
    }
    thinned
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual < 1.5 {
        1.0
    } else if residual < 3.0 {
        2.0
    } else if residual < 7.0 {
        5.0
    } else {
        10.0
    };
    magnitude * factor
}

/// Compact tick label: plain decimal in a readable range, scientific outside.
pub(super) fn format_tick_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if (1e-3..1e5).contains(&magnitude) {
        let formatted = format!("{value:.4}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_owned()
    } else {
        format!("{value:e}")
    }
}

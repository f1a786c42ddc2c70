/// Linear value axis starting at zero, rounded up to a "nice" maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiceScale {
    pub max: f64,
    pub step: f64,
}

impl NiceScale {
    /// Tick values from 0 to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let n = (self.max / self.step).round() as usize;
        (0..=n).map(|i| i as f64 * self.step).collect()
    }

    /// Fraction of the axis covered by `value`, clamped to 0..=1.
    pub fn ratio(&self, value: f64) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (value / self.max).clamp(0.0, 1.0)
    }
}

/// Chooses a step of 1, 2, 2.5 or 5 times a power of ten so that roughly
/// `tick_count` intervals cover `max_value`.
pub fn nice_scale(max_value: f64, tick_count: usize) -> NiceScale {
    let tick_count = tick_count.max(1) as f64;
    if !max_value.is_finite() || max_value <= 0.0 {
        return NiceScale {
            max: tick_count,
            step: 1.0,
        };
    }

    let raw_step = max_value / tick_count;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let residual = raw_step / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 2.5 {
        2.5
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };

    let step = nice * magnitude;
    NiceScale {
        max: (max_value / step).ceil() * step,
        step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_scale_for_revenue() {
        let scale = nice_scale(422400.0, 4);
        assert_eq!(scale.step, 200000.0);
        assert_eq!(scale.max, 600000.0);
        assert_eq!(scale.ticks(), vec![0.0, 200000.0, 400000.0, 600000.0]);
    }

    #[test]
    fn test_nice_scale_exact_multiple() {
        let scale = nice_scale(100.0, 5);
        assert_eq!(scale.step, 20.0);
        assert_eq!(scale.max, 100.0);
    }

    #[test]
    fn test_nice_scale_degenerate_input() {
        let scale = nice_scale(0.0, 4);
        assert_eq!(scale.max, 4.0);
        assert_eq!(scale.ratio(2.0), 0.5);
        assert_eq!(nice_scale(f64::NAN, 4).max, 4.0);
    }

    #[test]
    fn test_ratio_is_clamped() {
        let scale = nice_scale(422400.0, 4);
        assert_eq!(scale.ratio(-5.0), 0.0);
        assert_eq!(scale.ratio(1e9), 1.0);
        assert_eq!(scale.ratio(300000.0), 0.5);
    }
}

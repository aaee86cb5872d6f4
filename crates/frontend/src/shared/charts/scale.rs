//! Value-to-pixel mapping for the SVG charts

/// Maps `0..=max` onto `0..=range` pixels.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    max: f64,
    range: f64,
}

impl LinearScale {
    /// A non-positive `max` is clamped to 1 so empty datasets still
    /// produce a drawable (flat) axis.
    pub fn new(max: f64, range: f64) -> Self {
        Self {
            max: if max > 0.0 { max } else { 1.0 },
            range,
        }
    }

    pub fn position(&self, value: f64) -> f64 {
        (value / self.max) * self.range
    }
}

/// Round tick values for a 0-based axis: a 1/2/5-stepped sequence from
/// zero up to (at least) `max`.
pub fn nice_ticks(max: f64, target: usize) -> Vec<f64> {
    if max <= 0.0 {
        return vec![0.0];
    }

    let raw_step = max / target.max(1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    } * magnitude;

    let mut ticks = Vec::new();
    let mut tick = 0.0;
    while tick < max + step {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_proportionally() {
        let scale = LinearScale::new(200.0, 100.0);
        assert_eq!(scale.position(0.0), 0.0);
        assert_eq!(scale.position(100.0), 50.0);
        assert_eq!(scale.position(200.0), 100.0);
    }

    #[test]
    fn scale_survives_empty_domain() {
        let scale = LinearScale::new(0.0, 100.0);
        assert_eq!(scale.position(0.0), 0.0);
    }

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(nice_ticks(100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(nice_ticks(7.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn ticks_cover_the_maximum() {
        for max in [3.0, 42.0, 999.0, 123_456.0] {
            let ticks = nice_ticks(max, 5);
            assert_eq!(ticks[0], 0.0);
            assert!(*ticks.last().unwrap() >= max);
        }
    }

    #[test]
    fn ticks_for_zero_max_is_just_origin() {
        assert_eq!(nice_ticks(0.0, 5), vec![0.0]);
    }
}

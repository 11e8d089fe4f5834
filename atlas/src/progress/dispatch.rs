use super::{Kind, Mode, ProgressValue};

/// The render strategy a configuration maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// SVG circle whose dash length tracks the value.
    Circular,
    /// One span translated to `from` and scaled to `to - from`.
    Range { from: f64, to: f64 },
    /// Buffer and value spans scaled along X.
    Linear,
}

/// Outcome of strategy selection for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispatch {
    pub strategy: Strategy,
    pub mode: Mode,
}

impl Dispatch {
    /// Whether value-based styling is skipped in favour of the looping
    /// indeterminate visual. Ranges always compute their transform.
    pub fn is_time_based(&self) -> bool {
        self.mode == Mode::Indeterminate && !matches!(self.strategy, Strategy::Range { .. })
    }
}

/// Select a render strategy.
///
/// Circular wins over everything, so a circular range still renders as a
/// circle. Otherwise a range value selects the range strategy and the rest
/// falls back to linear. Every input maps to exactly one strategy.
pub fn dispatch(kind: Kind, mode: Mode, value: ProgressValue) -> Dispatch {
    let strategy = match (kind, value) {
        (Kind::Circular, _) => Strategy::Circular,
        (Kind::Linear, ProgressValue::Range { from, to }) => Strategy::Range { from, to },
        (Kind::Linear, ProgressValue::Determinate(_)) => Strategy::Linear,
    };
    Dispatch { strategy, mode }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_takes_precedence() {
        for mode in [Mode::Determinate, Mode::Indeterminate] {
            for value in [ProgressValue::Determinate(5.0), ProgressValue::range(1.0, 2.0)] {
                assert_eq!(dispatch(Kind::Circular, mode, value).strategy, Strategy::Circular);
            }
        }
    }

    #[test]
    fn test_range_before_linear() {
        let d = dispatch(Kind::Linear, Mode::Determinate, ProgressValue::range(10.0, 80.0));
        assert_eq!(d.strategy, Strategy::Range { from: 10.0, to: 80.0 });
    }

    #[test]
    fn test_linear_fallback() {
        let d = dispatch(Kind::Linear, Mode::Indeterminate, ProgressValue::Determinate(3.0));
        assert_eq!(d.strategy, Strategy::Linear);
        assert!(d.is_time_based());
    }

    #[test]
    fn test_range_is_never_time_based() {
        let d = dispatch(Kind::Linear, Mode::Indeterminate, ProgressValue::range(0.0, 1.0));
        assert!(!d.is_time_based());
    }
}

/// Easing curves used by the storefront, played as CSS cubic-bezier
/// approximations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3Out,
    /// Overshooting ease-out; the payload is the overshoot strength (1.7 is the
    /// classic "back" curve).
    BackOut(f64),
}

impl Ease {
    pub fn css(&self) -> String {
        match self {
            Ease::Linear => "linear".to_string(),
            Ease::Power2In => "cubic-bezier(0.32, 0, 0.67, 0)".to_string(),
            Ease::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)".to_string(),
            Ease::Power2InOut => "cubic-bezier(0.65, 0, 0.35, 1)".to_string(),
            Ease::Power3Out => "cubic-bezier(0.25, 1, 0.5, 1)".to_string(),
            Ease::BackOut(overshoot) => {
                let lift = 1.0 + overshoot.max(0.0) * 0.33;
                format!("cubic-bezier(0.34, {:.2}, 0.64, 1)", lift)
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power2Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_out_overshoot_scales_control_point() {
        assert_eq!(Ease::BackOut(1.7).css(), "cubic-bezier(0.34, 1.56, 0.64, 1)");
        assert_eq!(Ease::BackOut(1.2).css(), "cubic-bezier(0.34, 1.40, 0.64, 1)");
        assert_eq!(Ease::BackOut(-3.0).css(), "cubic-bezier(0.34, 1.00, 0.64, 1)");
    }

    #[test]
    fn power_curves_are_cubic_beziers() {
        for ease in [Ease::Power2In, Ease::Power2Out, Ease::Power2InOut, Ease::Power3Out] {
            assert!(ease.css().starts_with("cubic-bezier("));
        }
        assert_eq!(Ease::Linear.css(), "linear");
    }
}

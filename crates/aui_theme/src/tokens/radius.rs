//! Corner radius steps

use aui_paint::Size;

/// Magnitude carried by [`RadiusStep::Full`]; resolved against bounds at draw time
pub const FULL_RADIUS_SENTINEL: f32 = 9999.0;

/// One step of the design-system corner radius scale (values in dp)
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum RadiusStep {
    None,
    Xxs,
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    TwoXl,
    ThreeXl,
    FourXl,
    FiveXl,
    /// Fully round: half of the shorter side (pill or circle)
    Full,
}

impl RadiusStep {
    /// Every step, smallest first
    pub const ALL: [RadiusStep; 12] = [
        RadiusStep::None,
        RadiusStep::Xxs,
        RadiusStep::Xs,
        RadiusStep::Sm,
        RadiusStep::Md,
        RadiusStep::Lg,
        RadiusStep::Xl,
        RadiusStep::TwoXl,
        RadiusStep::ThreeXl,
        RadiusStep::FourXl,
        RadiusStep::FiveXl,
        RadiusStep::Full,
    ];

    /// Nominal magnitude. `Full` returns [`FULL_RADIUS_SENTINEL`].
    pub const fn value(self) -> f32 {
        match self {
            RadiusStep::None => 0.0,
            RadiusStep::Xxs => 2.0,
            RadiusStep::Xs => 4.0,
            RadiusStep::Sm => 6.0,
            RadiusStep::Md => 8.0,
            RadiusStep::Lg => 10.0,
            RadiusStep::Xl => 12.0,
            RadiusStep::TwoXl => 16.0,
            RadiusStep::ThreeXl => 20.0,
            RadiusStep::FourXl => 24.0,
            RadiusStep::FiveXl => 28.0,
            RadiusStep::Full => FULL_RADIUS_SENTINEL,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RadiusStep::None => "none",
            RadiusStep::Xxs => "xxs",
            RadiusStep::Xs => "xs",
            RadiusStep::Sm => "sm",
            RadiusStep::Md => "md",
            RadiusStep::Lg => "lg",
            RadiusStep::Xl => "xl",
            RadiusStep::TwoXl => "2xl",
            RadiusStep::ThreeXl => "3xl",
            RadiusStep::FourXl => "4xl",
            RadiusStep::FiveXl => "5xl",
            RadiusStep::Full => "full",
        }
    }

    pub const fn is_full(self) -> bool {
        matches!(self, RadiusStep::Full)
    }

    /// Radius to draw inside `bounds`: the nominal value, or the
    /// inscribed-circle radius for `Full`.
    pub fn resolve(self, bounds: Size) -> f32 {
        if self.is_full() {
            bounds.inscribed_radius()
        } else {
            self.value()
        }
    }

    /// Step with the given nominal magnitude, `Md` when there is none
    pub fn from_value(value: i32) -> RadiusStep {
        Self::ALL
            .into_iter()
            .find(|step| step.value() as i32 == value)
            .unwrap_or_default()
    }

    /// Step with the given name (case-insensitive), `Md` when there is none
    pub fn from_name(name: &str) -> RadiusStep {
        Self::ALL
            .into_iter()
            .find(|step| step.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for RadiusStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_ordered_by_value() {
        for pair in RadiusStep::ALL.windows(2) {
            assert!(pair[0].value() < pair[1].value(), "{pair:?}");
        }
    }

    #[test]
    fn test_from_value_falls_back_to_md() {
        assert_eq!(RadiusStep::from_value(4), RadiusStep::Xs);
        assert_eq!(RadiusStep::from_value(9999), RadiusStep::Full);
        assert_eq!(RadiusStep::from_value(7), RadiusStep::Md);
        assert_eq!(RadiusStep::from_value(-1), RadiusStep::Md);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(RadiusStep::from_name("2xl"), RadiusStep::TwoXl);
        assert_eq!(RadiusStep::from_name("FULL"), RadiusStep::Full);
        assert_eq!(RadiusStep::from_name("huge"), RadiusStep::Md);
    }

    #[test]
    fn test_resolve_full_uses_inscribed_radius() {
        let bounds = Size::new(100.0, 60.0);
        assert_eq!(RadiusStep::Full.resolve(bounds), 30.0);
        assert_eq!(RadiusStep::Lg.resolve(bounds), 10.0);
        assert_eq!(RadiusStep::Full.resolve(Size::ZERO), 0.0);
    }

    #[test]
    fn test_default_is_md() {
        assert_eq!(RadiusStep::default(), RadiusStep::Md);
    }
}

//! Appearance modes

/// Day (light) or night (dark) theme variant
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Appearance {
    #[default]
    Day,
    Night,
}

impl Appearance {
    pub fn is_night(self) -> bool {
        self == Appearance::Night
    }

    /// The other appearance
    pub fn toggled(self) -> Self {
        match self {
            Appearance::Day => Appearance::Night,
            Appearance::Night => Appearance::Day,
        }
    }

    /// Table name used in provider files (`day` / `night`)
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Day => "day",
            Appearance::Night => "night",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_appearance() {
        assert_eq!(Appearance::default(), Appearance::Day);
        assert_eq!(Appearance::Day.toggled(), Appearance::Night);
        assert_eq!(Appearance::Night.toggled(), Appearance::Day);
        assert!(Appearance::Day.toggled().is_night());
        assert_eq!(Appearance::Night.as_str(), "night");
    }
}

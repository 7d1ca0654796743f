//! Rounding structures and subroutines

use crate::Sign;


/// Determines how to treat the digits dropped when reducing the scale
/// of a decimal
///
/// Only directional modes exist; generating ranks never needs to round
/// to a nearest neighbour. Examples use base-10 digits.
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum RoundingMode {
    /// Always round away from zero
    ///
    /// * 5.5 → 6
    /// * 1.1 → 2
    /// * 1.0 → 1
    /// * -1.1 → -2
    /// * -5.5 → -6
    Up,

    /// Always round towards zero
    ///
    /// * 5.5 → 5
    /// * 1.1 → 1
    /// * 1.0 → 1
    /// * -1.1 → -1
    /// * -5.5 → -5
    Down,

    /// Towards +∞
    ///
    /// * 5.5 → 6
    /// * 1.1 → 2
    /// * 1.0 → 1
    /// * -1.1 → -1
    /// * -5.5 → -5
    Ceiling,

    /// Towards -∞
    ///
    /// * 5.5 → 5
    /// * 1.1 → 1
    /// * 1.0 → 1
    /// * -1.1 → -2
    /// * -5.5 → -6
    Floor,
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::Floor
    }
}

impl RoundingMode {
    /// Decide whether a truncated magnitude must grow by one unit
    ///
    /// Parameters
    /// ----------
    /// * sign (Sign) - Sign of the number being rounded
    /// * discarded_nonzero (bool) - True if any dropped digit was non-zero
    ///
    /// Returns
    /// -------
    /// True when the magnitude left after truncation must be incremented,
    /// i.e. the result moves away from zero.
    ///
    /// Examples
    /// --------
    /// - Rounding 1.1 to scale 0 with Ceiling: `Plus, true` → true (2)
    /// - Rounding -1.1 to scale 0 with Ceiling: `Minus, true` → false (-1)
    /// - Rounding 3.0 with any mode: `Plus, false` → false
    ///
    pub fn rounds_away_from_zero(self, sign: Sign, discarded_nonzero: bool) -> bool {
        use self::RoundingMode::*;

        if !discarded_nonzero {
            return false;
        }
        match (self, sign) {
            (Up, _) => true,
            (Down, _) => false,
            (Ceiling, Sign::Minus) => false,
            (Ceiling, _) => true,
            (Floor, Sign::Minus) => true,
            (Floor, _) => false,
        }
    }

    /// Ceiling if 'up' is true, else Floor
    pub(crate) fn directional(up: bool) -> Self {
        if up { RoundingMode::Ceiling } else { RoundingMode::Floor }
    }
}

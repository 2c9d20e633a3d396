use crate::bet::{OpenSize, ReplySize};
use crate::Currency;
use enum_map::{enum_map, EnumMap};

/// Immutable parameters of one game. Construct it once, pass it by
/// reference; nothing in the engine mutates it.
///
/// `raise_factors` are multipliers applied to the bet being answered: a
/// raise's excess over the required bet must equal
/// `round(required_bet * factor)` for one of the non-zero factors. The
/// `See` factor is zero, meaning "just match the bet".
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Cards run from 1 up to this rank inclusive.
    pub card_high_number: u8,
    /// Forced contribution from every player before the deal.
    pub ante_bet: Currency,
    /// The legal opening amounts.
    pub open_bets: EnumMap<OpenSize, Currency>,
    /// Multipliers that produce the legal raise excesses.
    pub raise_factors: EnumMap<ReplySize, f64>,
    /// How many raises a betting round may contain.
    pub max_raises: u32,
    /// Carry an unclaimed pot into the next hand instead of refunding antes.
    pub carry_pot: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        let ante = 10;
        Self {
            card_high_number: 9,
            ante_bet: ante,
            open_bets: enum_map! {
                OpenSize::Low => ante,
                OpenSize::Medium => ante * 2,
                OpenSize::High => ante * 5,
            },
            raise_factors: enum_map! {
                ReplySize::See => 0.0,
                ReplySize::Medium => 0.5,
                ReplySize::High => 1.0,
            },
            max_raises: 1,
            carry_pot: true,
        }
    }
}

impl GameConfig {
    pub fn is_legal_open(&self, amount: Currency) -> bool {
        self.open_bets.values().any(|&v| v == amount)
    }

    /// The amount added on top of `required_bet` when raising by `size`.
    /// Rounds half away from zero.
    pub fn raise_excess(&self, required_bet: Currency, size: ReplySize) -> Currency {
        (required_bet as f64 * self.raise_factors[size]).round() as Currency
    }

    /// A raise excess is legal when some non-zero factor produces it.
    pub fn is_legal_raise(&self, required_bet: Currency, excess: Currency) -> bool {
        excess > 0
            && self
                .raise_factors
                .iter()
                .any(|(size, &f)| f > 0.0 && self.raise_excess(required_bet, size) == excess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_open_amounts() {
        let c = GameConfig::default();
        assert!(c.is_legal_open(10));
        assert!(c.is_legal_open(20));
        assert!(c.is_legal_open(50));
        assert!(!c.is_legal_open(15));
        assert!(!c.is_legal_open(0));
    }

    #[test]
    fn raise_excess_rounds_half_up() {
        let c = GameConfig::default();
        assert_eq!(c.raise_excess(10, ReplySize::Medium), 5);
        assert_eq!(c.raise_excess(10, ReplySize::High), 10);
        assert_eq!(c.raise_excess(5, ReplySize::Medium), 3);
        assert_eq!(c.raise_excess(10, ReplySize::See), 0);
    }

    #[test]
    fn legal_raises() {
        let c = GameConfig::default();
        assert!(c.is_legal_raise(10, 5));
        assert!(c.is_legal_raise(10, 10));
        assert!(!c.is_legal_raise(10, 7));
        // matching the bet exactly is a see, not a raise
        assert!(!c.is_legal_raise(10, 0));
    }
}

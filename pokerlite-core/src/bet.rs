use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a turn's returned amount turned out to mean once classified
/// against the required bet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetKind {
    Ante,
    Check,
    Open,
    See,
    Raise,
    Fold,
}

impl BetKind {
    /// Opens and raises force every other active player to act again.
    pub const fn is_aggressive(&self) -> bool {
        matches!(self, BetKind::Open | BetKind::Raise)
    }
}

impl fmt::Display for BetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetKind::Ante => write!(f, "Ante"),
            BetKind::Check => write!(f, "Check"),
            BetKind::Open => write!(f, "Open"),
            BetKind::See => write!(f, "See"),
            BetKind::Raise => write!(f, "Raise"),
            BetKind::Fold => write!(f, "Fold"),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, PartialEq, Eq, Copy, Clone)]
pub enum BetError {
    NegativeBet,
    BelowRequiredBet,
    UnknownOpenAmount,
    UnknownRaiseAmount,
    RaiseNotAllowed,
}

/// The three sanctioned opening amounts. The concrete value of each is
/// set by [`GameConfig`](crate::config::GameConfig).
#[derive(Hash, Enum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenSize {
    Low,
    Medium,
    High,
}

impl fmt::Display for OpenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenSize::Low => write!(f, "L"),
            OpenSize::Medium => write!(f, "M"),
            OpenSize::High => write!(f, "H"),
        }
    }
}

/// How to answer a live bet: match it, or raise it by a configured
/// fraction of the amount being matched.
#[derive(Hash, Enum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplySize {
    See,
    Medium,
    High,
}

impl fmt::Display for ReplySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplySize::See => write!(f, "S"),
            ReplySize::Medium => write!(f, "M"),
            ReplySize::High => write!(f, "H"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggression() {
        assert!(BetKind::Open.is_aggressive());
        assert!(BetKind::Raise.is_aggressive());
        assert!(!BetKind::See.is_aggressive());
        assert!(!BetKind::Check.is_aggressive());
        assert!(!BetKind::Fold.is_aggressive());
        assert!(!BetKind::Ante.is_aggressive());
    }

    #[test]
    fn display() {
        assert_eq!(BetKind::See.to_string(), "See");
        assert_eq!(OpenSize::Low.to_string(), "L");
        assert_eq!(ReplySize::High.to_string(), "H");
    }
}

use crate::bet::BetKind;
use crate::{Currency, RoundNum};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One turn's worth of betting-round history. The engine appends one of
/// these per ante and per turn; strategies key off the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetRecord {
    pub round_number: RoundNum,
    /// Pot after the recorded action was applied.
    pub pot: Currency,
    pub bet_type: BetKind,
    pub player: String,
    pub amount: Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Description {
    GameStart,
    RoundStart,
    CardDealt,
    Bet(BetKind),
    Checked,
    Win,
}

impl From<BetKind> for Description {
    fn from(kind: BetKind) -> Self {
        Self::Bet(kind)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::GameStart => write!(f, "Game Start"),
            Description::RoundStart => write!(f, "Round Start"),
            Description::CardDealt => write!(f, "Card"),
            Description::Bet(kind) => write!(f, "{}", kind),
            Description::Checked => write!(f, "Checked"),
            Description::Win => write!(f, "Win"),
        }
    }
}

/// One entry of the game-wide audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub game_id: String,
    pub round_number: RoundNum,
    pub pot: Currency,
    pub description: Description,
    /// `None` for records that concern the whole table.
    pub player: Option<String>,
    pub value: Currency,
}

/// Append-only record of everything that happened in a game. Owned by the
/// game and handed to the engine by reference; prior entries are never
/// mutated or reordered.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    records: Vec<AuditRecord>,
}

impl AuditLog {
    pub fn push(&mut self, record: AuditRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    /// The subsequence belonging to one hand, in insertion order.
    pub fn round_records(&self, round_number: RoundNum) -> impl Iterator<Item = &AuditRecord> {
        self.records
            .iter()
            .filter(move |r| r.round_number == round_number)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AuditRecord {
        AuditRecord {
            game_id: "g1".to_string(),
            round_number: 3,
            pot: 30,
            description: Description::Bet(BetKind::Open),
            player: Some("player1".to_string()),
            value: 10,
        }
    }

    #[test]
    fn round_subsequence() {
        let mut log = AuditLog::default();
        log.push(AuditRecord {
            round_number: 1,
            ..record()
        });
        log.push(record());
        log.push(AuditRecord {
            description: Description::Win,
            ..record()
        });
        assert_eq!(log.round_records(3).count(), 2);
        assert_eq!(log.round_records(1).count(), 1);
        assert_eq!(log.round_records(2).count(), 0);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn descriptions_render_like_the_tables() {
        assert_eq!(Description::GameStart.to_string(), "Game Start");
        assert_eq!(Description::CardDealt.to_string(), "Card");
        assert_eq!(Description::Bet(BetKind::Raise).to_string(), "Raise");
    }

    #[test]
    fn record_roundtrips_through_json() {
        let r = record();
        let s = serde_json::to_string(&r).unwrap();
        let r2: AuditRecord = serde_json::from_str(&s).unwrap();
        assert_eq!(r, r2);
    }
}

use crate::board::Marker;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Win { name: String, marker: Marker },
    Tie,
}

/// One turn as it happened; `position` is `None` for a lost turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub player: String,
    pub position: Option<usize>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RoundRecord {
    pub round: usize,
    pub started_at: DateTime<Local>,
    pub turns: Vec<TurnRecord>,
    pub outcome: Option<Outcome>,
}

impl RoundRecord {
    pub fn start(round: usize) -> Self {
        RoundRecord {
            round,
            started_at: Local::now(),
            turns: Vec::new(),
            outcome: None,
        }
    }

    pub fn push_turn(&mut self, player: &str, position: Option<usize>) {
        self.turns.push(TurnRecord {
            player: player.to_owned(),
            position,
        });
    }

    pub fn forfeits(&self) -> usize {
        self.turns.iter().filter(|t| t.position.is_none()).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

//! Sport-specific live-scoring state, tagged by a `sport` discriminator.
//!
//! This is a capability surface for the score editors (volleyball set
//! trackers, basketball quarter trackers, ...); the bracket engine itself
//! only ever consumes the resulting `status`/`winner` on [`crate::Match`].

use serde::{Deserialize, Serialize};

/// Which side of a pairing scored or won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// One scored period: a set, quarter, or half depending on the sport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodScore {
    pub number: u32,
    pub home: u32,
    pub away: u32,
}

impl PeriodScore {
    pub fn leader(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Live score state for one match, keyed by sport.
///
/// Period semantics differ per sport: volleyball and table tennis count
/// periods won, the clock sports sum points, chess tracks moves and an
/// explicit outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sport", rename_all = "snake_case")]
pub enum LiveScore {
    #[serde(rename_all = "camelCase")]
    Volleyball { sets: Vec<PeriodScore>, current_set: u32 },
    #[serde(rename_all = "camelCase")]
    Basketball { quarters: Vec<PeriodScore>, current_quarter: u32 },
    #[serde(rename_all = "camelCase")]
    Futsal { halves: Vec<PeriodScore>, current_half: u32 },
    #[serde(rename_all = "camelCase")]
    Handball { halves: Vec<PeriodScore>, current_half: u32 },
    #[serde(rename_all = "camelCase")]
    TableTennis { sets: Vec<PeriodScore>, current_set: u32 },
    #[serde(rename_all = "camelCase")]
    Chess { moves: Vec<String>, result: Option<Side> },
}

impl LiveScore {
    pub fn sport_label(&self) -> &'static str {
        match self {
            LiveScore::Volleyball { .. } => "Volleyball",
            LiveScore::Basketball { .. } => "Basketball",
            LiveScore::Futsal { .. } => "Futsal",
            LiveScore::Handball { .. } => "Handball",
            LiveScore::TableTennis { .. } => "Table Tennis",
            LiveScore::Chess { .. } => "Chess",
        }
    }

    /// Aggregate (home, away) score as a scoreboard would headline it:
    /// periods won for set sports, summed points for clock sports, and
    /// 1-0 style from the recorded result for chess.
    pub fn totals(&self) -> (u32, u32) {
        match self {
            LiveScore::Volleyball { sets, .. } | LiveScore::TableTennis { sets, .. } => {
                sets.iter().fold((0, 0), |(h, a), set| match set.leader() {
                    Some(Side::Home) => (h + 1, a),
                    Some(Side::Away) => (h, a + 1),
                    None => (h, a),
                })
            }
            LiveScore::Basketball { quarters: periods, .. }
            | LiveScore::Futsal { halves: periods, .. }
            | LiveScore::Handball { halves: periods, .. } => periods
                .iter()
                .fold((0, 0), |(h, a), p| (h + p.home, a + p.away)),
            LiveScore::Chess { result, .. } => match result {
                Some(Side::Home) => (1, 0),
                Some(Side::Away) => (0, 1),
                None => (0, 0),
            },
        }
    }

    pub fn leading_side(&self) -> Option<Side> {
        let (home, away) = self.totals();
        PeriodScore { number: 0, home, away }.leader()
    }
}

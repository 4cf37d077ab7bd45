pub mod generate;
pub mod phases;
pub mod progress;
pub mod scoring;
pub mod status;
pub mod tree;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of any storage or rendering layer
// ---------------------------------------------------------------------------

/// Team reference: opaque identifier plus display name, owned externally.
/// The engine only ever reads these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String, // "Atlético Central", "Blue Rovers", ...
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A single bracket pairing: its score, status, and structural position.
///
/// Wire field names match the championship app's stored documents exactly
/// (`homeTeam`, `nextMatchId`, `dependsOn`, ...), so snapshots loaded from
/// the persistence layer deserialize without translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<Team>, // None = TBD (dependency unresolved) or bye slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    pub status: MatchStatus,
    /// Set exactly when `status == finished`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Team>,
    /// Match this one's winner feeds into. Absent only for the final.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_match_id: Option<String>,
    /// Ids of the earlier matches whose winners populate the team slots.
    /// Empty for the first round; exactly two entries everywhere else.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    /// Distance from the final: 1 = final, 2 = semifinal, and so on.
    pub round: u32,
    /// Zero-based index of the match within its round.
    pub position: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Match {
    pub fn is_live(&self) -> bool {
        self.status == MatchStatus::Live
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// A bye (walkover): exactly one team slot is filled. The lone team
    /// advances automatically; there is nothing to play.
    pub fn is_bye(&self) -> bool {
        self.home_team.is_some() != self.away_team.is_some()
    }

    /// The lone team of a bye match, if this is one.
    pub fn bye_team(&self) -> Option<&Team> {
        if !self.is_bye() {
            return None;
        }
        self.home_team.as_ref().or(self.away_team.as_ref())
    }
}

/// Match lifecycle. Stored lowercase; values are shared with the web app's
/// documents and must not change. Anything unrecognized in stored data is
/// read back as `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    /// Waiting on dependency winners; not yet playable.
    Locked,
    #[default]
    #[serde(other)]
    Pending,
}

/// One tournament stage: every match sharing a round number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub name: String, // "Final", "Semifinal", "Quarterfinal", ...
    pub round: u32,
    /// Matches of this round, sorted by position.
    pub matches: Vec<Match>,
    pub is_completed: bool,
    /// The earliest stage (highest round number) that is not yet completed.
    /// At most one phase in a bracket is current.
    pub is_current: bool,
    pub total_matches: usize,
    pub completed_matches: usize,
}

/// Ordering of the phase list handed to renderers.
///
/// The timeline view reads left-to-right toward the championship, so the
/// default puts the final last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadingOrder {
    /// Earliest stage first, final as the last element.
    #[default]
    FinalLast,
    /// Final first, earliest stage last.
    FinalFirst,
}

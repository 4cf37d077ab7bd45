use crate::{Match, MatchStatus, Team};
use chrono::{DateTime, Duration, Utc};
use log::debug;
use std::collections::HashMap;
use std::fmt;

pub type BracketResult<T> = Result<T, BracketError>;

#[derive(Debug, PartialEq, Eq)]
pub enum BracketError {
    /// Team count is not a power of two, or is below 2.
    InvalidBracketSize(usize),
    /// A dependency link does not describe a binary in-tree.
    MalformedDependency { match_id: String, detail: String },
}

impl fmt::Display for BracketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketError::InvalidBracketSize(n) => {
                write!(f, "invalid bracket size {n}: team count must be a power of two (2, 4, 8, 16, ...)")
            }
            BracketError::MalformedDependency { match_id, detail } => {
                write!(f, "malformed dependency on match {match_id}: {detail}")
            }
        }
    }
}

impl std::error::Error for BracketError {}

/// Days between consecutive rounds when a start date is given. Cosmetic
/// spacing only; no rule depends on it.
const ROUND_SPACING_DAYS: i64 = 7;

/// Generate the complete single-elimination bracket for `teams`.
///
/// Teams are paired in input order (no seeding). The first round carries
/// round number `log2(n)` and is immediately `scheduled`; every later round
/// is created `locked` with two `dependsOn` links into the previous round,
/// and its id back-filled into both dependencies' `nextMatchId`. Ids run
/// `match-1` through `match-{n-1}` in creation order.
///
/// Fails with `InvalidBracketSize` before any match is allocated.
pub fn generate_bracket(
    teams: &[Team],
    start_date: Option<DateTime<Utc>>,
) -> BracketResult<Vec<Match>> {
    let n = teams.len();
    if n < 2 || !n.is_power_of_two() {
        return Err(BracketError::InvalidBracketSize(n));
    }

    let total_rounds = n.trailing_zeros(); // log2 of a power of two
    let mut matches: Vec<Match> = Vec::with_capacity(n - 1);
    let mut next_id: u32 = 1;
    let mut round_date = start_date;

    // First round: one match per adjacent pair, playable right away.
    for (i, pair) in teams.chunks(2).enumerate() {
        matches.push(Match {
            id: format!("match-{next_id}"),
            home_team: Some(pair[0].clone()),
            away_team: Some(pair[1].clone()),
            status: MatchStatus::Scheduled,
            round: total_rounds,
            position: i as u32,
            scheduled_date: round_date,
            ..Default::default()
        });
        next_id += 1;
    }

    // Later rounds, walking toward the final (round 1). Each match depends
    // on the two previous-round matches at positions 2p and 2p+1.
    for round in (1..total_rounds).rev() {
        round_date = round_date.map(|d| d + Duration::days(ROUND_SPACING_DAYS));
        let matches_in_round = 1usize << (round - 1);
        let prev_round_start = matches.len() - (1usize << round);

        for position in 0..matches_in_round {
            let id = format!("match-{next_id}");
            next_id += 1;

            let feeder_a = prev_round_start + 2 * position;
            let feeder_b = feeder_a + 1;
            let depends_on = vec![matches[feeder_a].id.clone(), matches[feeder_b].id.clone()];
            matches[feeder_a].next_match_id = Some(id.clone());
            matches[feeder_b].next_match_id = Some(id.clone());

            matches.push(Match {
                id,
                status: MatchStatus::Locked,
                round,
                position: position as u32,
                depends_on,
                scheduled_date: round_date,
                ..Default::default()
            });
        }
    }

    verify_links(&matches)?;
    debug!("generated {} matches across {} rounds for {} teams", matches.len(), total_rounds, n);
    Ok(matches)
}

/// Check that `dependsOn`/`nextMatchId` form a binary in-tree rooted at the
/// single round-1 match.
///
/// Generated brackets always pass; this guards brackets assembled or edited
/// elsewhere before they reach the grouper or tree builder. The tree builder
/// itself stays tolerant of dangling ids either way.
pub fn verify_links(matches: &[Match]) -> BracketResult<()> {
    let by_id: HashMap<&str, &Match> =
        matches.iter().map(|m| (m.id.as_str(), m)).collect();

    let finals = matches.iter().filter(|m| m.round == 1).count();
    if finals != 1 {
        return Err(BracketError::MalformedDependency {
            match_id: String::new(),
            detail: format!("expected exactly one round-1 match, found {finals}"),
        });
    }

    for m in matches {
        match (m.round, m.depends_on.len()) {
            (1, _) if m.next_match_id.is_some() => {
                return Err(BracketError::MalformedDependency {
                    match_id: m.id.clone(),
                    detail: "the final cannot feed into another match".into(),
                });
            }
            (r, _) if r > 1 && m.next_match_id.is_none() => {
                return Err(BracketError::MalformedDependency {
                    match_id: m.id.clone(),
                    detail: "non-final match has no nextMatchId".into(),
                });
            }
            _ => {}
        }

        if m.depends_on.is_empty() {
            continue;
        }
        if m.depends_on.len() != 2 {
            return Err(BracketError::MalformedDependency {
                match_id: m.id.clone(),
                detail: format!("expected 2 dependency ids, found {}", m.depends_on.len()),
            });
        }

        for (slot, dep_id) in m.depends_on.iter().enumerate() {
            let Some(dep) = by_id.get(dep_id.as_str()) else {
                return Err(BracketError::MalformedDependency {
                    match_id: m.id.clone(),
                    detail: format!("dependency {dep_id} does not exist"),
                });
            };
            if dep.round != m.round + 1 {
                return Err(BracketError::MalformedDependency {
                    match_id: m.id.clone(),
                    detail: format!(
                        "dependency {dep_id} is at round {}, expected round {}",
                        dep.round,
                        m.round + 1
                    ),
                });
            }
            let expected_position = 2 * m.position + slot as u32;
            if dep.position != expected_position {
                return Err(BracketError::MalformedDependency {
                    match_id: m.id.clone(),
                    detail: format!(
                        "dependency {dep_id} sits at position {}, expected {expected_position}",
                        dep.position
                    ),
                });
            }
            if dep.next_match_id.as_deref() != Some(m.id.as_str()) {
                return Err(BracketError::MalformedDependency {
                    match_id: m.id.clone(),
                    detail: format!("dependency {dep_id} does not link back via nextMatchId"),
                });
            }
        }
    }

    Ok(())
}

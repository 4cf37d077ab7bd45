use crate::{Match, Phase, ReadingOrder};
use std::collections::BTreeMap;

/// Display name for a round, counted from the final (1 = Final).
///
/// The table is shared with the web app's stored phase labels and must stay
/// byte-for-byte stable; unknown rounds fall back to a generic label.
pub fn phase_name(round: u32) -> String {
    match round {
        1 => "Final".to_string(),
        2 => "Semifinal".to_string(),
        3 => "Quarterfinal".to_string(),
        4 => "Round of 16".to_string(),
        5 => "Round of 32".to_string(),
        6 => "Round of 64".to_string(),
        n => format!("Round {n}"),
    }
}

/// Group a flat match list into phases in the default reading order
/// (earliest stage first, final last).
pub fn group_matches(matches: &[Match]) -> Vec<Phase> {
    group_matches_ordered(matches, ReadingOrder::FinalLast)
}

/// Group a flat match list into per-round phases.
///
/// `is_current` marks the first incomplete phase scanning from the highest
/// round number toward the final, independent of the requested reading
/// order; at most one phase is current, and none when everything finished.
pub fn group_matches_ordered(matches: &[Match], order: ReadingOrder) -> Vec<Phase> {
    if matches.is_empty() {
        return Vec::new();
    }

    let mut by_round: BTreeMap<u32, Vec<Match>> = BTreeMap::new();
    for m in matches {
        by_round.entry(m.round).or_default().push(m.clone());
    }

    // Highest round first: that is both the current-phase scan order and
    // the FinalLast output order.
    let mut phases: Vec<Phase> = by_round
        .into_iter()
        .rev()
        .map(|(round, mut round_matches)| {
            round_matches.sort_by_key(|m| m.position);
            let total_matches = round_matches.len();
            let completed_matches = round_matches.iter().filter(|m| m.is_finished()).count();
            Phase {
                name: phase_name(round),
                round,
                matches: round_matches,
                is_completed: completed_matches == total_matches,
                is_current: false,
                total_matches,
                completed_matches,
            }
        })
        .collect();

    if let Some(current) = phases.iter_mut().find(|p| !p.is_completed) {
        current.is_current = true;
    }

    if order == ReadingOrder::FinalFirst {
        phases.reverse();
    }
    phases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_bracket;
    use crate::{MatchStatus, Team};

    fn teams(n: usize) -> Vec<Team> {
        (0..n).map(|i| Team::new(format!("t{i}"), format!("Team {i}"))).collect()
    }

    fn finish_round(matches: &mut [Match], round: u32) {
        for m in matches.iter_mut().filter(|m| m.round == round) {
            m.status = MatchStatus::Finished;
            m.winner = m.home_team.clone().or_else(|| Some(Team::new("w", "Winner")));
        }
    }

    #[test]
    fn test_phase_name_table() {
        assert_eq!(phase_name(1), "Final");
        assert_eq!(phase_name(2), "Semifinal");
        assert_eq!(phase_name(3), "Quarterfinal");
        assert_eq!(phase_name(4), "Round of 16");
        assert_eq!(phase_name(5), "Round of 32");
        assert_eq!(phase_name(6), "Round of 64");
        assert_eq!(phase_name(7), "Round 7");
        assert_eq!(phase_name(12), "Round 12");
    }

    #[test]
    fn test_final_is_last_in_default_order() {
        let matches = generate_bracket(&teams(8), None).unwrap();
        let phases = group_matches(&matches);
        let names: Vec<&str> = phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Quarterfinal", "Semifinal", "Final"]);
        assert_eq!(phases.last().unwrap().round, 1);
    }

    #[test]
    fn test_final_first_order_is_exact_reverse() {
        let matches = generate_bracket(&teams(8), None).unwrap();
        let mut final_last = group_matches_ordered(&matches, ReadingOrder::FinalLast);
        let final_first = group_matches_ordered(&matches, ReadingOrder::FinalFirst);
        final_last.reverse();
        assert_eq!(final_last, final_first);
    }

    #[test]
    fn test_matches_within_a_phase_sort_by_position() {
        let mut matches = generate_bracket(&teams(8), None).unwrap();
        matches.reverse(); // scrambled persistence order
        let phases = group_matches(&matches);
        for phase in &phases {
            let positions: Vec<u32> = phase.matches.iter().map(|m| m.position).collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "{}", phase.name);
        }
    }

    #[test]
    fn test_counts_and_completion() {
        let mut matches = generate_bracket(&teams(8), None).unwrap();
        // 3 of 4 quarterfinals done: the phase stays incomplete.
        for m in matches.iter_mut().filter(|m| m.round == 3 && m.position < 3) {
            m.status = MatchStatus::Finished;
        }
        let phases = group_matches(&matches);
        let quarters = &phases[0];
        assert_eq!(quarters.total_matches, 4);
        assert_eq!(quarters.completed_matches, 3);
        assert!(!quarters.is_completed);
        assert!(quarters.is_current);
    }

    #[test]
    fn test_current_moves_forward_once_a_phase_completes() {
        let mut matches = generate_bracket(&teams(8), None).unwrap();
        finish_round(&mut matches, 3);
        let phases = group_matches(&matches);
        assert!(phases[0].is_completed, "quarterfinal phase done");
        assert!(!phases[0].is_current);
        assert!(phases[1].is_current, "semifinal phase is up next");
        assert!(!phases[2].is_current);
        assert_eq!(phases.iter().filter(|p| p.is_current).count(), 1);
    }

    #[test]
    fn test_no_current_phase_when_all_finished() {
        let mut matches = generate_bracket(&teams(4), None).unwrap();
        finish_round(&mut matches, 2);
        finish_round(&mut matches, 1);
        let phases = group_matches(&matches);
        assert!(phases.iter().all(|p| p.is_completed));
        assert!(phases.iter().all(|p| !p.is_current));
    }

    #[test]
    fn test_current_flag_survives_final_first_order() {
        let mut matches = generate_bracket(&teams(8), None).unwrap();
        finish_round(&mut matches, 3);
        let phases = group_matches_ordered(&matches, ReadingOrder::FinalFirst);
        // Same scan (highest round first) decides currency; only the output
        // order flips, so the semifinal stays current.
        let current: Vec<&str> =
            phases.iter().filter(|p| p.is_current).map(|p| p.name.as_str()).collect();
        assert_eq!(current, ["Semifinal"]);
    }

    #[test]
    fn test_empty_input_yields_no_phases() {
        assert!(group_matches(&[]).is_empty());
    }
}

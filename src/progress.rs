use crate::Phase;

/// Aggregate tournament progress, reduced from the phase list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BracketProgress {
    /// Share of fully completed phases, 0..=100, rounded half-up. A phase
    /// with 3 of 4 matches done still counts as 0 until the fourth ends.
    pub percentage: u8,
    pub current_phase: Option<Phase>,
    pub completed_phases: usize,
    pub total_phases: usize,
}

/// Reduce a phase list to overall completion plus the phase in play.
pub fn bracket_progress(phases: &[Phase]) -> BracketProgress {
    if phases.is_empty() {
        return BracketProgress::default();
    }

    let total_phases = phases.len();
    let completed_phases = phases.iter().filter(|p| p.is_completed).count();
    let current_phase = phases.iter().find(|p| p.is_current).cloned();
    let percentage = ((completed_phases * 100) as f64 / total_phases as f64).round() as u8;

    BracketProgress { percentage, current_phase, completed_phases, total_phases }
}

//! Selection of the milestones shown on a collapsed milestone section.

use crate::amounts::Amount;
use crate::constants::MILESTONE_WINDOW;

use super::Milestone;

/// Picks the milestones to display.
///
/// Lists of up to three milestones come back untouched, in their original
/// order. Longer lists are sorted by amount (on a private copy) and, unless
/// `show_all` is set, narrowed to a window of three: the most recently
/// reached milestone followed by the next two. Once every milestone is
/// reached the window rests on the last three.
///
/// A milestone whose amount failed to parse sorts after every well-formed one
/// and never counts as reached.
pub fn select_milestones<'a>(
    milestones: &'a [Milestone],
    total: &Amount,
    show_all: bool,
) -> Vec<&'a Milestone> {
    if milestones.len() <= MILESTONE_WINDOW {
        return milestones.iter().collect();
    }

    let mut sorted: Vec<&Milestone> = milestones.iter().collect();
    sorted.sort_by_key(|m| (m.amount.is_malformed(), m.amount.value()));

    if show_all {
        return sorted;
    }

    let start = window_start(&sorted, total);
    sorted[start..start + MILESTONE_WINDOW].to_vec()
}

/// Index of the first milestone in the window over an amount-sorted list.
///
/// Requires `sorted.len() > MILESTONE_WINDOW`.
pub fn window_start(sorted: &[&Milestone], total: &Amount) -> usize {
    let threshold = total.value();
    let last_start = sorted.len() - MILESTONE_WINDOW;

    match sorted
        .iter()
        .position(|m| m.amount.is_malformed() || m.amount.value() > threshold)
    {
        None => last_start,
        Some(next_unreached) => next_unreached.saturating_sub(1).min(last_start),
    }
}

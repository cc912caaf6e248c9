//! Rendered board: one section per incentive kind.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::incentives::{
    CardView, IncentiveKind, MilestoneView, PollView, RewardView, TargetView,
};
use crate::progress::Progress;

/// The show-all button rendered in the milestone section header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleView {
    pub expanded: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub kind: IncentiveKind,
    pub header: String,
    pub toggle: Option<ToggleView>,
    pub cards: Vec<CardView>,
}

impl SectionView {
    pub fn new(kind: IncentiveKind, cards: Vec<CardView>) -> Self {
        Self {
            kind,
            header: kind.section_header().to_string(),
            toggle: None,
            cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Output of one render pass of the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub sections: Vec<SectionView>,
}

impl BoardView {
    pub fn section(&self, kind: IncentiveKind) -> Option<&SectionView> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Cards of one kind, in display order. Empty when the section is missing.
    pub fn cards(&self, kind: IncentiveKind) -> &[CardView] {
        self.section(kind)
            .map(|section| section.cards.as_slice())
            .unwrap_or(&[])
    }
}

// =============================================================================
// Plain-text rendering
// =============================================================================

const BAR_WIDTH: usize = 20;

fn bar(progress: &Progress) -> String {
    let pct = progress.percent.round().to_usize().unwrap_or(0).min(100);
    let filled = pct * BAR_WIDTH / 100;
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.label
    )
}

impl fmt::Display for TargetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {} {}", self.kind.icon(), self.name, self.amounts)?;
        if !self.status_text.is_empty() {
            write!(f, " {}", self.status_text)?;
        }
        write!(f, "\n    {}", bar(&self.progress))
    }
}

impl fmt::Display for MilestoneView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.kind.icon(), self.name)?;
        if let Some(badge) = self.badge() {
            write!(f, " {}", badge)?;
        }
        write!(f, "\n    {}", bar(&self.progress))
    }
}

impl fmt::Display for PollView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {} {}", self.kind.icon(), self.name, self.total_text)?;
        for option in &self.options {
            write!(f, "\n    {}", bar(&option.progress))?;
        }
        Ok(())
    }
}

impl fmt::Display for RewardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.kind.icon(), self.headline)?;
        if let Some(badge) = self.badge() {
            write!(f, " {}", badge)?;
        }
        write!(f, "\n    {}", self.summary)?;
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            write!(f, "\n    {}", description)?;
        }
        Ok(())
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardView::Target(view) => fmt::Display::fmt(view, f),
            CardView::Milestone(view) => fmt::Display::fmt(view, f),
            CardView::Poll(view) => fmt::Display::fmt(view, f),
            CardView::Reward(view) => fmt::Display::fmt(view, f),
        }
    }
}

impl fmt::Display for SectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        if let Some(toggle) = &self.toggle {
            write!(f, " [{}]", toggle.label)?;
        }
        for card in &self.cards {
            write!(f, "\n  {}", card)?;
        }
        Ok(())
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section)?;
        }
        Ok(())
    }
}

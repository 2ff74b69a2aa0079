//! Emergency dispatch priority shared across all planning crates.
//!
//! The priority a dispatcher selects drives three things downstream: how
//! aggressively the ETA is scaled (emergency vehicles clear traffic), the
//! penalty weight recorded on road blockages placed while it is active,
//! and how prominently the route is rendered.

use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Dispatch priority for the current planning session.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    /// Life-threatening emergency — sirens, full right of way.
    #[default]
    High,
    /// Urgent but not life-threatening.
    Medium,
    /// Routine transfer.
    Low,
}

impl Priority {
    /// Multiplier applied to the base travel time when estimating arrival.
    ///
    /// High-priority vehicles are assumed to cut 30 % off the civilian
    /// travel time, medium 15 %.
    #[inline]
    pub fn eta_factor(self) -> f32 {
        match self {
            Priority::High   => 0.70,
            Priority::Medium => 0.85,
            Priority::Low    => 1.0,
        }
    }

    /// Penalty weight recorded on a road blockage placed while this
    /// priority is active.
    ///
    /// The shortest-path finder treats blockages as hard skips, so the
    /// weight is informational today; it is carried so a future soft-penalty
    /// policy can consume it without a data-model change.
    #[inline]
    pub fn block_weight(self) -> f32 {
        match self {
            Priority::High   => 100.0,
            Priority::Medium => 50.0,
            Priority::Low    => 20.0,
        }
    }

    /// Human-readable label, useful for summaries and list output.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High   => "high",
            Priority::Medium => "medium",
            Priority::Low    => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high"   => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low"    => Ok(Priority::Low),
            other    => Err(CoreError::Parse(format!("unknown priority '{other}'"))),
        }
    }
}

use crate::errors::{BuildResult, CypherBuildError};
use std::fmt;

/// Hop-count bounds of a variable-length relationship.
///
/// `None` on either side means unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HopRange {
    pub min_hops: Option<u32>,
    pub max_hops: Option<u32>,
}

impl HopRange {
    /// Fixed length: `*2`
    pub fn fixed(hops: u32) -> Self {
        Self {
            min_hops: Some(hops),
            max_hops: Some(hops),
        }
    }

    /// Closed range: `*1..3`
    pub fn range(min: u32, max: u32) -> Self {
        Self {
            min_hops: Some(min),
            max_hops: Some(max),
        }
    }

    /// Upper bound only: `*..5`
    pub fn max_only(max: u32) -> Self {
        Self {
            min_hops: None,
            max_hops: Some(max),
        }
    }

    /// Lower bound only: `*2..`
    pub fn min_only(min: u32) -> Self {
        Self {
            min_hops: Some(min),
            max_hops: None,
        }
    }

    /// Any length: `*`
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Check that min <= max when both are set
    pub fn validate(&self) -> BuildResult<()> {
        if let (Some(min), Some(max)) = (self.min_hops, self.max_hops) {
            if min > max {
                return Err(CypherBuildError::InvalidHopRange { min, max });
            }
        }
        if self.min_hops == Some(0) {
            log::debug!("HopRange: zero minimum hops also matches the start node itself");
        }
        Ok(())
    }
}

impl fmt::Display for HopRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min_hops, self.max_hops) {
            (None, None) => write!(f, "*"),
            (Some(min), Some(max)) if min == max => write!(f, "*{}", min),
            (Some(min), Some(max)) => write!(f, "*{}..{}", min, max),
            (Some(min), None) => write!(f, "*{}..", min),
            (None, Some(max)) => write!(f, "*..{}", max),
        }
    }
}

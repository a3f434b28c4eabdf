use serde::Deserialize;

/// Default soft credit target per semester.
pub const DEFAULT_TARGET_CREDITS: u32 = 15;
/// Default hard credit ceiling per semester.
pub const DEFAULT_MAX_CREDITS: u32 = 18;
/// Default hard ceiling on weekly hours per semester.
pub const DEFAULT_MAX_HOURS: u32 = 40;

/// Per-semester constraints handed to the balancer.
///
/// - `target_credits`: once a semester reaches this many credits, filling
///   stops even if more courses would fit.
/// - `max_credits` / `max_hours`: hard ceilings that a semester's totals may
///   never exceed.
///
/// No relationship between the fields is enforced. A target above
/// `max_credits` simply means every semester fills up to the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Limits {
    #[serde(default = "default_target_credits")]
    pub target_credits: u32,

    #[serde(default = "default_max_credits")]
    pub max_credits: u32,

    #[serde(default = "default_max_hours")]
    pub max_hours: u32,
}

fn default_target_credits() -> u32 {
    DEFAULT_TARGET_CREDITS
}

fn default_max_credits() -> u32 {
    DEFAULT_MAX_CREDITS
}

fn default_max_hours() -> u32 {
    DEFAULT_MAX_HOURS
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            target_credits: default_target_credits(),
            max_credits: default_max_credits(),
            max_hours: default_max_hours(),
        }
    }
}

impl Limits {
    pub fn new(target_credits: u32, max_credits: u32, max_hours: u32) -> Self {
        Self {
            target_credits,
            max_credits,
            max_hours,
        }
    }

    /// Whether a single course with these weights could ever fit in an empty
    /// semester.
    pub fn admits_alone(&self, credits: u32, hours: u32) -> bool {
        credits <= self.max_credits && hours <= self.max_hours
    }

    /// Replace any field for which an override is given.
    pub fn with_overrides(
        self,
        target_credits: Option<u32>,
        max_credits: Option<u32>,
        max_hours: Option<u32>,
    ) -> Self {
        Self {
            target_credits: target_credits.unwrap_or(self.target_credits),
            max_credits: max_credits.unwrap_or(self.max_credits),
            max_hours: max_hours.unwrap_or(self.max_hours),
        }
    }
}

//! Construction-time knobs for the decision core.
//!
//! The owning simulator deserializes these alongside the rest of its
//! configuration. Policy names are matched case-insensitively; an empty name
//! keeps the component's default, an unrecognized one logs a warning and
//! keeps the default.

use serde::Deserialize;

const DEFAULT_CAP: u32 = 16;
const DEFAULT_TIMEOUT: u64 = 50;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CtrlConfig {
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    #[serde(default)]
    pub row_policy: RowPolicyConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchedulerConfig {
    /// "fcfs", "frfcfs", "frfcfs_cap", or "frfcfs_priorhit"; empty keeps the
    /// default ("frfcfs_cap").
    #[serde(default)]
    pub policy: String,

    /// Row-hit budget for "frfcfs_cap".
    #[serde(default = "default_cap")]
    pub cap: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            policy: String::new(),
            cap: DEFAULT_CAP,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RowPolicyConfig {
    /// "closed", "closedap", "opened", or "timeout"; empty keeps the default
    /// ("opened").
    #[serde(default)]
    pub policy: String,

    /// Idle cycles before "timeout" considers a row for closing.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for RowPolicyConfig {
    fn default() -> Self {
        Self {
            policy: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn default_cap() -> u32 {
    DEFAULT_CAP
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

use log::warn;

use super::{Controller, RowTable};
use crate::config::RowPolicyConfig;
use crate::dram::{AddrVec, Command};

/// Victim-selection strategy, resolved once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowPolicyKind {
    /// Close rows eagerly: first group whose close command is legal.
    Closed,
    /// Same victim choice as `Closed`; the auto-precharge variant differs in
    /// command generation, not in selection.
    ClosedAp,
    /// Leave rows open until a conflict forces them shut.
    Opened,
    /// Close rows left idle for at least `timeout` cycles.
    Timeout,
}

/// Chooses which open row group to precharge when the controller wants a row
/// buffer freed.
pub struct RowPolicy {
    pub kind: RowPolicyKind,
    timeout: u64,
}

impl RowPolicy {
    pub fn new(cfg: &RowPolicyConfig) -> Self {
        let kind = match cfg.policy.to_lowercase().as_str() {
            "closed" => RowPolicyKind::Closed,
            "closedap" => RowPolicyKind::ClosedAp,
            "opened" | "" => RowPolicyKind::Opened,
            "timeout" => RowPolicyKind::Timeout,
            other => {
                warn!("unrecognized row policy \"{other}\", keeping opened");
                RowPolicyKind::Opened
            }
        };
        Self {
            kind,
            timeout: cfg.timeout,
        }
    }

    /// The row group `cmd` should take down, or `None` when nothing should
    /// close this cycle. `None` is the normal idle answer, not a fault.
    pub fn get_victim<C: Controller>(
        &self,
        ctrl: &C,
        table: &RowTable,
        cmd: Command,
    ) -> Option<AddrVec> {
        match self.kind {
            RowPolicyKind::Opened => None,
            RowPolicyKind::Closed | RowPolicyKind::ClosedAp => table
                .iter()
                .find(|(group, _)| ctrl.is_ready_cmd(cmd, group))
                .map(|(group, _)| *group),
            RowPolicyKind::Timeout => table
                .iter()
                .filter(|(_, entry)| ctrl.clk().saturating_sub(entry.timestamp) >= self.timeout)
                .find(|(group, _)| ctrl.is_ready_cmd(cmd, group))
                .map(|(group, _)| *group),
        }
    }
}

use log::warn;

use super::{Controller, RowTable};
use crate::config::SchedulerConfig;
use crate::dram::{AddrVec, Command};
use crate::request::Request;

/// Request-selection strategy, resolved once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedKind {
    /// Strictly chronological.
    Fcfs,
    /// Ready requests first, then chronological.
    Frfcfs,
    /// FRFCFS, but a row stops counting as ready once it has soaked up more
    /// than `cap` hits.
    FrfcfsCap,
    /// FRFCFS that refuses to precharge a row some queued hit still wants.
    FrfcfsPriorHit,
}

/// Picks which pending request the controller should serve next.
pub struct Scheduler {
    pub kind: SchedKind,
    cap: u32,
}

impl Scheduler {
    pub fn new(cfg: &SchedulerConfig) -> Self {
        let kind = match cfg.policy.to_lowercase().as_str() {
            "fcfs" => SchedKind::Fcfs,
            "frfcfs" => SchedKind::Frfcfs,
            "frfcfs_cap" | "" => SchedKind::FrfcfsCap,
            // "frfcfs_timeout" is the legacy config spelling for this policy.
            "frfcfs_priorhit" | "frfcfs_timeout" => SchedKind::FrfcfsPriorHit,
            other => {
                warn!("unrecognized scheduler policy \"{other}\", keeping frfcfs_cap");
                SchedKind::FrfcfsCap
            }
        };
        Self {
            kind,
            cap: cfg.cap,
        }
    }

    /// Index of the request to issue from `queue`, or `None` when the queue
    /// is empty or, under prioritize-hit, when every candidate would
    /// precharge a row some queued hit still needs.
    pub fn get_head<C: Controller>(
        &self,
        ctrl: &C,
        table: &RowTable,
        queue: &[Request],
    ) -> Option<usize> {
        if queue.is_empty() {
            return None;
        }
        if self.kind == SchedKind::FrfcfsPriorHit {
            return self.prior_hit_head(ctrl, table, queue);
        }

        let mut head = 0;
        for idx in 1..queue.len() {
            head = self.pick(ctrl, table, queue, head, idx);
        }
        Some(head)
    }

    /// Pairwise winner between queue slots `a` and `b`; `a` wins ties, which
    /// keeps the fold stable toward the front of the queue.
    fn pick<C: Controller>(
        &self,
        ctrl: &C,
        table: &RowTable,
        queue: &[Request],
        a: usize,
        b: usize,
    ) -> usize {
        match self.kind {
            SchedKind::Fcfs => Self::earlier(queue, a, b),
            SchedKind::Frfcfs => Self::frfcfs_pick(ctrl, queue, a, b),
            SchedKind::FrfcfsCap => {
                let capped_ready = |req: &Request| {
                    ctrl.is_ready(req) && table.get_hits(&req.addr_vec, false) <= self.cap
                };
                Self::readiness_pick(capped_ready(&queue[a]), capped_ready(&queue[b]), queue, a, b)
            }
            SchedKind::FrfcfsPriorHit => {
                let hit_ready = |req: &Request| ctrl.is_ready(req) && ctrl.is_row_hit(req);
                Self::readiness_pick(hit_ready(&queue[a]), hit_ready(&queue[b]), queue, a, b)
            }
        }
    }

    /// Two clearly separated passes. First the whole queue is folded with the
    /// "ready and row hit" comparator; a candidate that is an issuable hit
    /// returns immediately. Otherwise the queue is re-scanned against the set
    /// of row groups with pending hits: any non-hit request whose group is
    /// open and in that set would have to precharge a row another request
    /// still wants, so it is skipped, and the survivors are folded with the
    /// plain FRFCFS comparator.
    fn prior_hit_head<C: Controller>(
        &self,
        ctrl: &C,
        table: &RowTable,
        queue: &[Request],
    ) -> Option<usize> {
        let mut head = 0;
        for idx in 1..queue.len() {
            head = self.pick(ctrl, table, queue, head, idx);
        }
        if ctrl.is_ready(&queue[head]) && ctrl.is_row_hit(&queue[head]) {
            return Some(head);
        }

        // Row groups with a pending hit, keyed the way Pre scopes them.
        let width = ctrl.protocol().scope(Command::Pre) + 1;
        let hit_groups: Vec<AddrVec> = queue
            .iter()
            .filter(|req| ctrl.is_row_hit(req))
            .map(|req| req.addr_vec.prefix(width))
            .collect();

        let mut head: Option<usize> = None;
        for (idx, req) in queue.iter().enumerate() {
            let violates_hit = !ctrl.is_row_hit(req)
                && ctrl.is_row_open(req)
                && hit_groups.contains(&req.addr_vec.prefix(width));
            if violates_hit {
                continue;
            }
            head = Some(match head {
                None => idx,
                Some(prev) => Self::frfcfs_pick(ctrl, queue, prev, idx),
            });
        }
        head
    }

    fn frfcfs_pick<C: Controller>(ctrl: &C, queue: &[Request], a: usize, b: usize) -> usize {
        Self::readiness_pick(
            ctrl.is_ready(&queue[a]),
            ctrl.is_ready(&queue[b]),
            queue,
            a,
            b,
        )
    }

    fn readiness_pick(ra: bool, rb: bool, queue: &[Request], a: usize, b: usize) -> usize {
        if ra != rb {
            if ra { a } else { b }
        } else {
            Self::earlier(queue, a, b)
        }
    }

    fn earlier(queue: &[Request], a: usize, b: usize) -> usize {
        if queue[a].arrive <= queue[b].arrive {
            a
        } else {
            b
        }
    }
}

pub use self::row_policy::{RowPolicy, RowPolicyKind};
pub use self::row_table::{RowEntry, RowTable};
pub use self::scheduler::{SchedKind, Scheduler};

pub mod row_policy;
pub mod row_table;
pub mod scheduler;

use crate::dram::{AddrVec, Command, Protocol};
use crate::request::Request;

/// Facts the owning memory controller answers for the decision core.
///
/// The controller owns the request queues, the row table, and the timing
/// engine; the scheduler and row policy borrow these answers once per
/// decision and hold no state of the controller's.
pub trait Controller {
    /// Address hierarchy of the attached channel.
    fn protocol(&self) -> &Protocol;

    /// Current simulation cycle.
    fn clk(&self) -> u64;

    /// Whether the next command this request needs is timing-legal now.
    fn is_ready(&self, req: &Request) -> bool;

    /// Whether `cmd` is timing-legal now against the given row group.
    fn is_ready_cmd(&self, cmd: Command, rowgroup: &AddrVec) -> bool;

    /// Whether the request targets the currently open row of its row group.
    fn is_row_hit(&self, req: &Request) -> bool;

    /// Whether the request's row group has any row open.
    fn is_row_open(&self, req: &Request) -> bool;
}

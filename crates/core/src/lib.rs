//! Decision core for a cycle-accurate DRAM memory-controller simulator.
//!
//! Three components, in increasing order of statefulness: [`RowTable`]
//! tracks which row each bank or sub-array holds open, [`RowPolicy`] picks
//! which open row to precharge when a row buffer must be freed, and
//! [`Scheduler`] picks which pending request to issue next. The owning
//! controller answers timing-legality and row-hit questions through the
//! [`Controller`] trait and feeds every issued command back into the row
//! table.

pub mod config;
pub mod ctrl;
pub mod dram;
pub mod request;

pub use crate::config::{CtrlConfig, RowPolicyConfig, SchedulerConfig};
pub use crate::ctrl::{
    Controller, RowEntry, RowPolicy, RowPolicyKind, RowTable, SchedKind, Scheduler,
};
pub use crate::dram::{AddrVec, Command, Protocol};
pub use crate::request::{ReqKind, Request};

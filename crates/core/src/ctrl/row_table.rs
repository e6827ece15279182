use std::collections::BTreeMap;

use crate::dram::{AddrVec, Command, Protocol};

/// Accounting for one open row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowEntry {
    /// Row index held in the row buffer.
    pub row: u32,
    /// Accesses served since the row was opened.
    pub hits: u32,
    /// Cycle of the most recent open or access.
    pub timestamp: u64,
}

/// Tracks which row each bank or sub-array currently holds open.
///
/// A row group has an entry exactly while its row buffer is open. The map is
/// ordered, so policy scans see groups in a deterministic order.
pub struct RowTable {
    row_level: usize,
    table: BTreeMap<AddrVec, RowEntry>,
}

impl RowTable {
    pub fn new(spec: &Protocol) -> Self {
        Self {
            row_level: spec.row_level,
            table: BTreeMap::new(),
        }
    }

    /// Applies one issued command to the occupancy state.
    ///
    /// Opening inserts the group's entry, replacing any stale one. Accessing
    /// bumps the hit count and timestamp. Closing removes every entry the
    /// command's scope covers; a close may take a bare row-group key since it
    /// never reads the row field. An access against a closed group, an access
    /// whose row differs from the open row, and a close that removes nothing
    /// are controller bugs and abort the simulation.
    pub fn update(&mut self, spec: &Protocol, cmd: Command, addr_vec: &AddrVec, clk: u64) {
        let rowgroup = addr_vec.prefix(self.row_level);

        if cmd.is_opening() {
            let row = addr_vec[self.row_level];
            self.table.insert(
                rowgroup,
                RowEntry {
                    row,
                    hits: 0,
                    timestamp: clk,
                },
            );
        }

        if cmd.is_accessing() {
            let row = addr_vec[self.row_level];
            let entry = self
                .table
                .get_mut(&rowgroup)
                .unwrap_or_else(|| panic!("{cmd:?} against closed row group {rowgroup:?}"));
            assert!(
                entry.row == row,
                "{cmd:?} targets row {row} but row {} is open in {rowgroup:?}",
                entry.row
            );
            entry.hits += 1;
            entry.timestamp = clk;
        }

        if cmd.is_closing() {
            // RDA/WRA name a column; the rows they take down span the group
            // level, one above the row field.
            let scope = if cmd.is_accessing() {
                self.row_level - 1
            } else {
                spec.scope(cmd)
            };
            let mut removed = 0;
            self.table.retain(|key, _| {
                if key.matches(addr_vec, scope + 1) {
                    removed += 1;
                    false
                } else {
                    true
                }
            });
            assert!(removed > 0, "{cmd:?} at {addr_vec:?} closed no open row");
        }
    }

    /// Hit count of the addressed group's open row, or 0 when the group is
    /// closed. With `to_opened_row` unset the count is reported only when the
    /// addressed row is the open one; set, it reports the open row's count
    /// whichever row the address names.
    pub fn get_hits(&self, addr_vec: &AddrVec, to_opened_row: bool) -> u32 {
        let rowgroup = addr_vec.prefix(self.row_level);
        let row = addr_vec[self.row_level];
        match self.table.get(&rowgroup) {
            Some(entry) if to_opened_row || entry.row == row => entry.hits,
            _ => 0,
        }
    }

    /// The open row of the addressed group, or `None` when closed.
    pub fn get_open_row(&self, addr_vec: &AddrVec) -> Option<u32> {
        self.table
            .get(&addr_vec.prefix(self.row_level))
            .map(|entry| entry.row)
    }

    /// Open row groups in deterministic scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&AddrVec, &RowEntry)> {
        self.table.iter()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

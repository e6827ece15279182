pub use self::addr::AddrVec;

pub mod addr;

/// DRAM bus commands the decision core classifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Activate: open a row in one bank or sub-array.
    Act,
    /// Precharge: close the open row of one bank or sub-array.
    Pre,
    /// Precharge-all: close every open row in a rank.
    PreA,
    Rd,
    Wr,
    /// Read with auto-precharge.
    Rda,
    /// Write with auto-precharge.
    Wra,
    Ref,
}

impl Command {
    /// Opens a row into its group's row buffer.
    pub fn is_opening(self) -> bool {
        matches!(self, Command::Act)
    }

    /// Moves data through an open row buffer.
    pub fn is_accessing(self) -> bool {
        matches!(self, Command::Rd | Command::Wr | Command::Rda | Command::Wra)
    }

    /// Closes one or more open rows.
    pub fn is_closing(self) -> bool {
        matches!(self, Command::Pre | Command::PreA | Command::Rda | Command::Wra)
    }
}

/// Address-hierarchy descriptor for one DRAM standard.
///
/// `levels` names each address-vector position, channel first. `row_level`
/// is the index of the row field; everything before it keys a row group.
#[derive(Clone, Debug)]
pub struct Protocol {
    pub name: &'static str,
    pub levels: &'static [&'static str],
    pub row_level: usize,
}

impl Protocol {
    /// Channel / rank / bank / row / column.
    pub fn ddr3() -> Self {
        Self {
            name: "DDR3",
            levels: &["channel", "rank", "bank", "row", "column"],
            row_level: 3,
        }
    }

    /// Channel / rank / bank group / bank / row / column.
    pub fn ddr4() -> Self {
        Self {
            name: "DDR4",
            levels: &["channel", "rank", "bankgroup", "bank", "row", "column"],
            row_level: 4,
        }
    }

    /// Channel / rank / bank / sub-array / row / column. Precharge scopes to
    /// the sub-array, so sub-arrays of one bank hold rows open independently.
    pub fn salp() -> Self {
        Self {
            name: "SALP",
            levels: &["channel", "rank", "bank", "subarray", "row", "column"],
            row_level: 4,
        }
    }

    /// Deepest address-vector level a command names. For closing commands
    /// this is the span the command takes down: `Pre` one row group, `PreA`
    /// a whole rank.
    pub fn scope(&self, cmd: Command) -> usize {
        match cmd {
            Command::Act => self.row_level,
            Command::Pre => self.row_level - 1,
            Command::PreA | Command::Ref => 1,
            Command::Rd | Command::Wr | Command::Rda | Command::Wra => self.row_level + 1,
        }
    }
}

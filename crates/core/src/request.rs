use crate::dram::AddrVec;

/// Direction of a pending memory request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReqKind {
    Read,
    Write,
}

/// One pending request in a controller-owned queue.
///
/// The core reads the decoded address and arrival cycle. Readiness and
/// row-hit state stay with the owning controller, which answers for them
/// through the `Controller` trait.
#[derive(Clone, Copy, Debug)]
pub struct Request {
    pub addr_vec: AddrVec,
    pub arrive: u64,
    pub kind: ReqKind,
}

impl Request {
    pub fn new(addr_vec: AddrVec, arrive: u64, kind: ReqKind) -> Self {
        Self {
            addr_vec,
            arrive,
            kind,
        }
    }
}

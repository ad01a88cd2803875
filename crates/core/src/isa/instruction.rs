//! Instruction records and per-stage timestamps.
//!
//! An [`Instruction`] is created by the trace loader with its architectural
//! operands, then mutated by the pipeline as it moves through the stages:
//! 1. **Identity:** Program index and operand kind, fixed at load time.
//! 2. **Renaming:** Physical operands and the displaced mapping, set once by rename.
//! 3. **Timing:** Seven stage timestamps, set in stage order and never cleared.
//!
//! Every queue in the pipeline refers to instructions by [`InstId`]; the
//! record itself lives once, in the simulation roster.

use std::fmt;

use crate::common::reg::{ArchReg, PhysReg};

/// Program index of an instruction; also its slot in the simulation roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct InstId(pub usize);

impl fmt::Display for InstId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Operand shape of an instruction, one variant per trace kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstKind {
    /// Register-register operation.
    RegOp {
        /// Destination register.
        dst: ArchReg,
        /// First source register.
        src0: ArchReg,
        /// Second source register.
        src1: ArchReg,
    },
    /// Register-immediate operation.
    ImmOp {
        /// Destination register.
        dst: ArchReg,
        /// Source register.
        src0: ArchReg,
        /// Immediate operand.
        imm: u64,
    },
    /// Memory load.
    Load {
        /// Destination register.
        dst: ArchReg,
        /// Base address register.
        src0: ArchReg,
        /// Address offset.
        imm: u64,
    },
    /// Memory store. Stores write no register.
    Store {
        /// Register holding the value to store.
        src0: ArchReg,
        /// Base address register.
        src1: ArchReg,
        /// Address offset.
        imm: u64,
    },
}

impl InstKind {
    /// Destination register, if the kind writes one.
    pub const fn dst(&self) -> Option<ArchReg> {
        match *self {
            Self::RegOp { dst, .. } | Self::ImmOp { dst, .. } | Self::Load { dst, .. } => {
                Some(dst)
            }
            Self::Store { .. } => None,
        }
    }

    /// First source register.
    pub const fn src0(&self) -> ArchReg {
        match *self {
            Self::RegOp { src0, .. }
            | Self::ImmOp { src0, .. }
            | Self::Load { src0, .. }
            | Self::Store { src0, .. } => src0,
        }
    }

    /// Second source register, if the kind reads one.
    pub const fn src1(&self) -> Option<ArchReg> {
        match *self {
            Self::RegOp { src1, .. } | Self::Store { src1, .. } => Some(src1),
            Self::ImmOp { .. } | Self::Load { .. } => None,
        }
    }

    /// Returns true for loads and stores.
    pub const fn is_load_store(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Store { .. })
    }

    /// Single-letter trace mnemonic (`R`, `I`, `L` or `S`).
    pub const fn mnemonic(&self) -> char {
        match self {
            Self::RegOp { .. } => 'R',
            Self::ImmOp { .. } => 'I',
            Self::Load { .. } => 'L',
            Self::Store { .. } => 'S',
        }
    }
}

impl fmt::Display for InstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::RegOp { dst, src0, src1 } => write!(f, "R {dst}, {src0}, {src1}"),
            Self::ImmOp { dst, src0, imm } => write!(f, "I {dst}, {src0}, {imm}"),
            Self::Load { dst, src0, imm } => write!(f, "L {dst}, {imm}({src0})"),
            Self::Store { src0, src1, imm } => write!(f, "S {src0}, {imm}({src1})"),
        }
    }
}

/// Physical operands assigned by the rename stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenamedOperands {
    /// Newly allocated destination register.
    pub dst: Option<PhysReg>,
    /// Mapping of the first source at rename time.
    pub src0: PhysReg,
    /// Mapping of the second source at rename time.
    pub src1: Option<PhysReg>,
}

/// Pipeline stages that stamp a cycle number on an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Pulled from the instruction stream.
    Fetch,
    /// Moved from the decode latch to the rename latch.
    Decode,
    /// Operands mapped to physical registers.
    Rename,
    /// Entered the issue queue, ROB and (for memory ops) the LSQ.
    Dispatch,
    /// Selected for execution.
    Issue,
    /// Result available to dependents.
    Writeback,
    /// Retired in program order.
    Commit,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Self; 7] = [
        Self::Fetch,
        Self::Decode,
        Self::Rename,
        Self::Dispatch,
        Self::Issue,
        Self::Writeback,
        Self::Commit,
    ];

    /// Lower-case stage name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Decode => "decode",
            Self::Rename => "rename",
            Self::Dispatch => "dispatch",
            Self::Issue => "issue",
            Self::Writeback => "writeback",
            Self::Commit => "commit",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cycle at which an instruction entered each stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageTimes {
    cycles: [Option<u64>; 7],
}

impl StageTimes {
    /// Cycle at which `stage` handled the instruction, if it has.
    #[inline]
    pub const fn get(&self, stage: Stage) -> Option<u64> {
        self.cycles[stage.slot()]
    }

    /// All seven timestamps in pipeline order.
    #[inline]
    pub const fn as_array(&self) -> [Option<u64>; 7] {
        self.cycles
    }

    /// Returns true once every stage including commit has been stamped.
    pub fn is_complete(&self) -> bool {
        self.cycles.iter().all(Option::is_some)
    }

    /// Records `cycle` for `stage`.
    ///
    /// Stages are stamped in order and a stamp is never overwritten.
    pub(crate) fn stamp(&mut self, stage: Stage, cycle: u64) {
        let slot = stage.slot();
        debug_assert!(self.cycles[slot].is_none(), "{stage} stamped twice");
        debug_assert!(
            slot == 0 || self.cycles[slot - 1].is_some_and(|prev| prev <= cycle),
            "{stage} stamped out of order"
        );
        self.cycles[slot] = Some(cycle);
    }
}

/// Lifecycle state, derived from which timestamps are populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum InstState {
    /// Loaded but not yet fetched.
    Unfetched,
    /// In the decode latch.
    Fetched,
    /// In the rename latch.
    Decoded,
    /// In the dispatch latch.
    Renamed,
    /// Waiting in the issue queue.
    Dispatched,
    /// Executing.
    Issued,
    /// Result written back, waiting to commit.
    WrittenBack,
    /// Retired; displaced register not yet reclaimed.
    Committed,
    /// Retired and its displaced register returned to the free list.
    Freed,
}

/// A single instruction record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    id: InstId,
    kind: InstKind,
    renamed: Option<RenamedOperands>,
    overwritten: Option<PhysReg>,
    times: StageTimes,
    reclaimed: bool,
}

impl Instruction {
    /// Creates an unfetched instruction with program index `id`.
    pub fn new(id: InstId, kind: InstKind) -> Self {
        Self {
            id,
            kind,
            renamed: None,
            overwritten: None,
            times: StageTimes::default(),
            reclaimed: false,
        }
    }

    /// Program index.
    #[inline]
    pub const fn id(&self) -> InstId {
        self.id
    }

    /// Architectural operand shape.
    #[inline]
    pub const fn kind(&self) -> &InstKind {
        &self.kind
    }

    /// Returns true for loads and stores.
    #[inline]
    pub const fn is_load_store(&self) -> bool {
        self.kind.is_load_store()
    }

    /// Physical operands, once renamed.
    #[inline]
    pub const fn renamed(&self) -> Option<&RenamedOperands> {
        self.renamed.as_ref()
    }

    /// Physical destination, once renamed.
    #[inline]
    pub fn phys_dst(&self) -> Option<PhysReg> {
        self.renamed.and_then(|r| r.dst)
    }

    /// Mapping displaced by this instruction's destination at rename time.
    #[inline]
    pub const fn overwritten(&self) -> Option<PhysReg> {
        self.overwritten
    }

    /// Stage timestamps.
    #[inline]
    pub const fn times(&self) -> &StageTimes {
        &self.times
    }

    /// Returns true once the result has been written back.
    #[inline]
    pub const fn has_written_back(&self) -> bool {
        self.times.get(Stage::Writeback).is_some()
    }

    /// Returns true once the instruction has retired.
    #[inline]
    pub const fn has_committed(&self) -> bool {
        self.times.get(Stage::Commit).is_some()
    }

    /// Lifecycle state derived from the populated timestamps.
    pub fn state(&self) -> InstState {
        if self.reclaimed {
            return InstState::Freed;
        }
        let stamped = self.times.cycles.iter().take_while(|c| c.is_some()).count();
        match stamped {
            0 => InstState::Unfetched,
            1 => InstState::Fetched,
            2 => InstState::Decoded,
            3 => InstState::Renamed,
            4 => InstState::Dispatched,
            5 => InstState::Issued,
            6 => InstState::WrittenBack,
            _ => InstState::Committed,
        }
    }

    pub(crate) fn stamp(&mut self, stage: Stage, cycle: u64) {
        self.times.stamp(stage, cycle);
    }

    pub(crate) const fn set_renamed(
        &mut self,
        operands: RenamedOperands,
        overwritten: Option<PhysReg>,
    ) {
        self.renamed = Some(operands);
        self.overwritten = overwritten;
    }

    pub(crate) const fn mark_reclaimed(&mut self) {
        self.reclaimed = true;
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.kind)?;
        if let Some(r) = &self.renamed {
            f.write_str(" [")?;
            if let Some(dst) = r.dst {
                write!(f, "{dst} <- ")?;
            }
            write!(f, "{}", r.src0)?;
            if let Some(src1) = r.src1 {
                write!(f, ", {src1}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

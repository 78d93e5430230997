//! Fixed-capacity instruction array.

use crate::machine::errors::VmError;
use crate::machine::isa::Inst;

/// An assembled program: exactly `capacity` instruction slots, indexed 1:1
/// by source token position.
///
/// Every slot beyond the last assembled token is explicitly filled with the
/// terminate instruction at construction, so a program counter that walks
/// past the assembled instructions stops cleanly instead of reading
/// uninitialized slots.
#[derive(Debug, Clone)]
pub struct Program {
    insts: Vec<Inst>,
    /// Number of slots assembled from source tokens.
    len: usize,
}

impl Program {
    /// Builds a program from assembled instructions, filling the remaining
    /// slots with [`Inst::QUIT`].
    ///
    /// Returns [`VmError::ProgramOverflow`] if the instructions do not fit
    /// in `capacity` slots; nothing is written in that case.
    pub fn new(insts: Vec<Inst>, capacity: usize) -> Result<Self, VmError> {
        if insts.len() > capacity {
            return Err(VmError::ProgramOverflow {
                tokens: insts.len(),
                capacity,
            });
        }
        let len = insts.len();
        let mut insts = insts;
        insts.resize(capacity, Inst::QUIT);
        Ok(Self { insts, len })
    }

    /// Fetches the instruction at `pc`, or `None` once `pc` has left the
    /// valid index range.
    pub fn fetch(&self, pc: usize) -> Option<Inst> {
        self.insts.get(pc).copied()
    }

    /// Total slot count (the configured capacity).
    pub fn capacity(&self) -> usize {
        self.insts.len()
    }

    /// Number of instructions assembled from source tokens.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether any instructions were assembled from source tokens.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The instructions assembled from source tokens, without the terminate
    /// fill. Used for listings.
    pub fn assembled(&self) -> &[Inst] {
        &self.insts[..self.len]
    }
}

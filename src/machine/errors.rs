//! Error taxonomy and process exit codes.

use thiserror::Error;

/// Errors that can occur while loading, assembling, or executing a program.
///
/// This is a batch interpreter: every error is fatal to the run and nothing
/// is retried or recovered internally. Each kind maps to a distinct process
/// exit code so callers can assert on the failure kind, not just its
/// occurrence.
#[derive(Debug, Error)]
pub enum VmError {
    /// Source text could not be loaded.
    #[error("cannot load {path}: {message}")]
    Load { path: String, message: String },
    /// A label reference names no declaration anywhere in the program.
    #[error("undefined label `{label}` referenced at token {token_index}")]
    UndefinedLabel { label: String, token_index: usize },
    /// Token count exceeds the program's instruction capacity.
    #[error("program has {tokens} tokens but capacity is {capacity} instructions")]
    ProgramOverflow { tokens: usize, capacity: usize },
    /// The reserved slot of an unrecognized token was fetched for execution.
    #[error("unknown opcode executed at pc {pc}")]
    UnknownOpcode { pc: usize },
    /// An operation needed more operands than the stack holds.
    #[error("stack underflow: {mnemonic} needs {needed} operands but depth is {depth}")]
    StackUnderflow {
        mnemonic: &'static str,
        needed: usize,
        depth: usize,
    },
    /// A push would exceed the stack's capacity.
    #[error("stack overflow: {mnemonic} would exceed capacity {capacity}")]
    StackOverflow {
        mnemonic: &'static str,
        capacity: usize,
    },
    /// A jump targeted an instruction index outside the valid range.
    #[error("program counter out of range: jump target {target}")]
    ProgramCounterOutOfRange { target: i64 },
    /// The output stream rejected a write.
    #[error("output error: {0}")]
    Output(String),
}

impl VmError {
    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            VmError::Load { .. } => 1,
            VmError::UndefinedLabel { .. } => 2,
            VmError::ProgramOverflow { .. } => 3,
            VmError::UnknownOpcode { .. } => 4,
            VmError::StackUnderflow { .. } => 5,
            VmError::StackOverflow { .. } => 6,
            VmError::ProgramCounterOutOfRange { .. } => 7,
            VmError::Output(_) => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let errors = [
            VmError::Load {
                path: "p".into(),
                message: "m".into(),
            },
            VmError::UndefinedLabel {
                label: "l".into(),
                token_index: 0,
            },
            VmError::ProgramOverflow {
                tokens: 1,
                capacity: 0,
            },
            VmError::UnknownOpcode { pc: 0 },
            VmError::StackUnderflow {
                mnemonic: "+",
                needed: 2,
                depth: 0,
            },
            VmError::StackOverflow {
                mnemonic: "push",
                capacity: 0,
            },
            VmError::ProgramCounterOutOfRange { target: -1 },
            VmError::Output("broken pipe".into()),
        ];

        let codes: HashSet<i32> = errors.iter().map(VmError::exit_code).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
    }

    #[test]
    fn messages_name_the_failure() {
        let err = VmError::UndefinedLabel {
            label: "missing".into(),
            token_index: 3,
        };
        assert_eq!(err.to_string(), "undefined label `missing` referenced at token 3");
    }
}

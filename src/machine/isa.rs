//! Instruction set definitions.
//!
//! The instruction set is a closed enumeration of seventeen opcodes plus a
//! reserved [`Opcode::Unknown`] slot for unrecognized tokens. Instructions
//! use a fixed format: an opcode and an `i64` literal that is meaningful
//! only for [`Opcode::Push`].

use std::fmt;

/// Operation executed by the stack machine.
///
/// Binary operations pop exactly two operands and push exactly one. In the
/// doc comments below, `b` is the popped top of stack and `a` the value
/// beneath it. The operand-order asymmetry between `-` (top minus second)
/// and the comparison family is deliberate and preserved from the reference
/// semantics.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Opcode {
    /// `quit` ; stop the execution loop
    Quit,
    /// `nop` ; no effect (also produced by label-declaration rewriting)
    Nop,
    /// integer literal ; push the literal value
    Push,
    /// `drop` ; pop and discard the top value
    Drop,
    /// `dup` ; push a copy of the top value
    Dup,
    /// `over` ; push a copy of the second-from-top value
    Over,
    /// `.` ; pop and write the value as decimal text
    Print,
    /// `.c` ; pop and write the value's low byte
    Emit,
    /// `+` ; pop b then a, push a + b
    Add,
    /// `-` ; pop b then a, push b - a
    Sub,
    /// `*` ; pop b then a, push a * b
    Mul,
    /// `==` ; pop b then a, push 1 if a == b else 0
    Eq,
    /// `>` ; pop b then a, push 1 if a > b else 0
    Gt,
    /// `<` ; pop b then a, push 1 if a < b else 0
    Lt,
    /// `!` ; replace the top value with 1 if it was 0, else 0
    Not,
    /// `then` ; pop target then condition, jump when the condition is nonzero
    Then,
    /// `goto` ; pop target, jump unconditionally
    Goto,
    /// Reserved slot for an unrecognized token. Never a silent no-op:
    /// fetching it during execution is a fatal error.
    Unknown,
}

impl Opcode {
    /// Looks up a mnemonic with an exact, case-sensitive match.
    ///
    /// Integer literals and label tokens are not mnemonics and return `None`.
    pub fn from_mnemonic(token: &str) -> Option<Opcode> {
        match token {
            "quit" => Some(Opcode::Quit),
            "nop" => Some(Opcode::Nop),
            "drop" => Some(Opcode::Drop),
            "dup" => Some(Opcode::Dup),
            "over" => Some(Opcode::Over),
            "." => Some(Opcode::Print),
            ".c" => Some(Opcode::Emit),
            "+" => Some(Opcode::Add),
            "-" => Some(Opcode::Sub),
            "*" => Some(Opcode::Mul),
            "==" => Some(Opcode::Eq),
            ">" => Some(Opcode::Gt),
            "<" => Some(Opcode::Lt),
            "!" => Some(Opcode::Not),
            "then" => Some(Opcode::Then),
            "goto" => Some(Opcode::Goto),
            _ => None,
        }
    }

    /// Returns the display name for this opcode.
    ///
    /// `Push` and `Unknown` have no source mnemonic; they render as `push`
    /// and `unknown` in listings and diagnostics.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Quit => "quit",
            Opcode::Nop => "nop",
            Opcode::Push => "push",
            Opcode::Drop => "drop",
            Opcode::Dup => "dup",
            Opcode::Over => "over",
            Opcode::Print => ".",
            Opcode::Emit => ".c",
            Opcode::Add => "+",
            Opcode::Sub => "-",
            Opcode::Mul => "*",
            Opcode::Eq => "==",
            Opcode::Gt => ">",
            Opcode::Lt => "<",
            Opcode::Not => "!",
            Opcode::Then => "then",
            Opcode::Goto => "goto",
            Opcode::Unknown => "unknown",
        }
    }
}

/// A single fixed-format instruction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Inst {
    /// Operation to execute.
    pub op: Opcode,
    /// Literal operand; meaningful only for [`Opcode::Push`].
    pub literal: i64,
}

impl Inst {
    /// The terminate instruction used to fill unassembled program slots.
    pub const QUIT: Inst = Inst {
        op: Opcode::Quit,
        literal: 0,
    };

    /// Creates an instruction with no literal operand.
    pub const fn op(op: Opcode) -> Inst {
        Inst { op, literal: 0 }
    }

    /// Creates a push instruction carrying `literal`.
    pub const fn push(literal: i64) -> Inst {
        Inst {
            op: Opcode::Push,
            literal,
        }
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            Opcode::Push => write!(f, "push {}", self.literal),
            op => write!(f, "{}", op.mnemonic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonic_lookup_round_trips() {
        for m in [
            "quit", "nop", "drop", "dup", "over", ".", ".c", "+", "-", "*", "==", ">", "<", "!",
            "then", "goto",
        ] {
            let op = Opcode::from_mnemonic(m).expect("known mnemonic");
            assert_eq!(op.mnemonic(), m);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Opcode::from_mnemonic("QUIT"), None);
        assert_eq!(Opcode::from_mnemonic("Dup"), None);
    }

    #[test]
    fn literals_and_labels_are_not_mnemonics() {
        assert_eq!(Opcode::from_mnemonic("42"), None);
        assert_eq!(Opcode::from_mnemonic(":loop"), None);
        assert_eq!(Opcode::from_mnemonic("loop:"), None);
        assert_eq!(Opcode::from_mnemonic(""), None);
    }

    #[test]
    fn display_format() {
        assert_eq!(Inst::push(-7).to_string(), "push -7");
        assert_eq!(Inst::op(Opcode::Goto).to_string(), "goto");
        assert_eq!(Inst::QUIT.to_string(), "quit");
    }
}

//! Stack machine execution loop.
//!
//! Fetches the instruction at `pc`, executes it, then increments `pc` by
//! one unless the instruction repositioned it. Execution terminates on the
//! `quit` opcode or when `pc` walks past the last program slot; the
//! explicit terminate fill in [`Program`] makes both paths equivalent.
//!
//! Execution is single-threaded and deterministic: the only I/O is the
//! character output of `.` and `.c`, and there is no input instruction.

use crate::machine::config::MachineConfig;
use crate::machine::errors::VmError;
use crate::machine::isa::{Inst, Opcode};
use crate::machine::program::Program;
use crate::machine::stack::OperandStack;
use std::io::Write;

/// Register-free stack machine.
///
/// Owns its operand stack for exactly one run; all instructions communicate
/// through it. Program output is written to the `out` sink, which the
/// binary points at stdout and tests point at a byte buffer.
pub struct Machine<W: Write> {
    program: Program,
    stack: OperandStack,
    /// Index of the next instruction to fetch.
    pc: usize,
    running: bool,
    /// Set when the executed instruction repositioned `pc`, suppressing the
    /// implicit increment so the next fetch lands exactly on the target.
    jumped: bool,
    out: W,
}

impl<W: Write> Machine<W> {
    /// Creates a machine for one run of `program`, writing output to `out`.
    pub fn new(program: Program, config: &MachineConfig, out: W) -> Self {
        Self {
            program,
            stack: OperandStack::new(config.stack_capacity),
            pc: 0,
            running: true,
            jumped: false,
            out,
        }
    }

    /// Executes the program until a terminate condition or fatal error.
    ///
    /// The output sink is flushed on both paths so partial output written
    /// before a fault is not lost.
    pub fn run(&mut self) -> Result<(), VmError> {
        let result = self.execute();
        let flushed = self
            .out
            .flush()
            .map_err(|e| VmError::Output(e.to_string()));
        result.and(flushed)
    }

    fn execute(&mut self) -> Result<(), VmError> {
        while self.running {
            let Some(inst) = self.program.fetch(self.pc) else {
                // pc walked past the last slot: normal termination.
                break;
            };
            self.exec(inst)?;
            if self.jumped {
                self.jumped = false;
            } else {
                self.pc += 1;
            }
        }
        Ok(())
    }

    /// Executes a single instruction.
    fn exec(&mut self, inst: Inst) -> Result<(), VmError> {
        let mnemonic = inst.op.mnemonic();
        match inst.op {
            Opcode::Quit => self.running = false,
            Opcode::Nop => {}
            Opcode::Push => self.stack.push(inst.literal, mnemonic)?,
            Opcode::Drop => {
                self.stack.pop(mnemonic)?;
            }
            Opcode::Dup => {
                let top = self.stack.peek(0, mnemonic)?;
                self.stack.push(top, mnemonic)?;
            }
            Opcode::Over => {
                let second = self.stack.peek(1, mnemonic)?;
                self.stack.push(second, mnemonic)?;
            }
            Opcode::Print => {
                let value = self.stack.pop(mnemonic)?;
                write!(self.out, "{value}").map_err(|e| VmError::Output(e.to_string()))?;
            }
            Opcode::Emit => {
                let value = self.stack.pop(mnemonic)?;
                self.out
                    .write_all(&[value as u8])
                    .map_err(|e| VmError::Output(e.to_string()))?;
            }
            Opcode::Add => self.binary(mnemonic, |a, b| a.wrapping_add(b))?,
            // Deliberately top-minus-second; see the operand-order note in isa.
            Opcode::Sub => self.binary(mnemonic, |a, b| b.wrapping_sub(a))?,
            Opcode::Mul => self.binary(mnemonic, |a, b| a.wrapping_mul(b))?,
            Opcode::Eq => self.binary(mnemonic, |a, b| i64::from(a == b))?,
            Opcode::Gt => self.binary(mnemonic, |a, b| i64::from(a > b))?,
            Opcode::Lt => self.binary(mnemonic, |a, b| i64::from(a < b))?,
            Opcode::Not => {
                let top = self.stack.top_mut(mnemonic)?;
                *top = i64::from(*top == 0);
            }
            Opcode::Then => {
                let target = self.stack.pop(mnemonic)?;
                let condition = self.stack.pop(mnemonic)?;
                if condition != 0 {
                    self.jump(target)?;
                }
            }
            Opcode::Goto => {
                let target = self.stack.pop(mnemonic)?;
                self.jump(target)?;
            }
            Opcode::Unknown => return Err(VmError::UnknownOpcode { pc: self.pc }),
        }
        Ok(())
    }

    /// Pops `b` (top) then `a` and pushes `f(a, b)`.
    fn binary(
        &mut self,
        mnemonic: &'static str,
        f: impl FnOnce(i64, i64) -> i64,
    ) -> Result<(), VmError> {
        let b = self.stack.pop(mnemonic)?;
        let a = self.stack.pop(mnemonic)?;
        self.stack.push(f(a, b), mnemonic)
    }

    /// Repositions `pc` so the next fetch lands exactly on `target`.
    ///
    /// A negative target is a fault; a target at or past the program's
    /// capacity terminates the loop on the next fetch.
    fn jump(&mut self, target: i64) -> Result<(), VmError> {
        if target < 0 {
            return Err(VmError::ProgramCounterOutOfRange { target });
        }
        self.pc = target as usize;
        self.jumped = true;
        Ok(())
    }

    /// The operand stack contents, bottom to top.
    pub fn stack(&self) -> &[i64] {
        self.stack.as_slice()
    }

    /// Consumes the machine and returns its output sink.
    pub fn into_out(self) -> W {
        self.out
    }
}

//! Concatenative stack-machine pipeline.
//!
//! Source text flows strictly forward through three stages before execution:
//! tokens are split from the text, label tokens are rewritten to numeric
//! addresses, and the rewritten tokens are assembled one-for-one into a
//! fixed-capacity instruction array. Only the interpreter carries runtime
//! state beyond its inputs.
//!
//! # Modules
//!
//! - [`tokenizer`]: Whitespace token splitting
//! - [`resolver`]: Two-pass label declaration/reference rewriting
//! - [`assembler`]: Token-to-instruction assembly and pipeline entry points
//! - [`isa`]: Opcode set, mnemonic table, and instruction format
//! - [`program`]: Fixed-capacity instruction array
//! - [`stack`]: Bounds-checked operand stack
//! - [`config`]: Capacity configuration passed into every run
//! - [`source`]: Source-text provider collaborators
//! - [`errors`]: Error taxonomy and process exit codes
//! - [`vm`]: Fetch-decode-execute loop

pub mod assembler;
pub mod config;
pub mod errors;
pub mod isa;
pub mod program;
pub mod resolver;
pub mod source;
pub mod stack;
pub mod tokenizer;
pub mod vm;

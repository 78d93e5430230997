//! Token-to-instruction assembly.
//!
//! Each resolved token assembles into exactly one instruction at the same
//! index, in order:
//!
//! - integer literal (optional `+`/`-` sign, then decimal digits) → push
//! - exact mnemonic match → the corresponding opcode
//! - anything else → the reserved unknown slot, fatal only if fetched
//!
//! Also hosts the pipeline entry points that chain tokenizer, resolver, and
//! assembler over raw source text.

use crate::machine::config::MachineConfig;
use crate::machine::errors::VmError;
use crate::machine::isa::{Inst, Opcode};
use crate::machine::program::Program;
use crate::machine::resolver::resolve_labels;
use crate::machine::source::{FileSource, SourceProvider};
use crate::machine::tokenizer::tokenize;
use std::path::Path;

/// Checks whether a token lexically matches an integer literal: an optional
/// leading sign followed by one or more decimal digits.
fn is_int(tok: &str) -> bool {
    let digits = tok.strip_prefix(['+', '-']).unwrap_or(tok);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a token as a push literal.
///
/// A token whose digits exceed the `i64` range matches the literal grammar
/// but carries no representable value; it falls through to mnemonic lookup
/// and assembles as unknown.
fn parse_literal(tok: &str) -> Option<i64> {
    if !is_int(tok) {
        return None;
    }
    tok.parse::<i64>().ok()
}

/// Assembles resolved tokens into a fixed-capacity program.
///
/// Returns [`VmError::ProgramOverflow`] before any slot is written if the
/// token count exceeds `config.program_capacity`.
pub fn assemble(tokens: &[String], config: &MachineConfig) -> Result<Program, VmError> {
    if tokens.len() > config.program_capacity {
        return Err(VmError::ProgramOverflow {
            tokens: tokens.len(),
            capacity: config.program_capacity,
        });
    }

    let insts = tokens
        .iter()
        .map(|tok| {
            if let Some(value) = parse_literal(tok) {
                Inst::push(value)
            } else {
                match Opcode::from_mnemonic(tok) {
                    Some(op) => Inst::op(op),
                    None => Inst::op(Opcode::Unknown),
                }
            }
        })
        .collect();

    Program::new(insts, config.program_capacity)
}

/// Tokenizes, resolves labels, and assembles source text into a program.
pub fn assemble_source(source: &str, config: &MachineConfig) -> Result<Program, VmError> {
    let mut tokens = tokenize(source);
    resolve_labels(&mut tokens)?;
    assemble(&tokens, config)
}

/// Loads a source file and assembles it into a program.
pub fn assemble_file(path: impl AsRef<Path>, config: &MachineConfig) -> Result<Program, VmError> {
    let source = FileSource::new(path.as_ref()).load()?;
    assemble_source(&source, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MachineConfig {
        MachineConfig::default()
    }

    #[test]
    fn integer_literal_grammar() {
        assert!(is_int("0"));
        assert!(is_int("42"));
        assert!(is_int("-7"));
        assert!(is_int("+13"));
        assert!(!is_int(""));
        assert!(!is_int("-"));
        assert!(!is_int("+"));
        assert!(!is_int("1.5"));
        assert!(!is_int("12a"));
        assert!(!is_int("--1"));
    }

    #[test]
    fn literals_assemble_to_push() {
        let program = assemble_source("42 -7 +13", &config()).unwrap();
        assert_eq!(
            program.assembled(),
            [Inst::push(42), Inst::push(-7), Inst::push(13)]
        );
    }

    #[test]
    fn mnemonics_assemble_by_exact_match() {
        let program = assemble_source("dup over + quit", &config()).unwrap();
        assert_eq!(
            program.assembled(),
            [
                Inst::op(Opcode::Dup),
                Inst::op(Opcode::Over),
                Inst::op(Opcode::Add),
                Inst::QUIT,
            ]
        );
    }

    #[test]
    fn unrecognized_token_reserves_an_unknown_slot() {
        let program = assemble_source("bogus", &config()).unwrap();
        assert_eq!(program.assembled(), [Inst::op(Opcode::Unknown)]);
    }

    #[test]
    fn out_of_range_literal_assembles_as_unknown() {
        let program = assemble_source("99999999999999999999", &config()).unwrap();
        assert_eq!(program.assembled(), [Inst::op(Opcode::Unknown)]);
    }

    #[test]
    fn token_count_is_bounds_checked_before_assembly() {
        let config = MachineConfig {
            program_capacity: 3,
            ..MachineConfig::default()
        };
        let err = assemble_source("1 2 3 4", &config).unwrap_err();
        assert!(matches!(
            err,
            VmError::ProgramOverflow {
                tokens: 4,
                capacity: 3
            }
        ));
    }

    #[test]
    fn labels_flow_through_to_push_instructions() {
        // `end:` declares token index 2; `:end` becomes a push of 2.
        let program = assemble_source(":end goto end: quit", &config()).unwrap();
        assert_eq!(
            program.assembled(),
            [
                Inst::push(2),
                Inst::op(Opcode::Goto),
                Inst::op(Opcode::Nop),
                Inst::QUIT,
            ]
        );
    }

    #[test]
    fn empty_source_assembles_to_terminate_only() {
        let program = assemble_source("", &config()).unwrap();
        assert!(program.is_empty());
        assert_eq!(program.fetch(0), Some(Inst::QUIT));
    }
}

//! Two-pass label resolution.
//!
//! Pass 1 records every declaration (`name:`) and rewrites it in place to
//! `nop`; pass 2 rewrites every reference (`:name`) to the decimal text of
//! the recorded token index. Rewriting in place rather than removing tokens
//! preserves the 1:1 correspondence between token index and instruction
//! index, which is what makes the recorded indices valid jump targets.
//! References may appear before their declaration because pass 1 runs to
//! completion first.
//!
//! Resolution is purely textual and positional; it knows nothing about
//! opcodes or arithmetic.

use crate::machine::errors::VmError;
use std::collections::HashMap;

const LABEL_COLON: char = ':';

/// Mnemonic written over a declaration token so its slot assembles to a no-op.
const NOP_MNEMONIC: &str = "nop";

/// Label name → index of the token that declared it.
pub type LabelTable = HashMap<String, usize>;

/// Identifier characters permitted in label names.
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a token is a label declaration: one or more identifier
/// characters followed by a trailing colon.
fn is_label_decl(tok: &str) -> bool {
    tok.len() >= 2
        && tok.ends_with(LABEL_COLON)
        && tok[..tok.len() - 1].chars().all(is_ident_char)
}

/// Checks if a token is a label reference: a leading colon followed by one
/// or more identifier characters.
fn is_label_ref(tok: &str) -> bool {
    tok.len() >= 2 && tok.starts_with(LABEL_COLON) && tok[1..].chars().all(is_ident_char)
}

/// Rewrites label declarations and references in place.
///
/// Declaring the same name twice replaces the earlier mapping: references
/// always resolve to the most recent declaration. Tokens that are neither
/// declarations nor references pass through unchanged.
///
/// Returns [`VmError::UndefinedLabel`] if a reference names a label that is
/// declared nowhere in the token sequence.
pub fn resolve_labels(tokens: &mut [String]) -> Result<LabelTable, VmError> {
    let mut labels = LabelTable::new();

    for (i, tok) in tokens.iter_mut().enumerate() {
        if is_label_decl(tok) {
            let name = tok[..tok.len() - 1].to_string();
            labels.insert(name, i);
            *tok = NOP_MNEMONIC.to_string();
        }
    }

    for (i, tok) in tokens.iter_mut().enumerate() {
        if is_label_ref(tok) {
            let name = &tok[1..];
            let target = labels
                .get(name)
                .copied()
                .ok_or_else(|| VmError::UndefinedLabel {
                    label: name.to_string(),
                    token_index: i,
                })?;
            *tok = target.to_string();
        }
    }

    Ok(labels)
}

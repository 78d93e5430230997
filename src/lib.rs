//! A minimal concatenative stack-machine language.
//!
//! Source text is tokenized, label declarations are resolved to instruction
//! addresses, tokens are assembled into a fixed-capacity program, and a
//! register-free stack machine executes that program against an operand stack.

pub mod machine;
pub mod utils;

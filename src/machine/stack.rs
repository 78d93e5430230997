//! Bounds-checked operand stack.
//!
//! The sole runtime data area: all instructions communicate exclusively
//! through it. Owned by one machine run, allocated at run start and released
//! on every exit path. Every access is range-checked; underflow and overflow
//! are reported as errors, never undefined reads or writes.

use crate::machine::errors::VmError;

/// Fixed-capacity stack of signed integers.
///
/// Accessors take the mnemonic of the executing instruction so violations
/// can name the operation that caused them.
#[derive(Debug)]
pub struct OperandStack {
    items: Vec<i64>,
    capacity: usize,
}

impl OperandStack {
    /// Creates an empty stack bounded at `capacity` values.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Current depth (count of live values).
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    /// Pushes a value, failing with [`VmError::StackOverflow`] at capacity.
    pub fn push(&mut self, value: i64, mnemonic: &'static str) -> Result<(), VmError> {
        if self.items.len() >= self.capacity {
            return Err(VmError::StackOverflow {
                mnemonic,
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Pops the top value, failing with [`VmError::StackUnderflow`] when empty.
    pub fn pop(&mut self, mnemonic: &'static str) -> Result<i64, VmError> {
        self.items.pop().ok_or(VmError::StackUnderflow {
            mnemonic,
            needed: 1,
            depth: 0,
        })
    }

    /// Returns the value `depth` positions below the top (0 = top).
    pub fn peek(&self, depth: usize, mnemonic: &'static str) -> Result<i64, VmError> {
        let len = self.items.len();
        if depth >= len {
            return Err(VmError::StackUnderflow {
                mnemonic,
                needed: depth + 1,
                depth: len,
            });
        }
        Ok(self.items[len - 1 - depth])
    }

    /// Mutable access to the top value, for in-place operations.
    pub fn top_mut(&mut self, mnemonic: &'static str) -> Result<&mut i64, VmError> {
        self.items.last_mut().ok_or(VmError::StackUnderflow {
            mnemonic,
            needed: 1,
            depth: 0,
        })
    }

    /// All live values, bottom to top.
    pub fn as_slice(&self) -> &[i64] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_in_lifo_order() {
        let mut stack = OperandStack::new(4);
        stack.push(1, "push").unwrap();
        stack.push(2, "push").unwrap();
        assert_eq!(stack.pop("drop").unwrap(), 2);
        assert_eq!(stack.pop("drop").unwrap(), 1);
    }

    #[test]
    fn underflow_names_the_operation() {
        let mut stack = OperandStack::new(4);
        let err = stack.pop("+").unwrap_err();
        assert!(matches!(err, VmError::StackUnderflow { mnemonic: "+", .. }));
    }

    #[test]
    fn overflow_at_capacity() {
        let mut stack = OperandStack::new(2);
        stack.push(1, "push").unwrap();
        stack.push(2, "push").unwrap();
        let err = stack.push(3, "push").unwrap_err();
        assert!(matches!(err, VmError::StackOverflow { capacity: 2, .. }));
        // The failed push must not clobber existing values.
        assert_eq!(stack.as_slice(), [1, 2]);
    }

    #[test]
    fn peek_counts_from_the_top() {
        let mut stack = OperandStack::new(4);
        stack.push(10, "push").unwrap();
        stack.push(20, "push").unwrap();
        assert_eq!(stack.peek(0, "dup").unwrap(), 20);
        assert_eq!(stack.peek(1, "over").unwrap(), 10);
        let err = stack.peek(2, "over").unwrap_err();
        assert!(matches!(
            err,
            VmError::StackUnderflow {
                needed: 3,
                depth: 2,
                ..
            }
        ));
    }

    #[test]
    fn top_mut_edits_in_place() {
        let mut stack = OperandStack::new(4);
        stack.push(0, "push").unwrap();
        *stack.top_mut("!").unwrap() = 1;
        assert_eq!(stack.as_slice(), [1]);
        assert_eq!(stack.depth(), 1);
    }
}

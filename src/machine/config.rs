//! Interpreter capacity configuration.

/// Fixed capacities for one interpreter run.
///
/// Passed explicitly into assembly and machine construction; no capacity is
/// compiled into the pipeline itself. The defaults mirror the reference
/// interpreter's limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Maximum number of instructions a program may contain.
    pub program_capacity: usize,
    /// Maximum operand stack depth.
    pub stack_capacity: usize,
}

impl MachineConfig {
    pub const DEFAULT_PROGRAM_CAPACITY: usize = 100;
    pub const DEFAULT_STACK_CAPACITY: usize = 100;
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            program_capacity: Self::DEFAULT_PROGRAM_CAPACITY,
            stack_capacity: Self::DEFAULT_STACK_CAPACITY,
        }
    }
}

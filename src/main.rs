//! Stack-machine interpreter CLI.
//!
//! Assembles a source file and executes it, writing program output to
//! stdout and diagnostics to stderr.
//!
//! # Usage
//! ```text
//! stackmachine <program.sm> [OPTIONS]
//! ```
//!
//! # Arguments
//! - `program.sm`: Source file to assemble and run
//!
//! # Options
//! - `--program-size <n>`: Instruction capacity (default 100)
//! - `--stack-depth <n>`: Operand stack capacity (default 100)
//! - `--dump`: Print the assembled listing instead of executing
//!
//! # Exit codes
//! 0 on success; otherwise one distinct code per failure kind (see
//! `VmError::exit_code`).

use stackmachine::error;
use stackmachine::machine::assembler::assemble_file;
use stackmachine::machine::config::MachineConfig;
use stackmachine::machine::vm::Machine;
use std::env;
use std::io;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let input_path = &args[1];
    let mut config = MachineConfig::default();
    let mut dump = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            k @ ("--program-size" | "--stack-depth") => {
                i += 1;
                if i >= args.len() {
                    error!("{k} requires an argument");
                    process::exit(1);
                }
                let n = args[i].parse::<usize>().unwrap_or_else(|_| {
                    error!("Invalid capacity for {k}: '{}' is not a number", args[i]);
                    process::exit(1);
                });
                if n == 0 {
                    error!("{k} must be greater than 0");
                    process::exit(1);
                }
                if k == "--program-size" {
                    config.program_capacity = n;
                } else {
                    config.stack_capacity = n;
                }
                i += 1;
            }
            "--dump" => {
                dump = true;
                i += 1;
            }
            other => {
                error!("Unexpected argument: {}", other);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    let program = match assemble_file(input_path, &config) {
        Ok(p) => p,
        Err(e) => {
            error!("{e}");
            process::exit(e.exit_code());
        }
    };

    if dump {
        for (index, inst) in program.assembled().iter().enumerate() {
            println!("{index:>4}  {inst}");
        }
        return;
    }

    let stdout = io::stdout();
    let mut machine = Machine::new(program, &config, stdout.lock());
    if let Err(e) = machine.run() {
        error!("{e}");
        process::exit(e.exit_code());
    }
}

const USAGE: &str = "\
Stack Machine Interpreter

USAGE:
    {program} <program.sm> [OPTIONS]

ARGS:
    <program.sm>    Source file to assemble and run

OPTIONS:
    --program-size <n>    Instruction capacity (default 100)
    --stack-depth <n>     Operand stack capacity (default 100)
    --dump                Print the assembled listing instead of executing
    -h, --help            Print this help message

EXAMPLES:
    # Print 8
    echo '5 3 + . quit' > sum.sm
    {program} sum.sm

    # Count down from 3
    echo '3 loop: dup . -1 + dup :loop then quit' > count.sm
    {program} count.sm

    # Inspect the assembled instructions without running them
    {program} count.sm --dump
";

/// Prints usage information to stderr.
fn print_usage(program: &str) {
    eprintln!("{}", USAGE.replace("{program}", program));
}

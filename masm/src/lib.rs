//! Program frontend for the [mipsim](../mipsim/index.html) interpreter.
//!
//! The crate has two jobs: [`load`](fn.load.html) runs the two-pass scan
//! that validates a program's sections and builds its label table and data
//! memory, and [`decode`](fn.decode.html) turns one instruction line into
//! a decoded [`Instruction`](../mipsim/enum.Instruction.html). Decoding is
//! per-line because the interpreter re-reads the line at the program
//! counter on every step; nothing is assembled ahead of time.
//!
//! Instruction operand syntax is parsed with [pest]; the section
//! directives and label definitions follow positional legacy rules and
//! are scanned by hand (see [`scan`](scan/index.html)).
//!
//! # MASM Program Format
//!
//! A program is UTF-8 text of at most 10000 lines. Comments start with a
//! hash symbol `#` and run to the end of the line. Two directives divide
//! the program: an optional `.data` section followed by a mandatory
//! `.text` section, each directive alone on its line.
//!
//! ## `.data` Section
//!
//! Each line defines one labeled 32-bit word:
//!
//! ```text
//! counter: .word 42
//! limit:   .word -7   # negative values are fine
//! ```
//!
//! Labels are ASCII alphanumeric, must not begin with a digit, and must
//! be unique. Values must fit a signed 32-bit integer.
//!
//! ## `.text` Section
//!
//! Each line is blank, a single `label:`, or one instruction. The label
//! `main` is mandatory and marks the entry point. The instructions:
//!
//!  Mnemonic | Description                  | Syntax
//! ----------|------------------------------|----------------------
//! `add`     | Add                          | `add $d, $s, $t`
//! `sub`     | Subtract                     | `sub $d, $s, $t`
//! `mul`     | Multiply (low 32 bits)       | `mul $d, $s, $t`
//! `and`     | Bitwise and                  | `and $d, $s, $t`
//! `or`      | Bitwise or                   | `or $d, $s, $t`
//! `nor`     | Bitwise nor                  | `nor $d, $s, $t`
//! `slt`     | Set if less than             | `slt $d, $s, $t`
//! `addi`    | Add immediate                | `addi $d, $s, imm`
//! `andi`    | And immediate                | `andi $d, $s, imm`
//! `ori`     | Or immediate                 | `ori $d, $s, imm`
//! `slti`    | Set if less than immediate   | `slti $d, $s, imm`
//! `lw`      | Load word                    | `lw $d, off($s)` or `lw $d, label`
//! `sw`      | Store word                   | `sw $s, off($t)` or `sw $s, label`
//! `beq`     | Branch if equal              | `beq $s, $t, label`
//! `bne`     | Branch if not equal          | `bne $s, $t, label`
//! `j`       | Jump                         | `j label`
//! `halt`    | Stop execution               | `halt`
//!
//! Register references are `$` followed by one of the 32 register names
//! (`zero`, `at`, `v0`-`v1`, `a0`-`a3`, `t0`-`t9`, `s0`-`s8`, `k0`-`k1`,
//! `gp`, `sp`, `ra`). `$zero` may never be written and `$at` may not be
//! used at all. The offset forms of `lw`/`sw` address the stack through
//! `$sp`; labeled words are addressed by name only.
//!
//! [pest]: https://docs.rs/pest/

mod data;
mod decode;
mod error;
mod parser;
pub mod scan;
mod text;


pub use crate::decode::{decode, Decoded};
pub use crate::error::{LineError, ParseError};

use mipsim::{DataMemory, Program};

/// Runs both loader passes over the program text and builds the loaded
/// [`Program`](../mipsim/struct.Program.html) (lines, text labels, entry
/// point) plus its data memory.
pub fn load(lines: &[String]) -> Result<(Program, DataMemory), LineError> {
    let data = data::scan_data_section(lines)?;
    let (labels, entry) = text::scan_text_section(lines)?;
    Ok((Program::new(lines.to_vec(), labels, entry), data))
}

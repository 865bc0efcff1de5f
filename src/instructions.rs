use crate::Word;
use num::traits::ToPrimitive;
use num_derive::{FromPrimitive, ToPrimitive};
use util::{EnumFromStr, EnumName};
use util_derive::{EnumFromStr, EnumName};

/// List of available registers, in register-file order.
///
/// `zero` is hardwired to zero and may never be written; `at` is reserved
/// for the assembler and may never be read or written by user code; `sp`
/// must always hold a 4-byte-aligned address inside the stack.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, ToPrimitive, FromPrimitive, EnumName, EnumFromStr,
)]
pub enum RegisterId {
    /// Always zero (write forbidden).
    ZERO,
    /// Assembler temporary (reserved, any use forbidden).
    AT,
    /// Value 0.
    V0,
    /// Value 1.
    V1,
    /// Argument 0.
    A0,
    /// Argument 1.
    A1,
    /// Argument 2.
    A2,
    /// Argument 3.
    A3,
    /// Temporary 0.
    T0,
    /// Temporary 1.
    T1,
    /// Temporary 2.
    T2,
    /// Temporary 3.
    T3,
    /// Temporary 4.
    T4,
    /// Temporary 5.
    T5,
    /// Temporary 6.
    T6,
    /// Temporary 7.
    T7,
    /// Saved 0.
    S0,
    /// Saved 1.
    S1,
    /// Saved 2.
    S2,
    /// Saved 3.
    S3,
    /// Saved 4.
    S4,
    /// Saved 5.
    S5,
    /// Saved 6.
    S6,
    /// Saved 7.
    S7,
    /// Temporary 8.
    T8,
    /// Temporary 9.
    T9,
    /// Kernel 0.
    K0,
    /// Kernel 1.
    K1,
    /// Global pointer.
    GP,
    /// Stack pointer.
    SP,
    /// Saved 8 (frame pointer slot).
    S8,
    /// Return address.
    RA,
}

impl std::fmt::Display for RegisterId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
pub fn register_index(id: RegisterId) -> usize {
    id.to_usize().unwrap()
}

/// Recognised operation mnemonics, in instruction-set order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumFromStr)]
pub enum Opcode {
    ADD,
    SUB,
    MUL,
    AND,
    OR,
    NOR,
    SLT,
    ADDI,
    ANDI,
    ORI,
    SLTI,
    LW,
    SW,
    BEQ,
    BNE,
    J,
    HALT,
}

/// Operand syntax family of an opcode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Format {
    /// Three registers: `op $d, $s, $t`.
    Register,
    /// Two registers and an integer literal: `op $d, $s, imm`.
    Immediate,
    /// Register and a memory operand: `op $d, off($s)` or `op $d, label`.
    Memory,
    /// Two registers and a text label: `op $s, $t, label`.
    Branch,
    /// A single text label: `j label`.
    Jump,
    /// No operands.
    NoOperands,
}

impl Opcode {
    pub fn format(self) -> Format {
        match self {
            Opcode::ADD
            | Opcode::SUB
            | Opcode::MUL
            | Opcode::AND
            | Opcode::OR
            | Opcode::NOR
            | Opcode::SLT => Format::Register,
            Opcode::ADDI | Opcode::ANDI | Opcode::ORI | Opcode::SLTI => Format::Immediate,
            Opcode::LW | Opcode::SW => Format::Memory,
            Opcode::BEQ | Opcode::BNE => Format::Branch,
            Opcode::J => Format::Jump,
            Opcode::HALT => Format::NoOperands,
        }
    }
}

/// Where a `lw` takes its word from.
///
/// The label form is resolved at decode time: the decoder looks the label
/// up in data memory and carries the stored value itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadSource {
    /// Stack cell at `base + offset`.
    Stack { base: RegisterId, offset: Word },
    /// Current value of a data-memory entry.
    Data { value: Word },
}

/// Where a `sw` puts its word.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StoreTarget {
    /// Stack cell at `base + offset`.
    Stack { base: RegisterId, offset: Word },
    /// Data-memory entry by index (sorted-by-label order).
    Data { index: usize },
}

/// One decoded instruction. Each variant carries exactly the operands its
/// semantics use; branch and jump targets are already resolved to line
/// indices.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Instruction {
    Add { rd: RegisterId, rs1: RegisterId, rs2: RegisterId },
    Sub { rd: RegisterId, rs1: RegisterId, rs2: RegisterId },
    Mul { rd: RegisterId, rs1: RegisterId, rs2: RegisterId },
    And { rd: RegisterId, rs1: RegisterId, rs2: RegisterId },
    Or { rd: RegisterId, rs1: RegisterId, rs2: RegisterId },
    Nor { rd: RegisterId, rs1: RegisterId, rs2: RegisterId },
    Slt { rd: RegisterId, rs1: RegisterId, rs2: RegisterId },
    Addi { rd: RegisterId, rs1: RegisterId, immediate: Word },
    Andi { rd: RegisterId, rs1: RegisterId, immediate: Word },
    Ori { rd: RegisterId, rs1: RegisterId, immediate: Word },
    Slti { rd: RegisterId, rs1: RegisterId, immediate: Word },
    Lw { rd: RegisterId, source: LoadSource },
    Sw { rs: RegisterId, target: StoreTarget },
    Beq { rs1: RegisterId, rs2: RegisterId, target: usize },
    Bne { rs1: RegisterId, rs2: RegisterId, target: usize },
    J { target: usize },
    Halt,
}

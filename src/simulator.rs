use std::error::Error as StdError;
use std::fmt;

use crate::instructions::{Instruction, LoadSource, RegisterId, StoreTarget};
use crate::memory::{DataMemory, Stack};
use crate::program::Program;
use crate::registers::RegisterFile;
use crate::Word;

/// Runtime faults. Both abort the offending instruction before any state
/// change is committed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecError {
    /// Write to `zero`, or any use of `at`.
    InvalidRegisterUsage,
    /// An address or a value destined for `sp` is outside `40000..=40396`
    /// or not 4-byte aligned.
    BadStackAddress,
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExecError::InvalidRegisterUsage => f.write_str("Invalid usage of registers."),
            ExecError::BadStackAddress => f.write_str(
                "Invalid address for stack pointer. \
                 To access data section, use labels instead of addresses.",
            ),
        }
    }
}

impl StdError for ExecError {}

/// The interpreter state machine.
///
/// Owns every piece of mutable machine state: the register file, the
/// stack, data memory, the program text and the `(program counter, halt)`
/// pair. [`execute`] applies one decoded instruction and advances the
/// program counter according to the opcode's control flow; the driver
/// loop decides when to stop.
///
/// [`execute`]: #method.execute
#[derive(Clone, Debug)]
pub struct Simulator {
    registers: RegisterFile,
    stack: Stack,
    data: DataMemory,
    program: Program,
    program_counter: usize,
    halted: bool,
}

impl Simulator {
    pub fn new(program: Program, data: DataMemory) -> Simulator {
        let program_counter = program.entry();
        Simulator {
            registers: RegisterFile::new(),
            stack: Stack::new(),
            data,
            program,
            program_counter,
            halted: false,
        }
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn data(&self) -> &DataMemory {
        &self.data
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn program_counter(&self) -> usize {
        self.program_counter
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Writes a register directly, bypassing the reserved-register policy.
    /// Meant for seeding state in tests and tooling.
    pub fn set_register(&mut self, id: RegisterId, value: Word) {
        self.registers.set(id, value);
    }

    /// Falls through to the next line (blank and label lines).
    pub fn advance(&mut self) {
        self.program_counter += 1;
    }

    /// Executes one decoded instruction.
    ///
    /// On error no register, stack cell or memory cell has been modified
    /// and the program counter is unchanged.
    pub fn execute(&mut self, instruction: &Instruction) -> Result<(), ExecError> {
        match *instruction {
            Instruction::Add { rd, rs1, rs2 } => self.alu(rd, rs1, rs2, Word::wrapping_add),
            Instruction::Sub { rd, rs1, rs2 } => self.alu(rd, rs1, rs2, Word::wrapping_sub),
            Instruction::Mul { rd, rs1, rs2 } => self.alu(rd, rs1, rs2, Word::wrapping_mul),
            Instruction::And { rd, rs1, rs2 } => self.alu(rd, rs1, rs2, |a, b| a & b),
            Instruction::Or { rd, rs1, rs2 } => self.alu(rd, rs1, rs2, |a, b| a | b),
            Instruction::Nor { rd, rs1, rs2 } => self.alu(rd, rs1, rs2, |a, b| !(a | b)),
            Instruction::Slt { rd, rs1, rs2 } => {
                check_destination(rd)?;
                check_source(rs1)?;
                check_source(rs2)?;
                let flag = (self.registers.get(rs1) < self.registers.get(rs2)) as Word;
                // Comparison results skip the stack check.
                self.registers.set(rd, flag);
                self.program_counter += 1;
                Ok(())
            }
            Instruction::Addi { rd, rs1, immediate } => {
                self.alu_immediate(rd, rs1, immediate, Word::wrapping_add)
            }
            Instruction::Andi { rd, rs1, immediate } => {
                self.alu_immediate(rd, rs1, immediate, |a, b| a & b)
            }
            Instruction::Ori { rd, rs1, immediate } => {
                self.alu_immediate(rd, rs1, immediate, |a, b| a | b)
            }
            Instruction::Slti { rd, rs1, immediate } => {
                check_destination(rd)?;
                check_source(rs1)?;
                let flag = (self.registers.get(rs1) < immediate) as Word;
                self.registers.set(rd, flag);
                self.program_counter += 1;
                Ok(())
            }
            Instruction::Lw { rd, source } => {
                check_destination(rd)?;
                let value = match source {
                    LoadSource::Stack { base, offset } => {
                        let address = self.registers.get(base).wrapping_add(offset);
                        let index =
                            Stack::index_of(address).ok_or(ExecError::BadStackAddress)?;
                        self.stack.get(index)
                    }
                    LoadSource::Data { value } => value,
                };
                if rd == RegisterId::SP && Stack::index_of(value).is_none() {
                    return Err(ExecError::BadStackAddress);
                }
                self.registers.set(rd, value);
                self.program_counter += 1;
                Ok(())
            }
            Instruction::Sw { rs, target } => {
                check_source(rs)?;
                let value = self.registers.get(rs);
                match target {
                    StoreTarget::Stack { base, offset } => {
                        let address = self.registers.get(base).wrapping_add(offset);
                        let index =
                            Stack::index_of(address).ok_or(ExecError::BadStackAddress)?;
                        self.stack.set(index, value);
                    }
                    StoreTarget::Data { index } => self.data.set_value(index, value),
                }
                self.program_counter += 1;
                Ok(())
            }
            Instruction::Beq { rs1, rs2, target } => {
                check_source(rs1)?;
                check_source(rs2)?;
                if self.registers.get(rs1) == self.registers.get(rs2) {
                    self.program_counter = target;
                } else {
                    self.program_counter += 1;
                }
                Ok(())
            }
            Instruction::Bne { rs1, rs2, target } => {
                check_source(rs1)?;
                check_source(rs2)?;
                if self.registers.get(rs1) != self.registers.get(rs2) {
                    self.program_counter = target;
                } else {
                    self.program_counter += 1;
                }
                Ok(())
            }
            Instruction::J { target } => {
                self.program_counter = target;
                Ok(())
            }
            Instruction::Halt => {
                self.halted = true;
                Ok(())
            }
        }
    }

    fn alu(
        &mut self,
        rd: RegisterId,
        rs1: RegisterId,
        rs2: RegisterId,
        op: fn(Word, Word) -> Word,
    ) -> Result<(), ExecError> {
        check_destination(rd)?;
        check_source(rs1)?;
        check_source(rs2)?;
        let value = op(self.registers.get(rs1), self.registers.get(rs2));
        self.commit(rd, value)
    }

    fn alu_immediate(
        &mut self,
        rd: RegisterId,
        rs1: RegisterId,
        immediate: Word,
        op: fn(Word, Word) -> Word,
    ) -> Result<(), ExecError> {
        check_destination(rd)?;
        check_source(rs1)?;
        let value = op(self.registers.get(rs1), immediate);
        self.commit(rd, value)
    }

    fn commit(&mut self, rd: RegisterId, value: Word) -> Result<(), ExecError> {
        // A value headed for sp must itself be a valid stack address.
        if rd == RegisterId::SP && Stack::index_of(value).is_none() {
            return Err(ExecError::BadStackAddress);
        }
        self.registers.set(rd, value);
        self.program_counter += 1;
        Ok(())
    }
}

fn check_destination(rd: RegisterId) -> Result<(), ExecError> {
    if rd == RegisterId::ZERO || rd == RegisterId::AT {
        Err(ExecError::InvalidRegisterUsage)
    } else {
        Ok(())
    }
}

fn check_source(rs: RegisterId) -> Result<(), ExecError> {
    if rs == RegisterId::AT {
        Err(ExecError::InvalidRegisterUsage)
    } else {
        Ok(())
    }
}

use super::*;

#[test]
fn taken_sets_program_counter() {
    executes! {
        Instruction::Bne { rs1: RegisterId::T0, rs2: RegisterId::T1, target: 9 },
        [T0 = 1, T1 = 2] => [],
        9
    };
}

#[test]
fn not_taken_falls_through() {
    executes! {
        Instruction::Bne { rs1: RegisterId::T0, rs2: RegisterId::T1, target: 9 },
        [T0 = 2, T1 = 2] => [],
        1
    };
}

#[test]
fn same_register_never_branches() {
    executes! {
        Instruction::Bne { rs1: RegisterId::T0, rs2: RegisterId::T0, target: 9 },
        [T0 = 77] => [],
        1
    };
}

#[test]
fn at_operand_fails() {
    fails! {
        Instruction::Bne { rs1: RegisterId::T0, rs2: RegisterId::AT, target: 9 },
        [],
        InvalidRegisterUsage
    };
}

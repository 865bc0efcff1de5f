use super::*;

#[test]
fn taken_sets_program_counter() {
    executes! {
        Instruction::Beq { rs1: RegisterId::T0, rs2: RegisterId::T1, target: 7 },
        [T0 = 5, T1 = 5] => [],
        7
    };
}

#[test]
fn not_taken_falls_through() {
    executes! {
        Instruction::Beq { rs1: RegisterId::T0, rs2: RegisterId::T1, target: 7 },
        [T0 = 5, T1 = 6] => [],
        1
    };
}

#[test]
fn same_register_is_unconditional() {
    executes! {
        Instruction::Beq { rs1: RegisterId::T0, rs2: RegisterId::T0, target: 3 },
        [T0 = 123] => [],
        3
    };
}

#[test]
fn zero_register_comparison_is_allowed() {
    executes! {
        Instruction::Beq { rs1: RegisterId::T0, rs2: RegisterId::ZERO, target: 4 },
        [] => [],
        4
    };
}

#[test]
fn at_operand_fails() {
    fails! {
        Instruction::Beq { rs1: RegisterId::AT, rs2: RegisterId::T0, target: 4 },
        [],
        InvalidRegisterUsage
    };
}

use super::*;

#[test]
fn positive() {
    executes! {
        imm!(Addi, T0, T1, 1234),
        [T1 = 5678] => [T0 = 6912]
    };
}

#[test]
fn negative_immediate() {
    executes! {
        imm!(Addi, T0, T1, -1234),
        [T1 = 5678] => [T0 = 4444]
    };
}

#[test]
fn zero_immediate_copies() {
    executes! {
        imm!(Addi, T0, T1, 0),
        [T1 = -77] => [T0 = -77]
    };
}

#[test]
fn overflow_wraps() {
    executes! {
        imm!(Addi, T0, T1, 1),
        [T1 = i32::max_value()] => [T0 = i32::min_value()]
    };
}

#[test]
fn moves_stack_pointer_within_bounds() {
    executes! {
        imm!(Addi, SP, SP, -4),
        [] => [SP = 40_392]
    };
}

#[test]
fn stack_pointer_lower_bound_is_inclusive() {
    executes! {
        imm!(Addi, SP, SP, -396),
        [] => [SP = 40_000]
    };
}

#[test]
fn stack_pointer_above_limit_fails() {
    fails! {
        imm!(Addi, SP, SP, 4),
        [],
        BadStackAddress
    };
}

#[test]
fn stack_pointer_below_base_fails() {
    fails! {
        imm!(Addi, SP, SP, -400),
        [],
        BadStackAddress
    };
}

#[test]
fn stack_pointer_misalignment_fails() {
    fails! {
        imm!(Addi, SP, SP, -2),
        [],
        BadStackAddress
    };
}

#[test]
fn write_to_zero_fails() {
    fails! {
        imm!(Addi, ZERO, T0, 5),
        [],
        InvalidRegisterUsage
    };
}

#[test]
fn source_at_fails() {
    fails! {
        imm!(Addi, T0, AT, 5),
        [],
        InvalidRegisterUsage
    };
}

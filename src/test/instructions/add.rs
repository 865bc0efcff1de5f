use super::*;

#[test]
fn adds() {
    executes! {
        alu!(Add, T2, T0, T1),
        [T0 = 42, T1 = 64] => [T2 = 106]
    };
}

#[test]
fn negative_operand() {
    executes! {
        alu!(Add, T2, T0, T1),
        [T0 = 20, T1 = -50] => [T2 = -30]
    };
}

#[test]
fn overflow_wraps() {
    executes! {
        alu!(Add, T2, T0, T1),
        [T0 = i32::max_value(), T1 = 1] => [T2 = i32::min_value()]
    };
}

#[test]
fn reading_zero_is_allowed() {
    executes! {
        alu!(Add, T0, ZERO, ZERO),
        [T0 = 17] => [T0 = 0]
    };
}

#[test]
fn stack_pointer_stays_in_bounds() {
    executes! {
        alu!(Add, SP, T0, T1),
        [T0 = 40_000, T1 = 8] => [SP = 40_008]
    };
}

#[test]
fn stack_pointer_out_of_bounds() {
    fails! {
        alu!(Add, SP, T0, T1),
        [T0 = 40_396, T1 = 4],
        BadStackAddress
    };
}

#[test]
fn stack_pointer_misaligned() {
    fails! {
        alu!(Add, SP, T0, T1),
        [T0 = 40_000, T1 = 2],
        BadStackAddress
    };
}

#[test]
fn write_to_zero_fails() {
    fails! {
        alu!(Add, ZERO, T0, T1),
        [T0 = 1],
        InvalidRegisterUsage
    };
}

#[test]
fn any_use_of_at_fails() {
    fails! {
        alu!(Add, AT, T0, T1),
        [],
        InvalidRegisterUsage
    };
    fails! {
        alu!(Add, T0, AT, T1),
        [],
        InvalidRegisterUsage
    };
    fails! {
        alu!(Add, T0, T1, AT),
        [],
        InvalidRegisterUsage
    };
}

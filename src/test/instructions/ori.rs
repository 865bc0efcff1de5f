use super::*;

#[test]
fn merges() {
    executes! {
        imm!(Ori, T0, T1, 0x00FF),
        [T1 = 0x1200] => [T0 = 0x12FF]
    };
}

#[test]
fn loads_value_through_zero_register() {
    executes! {
        imm!(Ori, T0, ZERO, 77),
        [] => [T0 = 77]
    };
}

#[test]
fn source_at_fails() {
    fails! {
        imm!(Ori, T0, AT, 1),
        [],
        InvalidRegisterUsage
    };
}

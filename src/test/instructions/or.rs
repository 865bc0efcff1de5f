use super::*;

#[test]
fn merges_bits() {
    executes! {
        alu!(Or, T2, T0, T1),
        [T0 = 0b1100, T1 = 0b1010] => [T2 = 0b1110]
    };
}

#[test]
fn negative_pattern() {
    executes! {
        alu!(Or, T2, T0, T1),
        [T0 = -1, T1 = 0x0F0F] => [T2 = -1]
    };
}

#[test]
fn any_use_of_at_fails() {
    fails! {
        alu!(Or, T2, T0, AT),
        [],
        InvalidRegisterUsage
    };
}

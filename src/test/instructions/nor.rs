use super::*;

#[test]
fn nors_bits() {
    executes! {
        alu!(Nor, T2, T0, T1),
        [T0 = 0b1100, T1 = 0b1010] => [T2 = !0b1110]
    };
}

#[test]
fn self_nor_self_is_complement() {
    executes! {
        alu!(Nor, T1, T0, T0),
        [T0 = 0x1234_5678] => [T1 = !0x1234_5678]
    };
}

#[test]
fn nor_with_zero_register_is_complement() {
    executes! {
        alu!(Nor, T1, T0, ZERO),
        [T0 = 0] => [T1 = -1]
    };
}

#[test]
fn write_to_zero_fails() {
    fails! {
        alu!(Nor, ZERO, T0, T1),
        [],
        InvalidRegisterUsage
    };
}

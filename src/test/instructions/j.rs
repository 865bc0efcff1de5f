use super::*;

#[test]
fn sets_program_counter() {
    executes! {
        Instruction::J { target: 5 },
        [] => [],
        5
    };
}

#[test]
fn jump_to_line_zero() {
    executes! {
        Instruction::J { target: 0 },
        [] => [],
        0
    };
}

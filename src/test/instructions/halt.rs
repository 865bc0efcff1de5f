use super::*;

#[test]
fn sets_halt_flag() {
    let mut sim = test_simulator();

    sim.execute(&Instruction::Halt).unwrap();

    assert!(sim.halted());
}

#[test]
fn does_not_advance_program_counter() {
    let mut sim = test_simulator();

    sim.execute(&Instruction::Halt).unwrap();

    assert_eq!(0, sim.program_counter());
}

#[test]
fn leaves_registers_untouched() {
    let mut sim = test_simulator();
    let registers = *sim.registers().values();

    sim.execute(&Instruction::Halt).unwrap();

    assert_eq!(&registers, sim.registers().values());
}

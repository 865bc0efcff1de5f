use super::*;

#[test]
fn loads_from_stack() {
    let mut sim = test_simulator();
    sim.set_register(RegisterId::T0, 42);
    sim.execute(&Instruction::Sw {
        rs: RegisterId::T0,
        target: StoreTarget::Stack {
            base: RegisterId::SP,
            offset: 0,
        },
    })
    .unwrap();

    sim.execute(&Instruction::Lw {
        rd: RegisterId::T1,
        source: LoadSource::Stack {
            base: RegisterId::SP,
            offset: 0,
        },
    })
    .unwrap();

    assert_eq!(42, sim.registers().get(RegisterId::T1));
    assert_eq!(2, sim.program_counter());
}

#[test]
fn negative_offset() {
    let mut sim = test_simulator();
    sim.set_register(RegisterId::T0, 23);
    sim.execute(&Instruction::Sw {
        rs: RegisterId::T0,
        target: StoreTarget::Stack {
            base: RegisterId::SP,
            offset: -4,
        },
    })
    .unwrap();

    sim.execute(&Instruction::Lw {
        rd: RegisterId::T1,
        source: LoadSource::Stack {
            base: RegisterId::SP,
            offset: -4,
        },
    })
    .unwrap();

    assert_eq!(23, sim.registers().get(RegisterId::T1));
    assert_eq!(23, sim.stack().get(98));
}

#[test]
fn loads_data_value() {
    executes! {
        Instruction::Lw { rd: RegisterId::T0, source: LoadSource::Data { value: 7 } },
        [] => [T0 = 7]
    };
}

#[test]
fn address_outside_stack_fails() {
    fails! {
        Instruction::Lw {
            rd: RegisterId::T0,
            source: LoadSource::Stack { base: RegisterId::T1, offset: 0 },
        },
        [T1 = 0],
        BadStackAddress
    };
}

#[test]
fn misaligned_address_fails() {
    fails! {
        Instruction::Lw {
            rd: RegisterId::T0,
            source: LoadSource::Stack { base: RegisterId::SP, offset: -2 },
        },
        [],
        BadStackAddress
    };
}

#[test]
fn valid_stack_address_may_enter_sp() {
    executes! {
        Instruction::Lw { rd: RegisterId::SP, source: LoadSource::Data { value: 40_008 } },
        [] => [SP = 40_008]
    };
}

#[test]
fn loaded_value_entering_sp_is_checked() {
    fails! {
        Instruction::Lw { rd: RegisterId::SP, source: LoadSource::Data { value: 7 } },
        [],
        BadStackAddress
    };
}

#[test]
fn zeroed_stack_word_cannot_enter_sp() {
    // The checked value is the word read from the stack, not the address.
    fails! {
        Instruction::Lw {
            rd: RegisterId::SP,
            source: LoadSource::Stack { base: RegisterId::SP, offset: 0 },
        },
        [],
        BadStackAddress
    };
}

#[test]
fn write_to_zero_fails() {
    fails! {
        Instruction::Lw { rd: RegisterId::ZERO, source: LoadSource::Data { value: 1 } },
        [],
        InvalidRegisterUsage
    };
}

#[test]
fn write_to_at_fails() {
    fails! {
        Instruction::Lw { rd: RegisterId::AT, source: LoadSource::Data { value: 1 } },
        [],
        InvalidRegisterUsage
    };
}

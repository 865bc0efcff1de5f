use super::*;

#[test]
fn stores_to_stack() {
    let sim = executes! {
        Instruction::Sw {
            rs: RegisterId::T0,
            target: StoreTarget::Stack { base: RegisterId::SP, offset: 0 },
        },
        [T0 = 42] => []
    };

    // sp starts at the last cell.
    assert_eq!(42, sim.stack().get(99));
}

#[test]
fn stores_at_stack_base() {
    let sim = executes! {
        Instruction::Sw {
            rs: RegisterId::T0,
            target: StoreTarget::Stack { base: RegisterId::T1, offset: 0 },
        },
        [T0 = 5, T1 = 40_000] => []
    };

    assert_eq!(5, sim.stack().get(0));
}

#[test]
fn storing_zero_register_is_allowed() {
    let sim = executes! {
        Instruction::Sw {
            rs: RegisterId::ZERO,
            target: StoreTarget::Stack { base: RegisterId::SP, offset: 0 },
        },
        [] => []
    };

    assert_eq!(0, sim.stack().get(99));
}

#[test]
fn stores_to_data_memory() {
    let mut sim = data_simulator(vec![DataEntry {
        label: "x".to_string(),
        value: 1,
    }]);
    sim.set_register(RegisterId::T0, 99);

    sim.execute(&Instruction::Sw {
        rs: RegisterId::T0,
        target: StoreTarget::Data { index: 0 },
    })
    .unwrap();

    assert_eq!(99, sim.data().value(0));
    assert_eq!(1, sim.program_counter());
}

#[test]
fn address_below_stack_fails() {
    fails! {
        Instruction::Sw {
            rs: RegisterId::T0,
            target: StoreTarget::Stack { base: RegisterId::T1, offset: 0 },
        },
        [T1 = 39_996],
        BadStackAddress
    };
}

#[test]
fn address_above_stack_fails() {
    fails! {
        Instruction::Sw {
            rs: RegisterId::T0,
            target: StoreTarget::Stack { base: RegisterId::SP, offset: 4 },
        },
        [],
        BadStackAddress
    };
}

#[test]
fn source_at_fails() {
    fails! {
        Instruction::Sw {
            rs: RegisterId::AT,
            target: StoreTarget::Stack { base: RegisterId::SP, offset: 0 },
        },
        [],
        InvalidRegisterUsage
    };
}

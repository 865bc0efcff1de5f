use std::io::{self, Write};

use num::traits::FromPrimitive;
use util::EnumName;

use crate::constants;
use crate::instructions::RegisterId;
use crate::simulator::Simulator;

/// Dumps the full machine state: the line being executed, the program
/// counter as a byte address, all 32 registers, the 100 stack cells and
/// every data-memory entry. Addresses are rendered in hexadecimal; column
/// widths follow the legacy console layout.
pub fn write_state<W: Write>(out: &mut W, sim: &Simulator) -> io::Result<()> {
    let pc = sim.program_counter();
    let lines = sim.program().lines();

    // Past the last line (normal end of execution) the final line is shown.
    let current = if pc < lines.len() {
        lines[pc].as_str()
    } else if !lines.is_empty() {
        lines[lines.len() - 1].as_str()
    } else {
        ""
    };

    writeln!(out, "\nExecuting instruction: {}", current)?;
    writeln!(out, "\nProgram Counter: {}\n", constants::WORD_BYTES * pc)?;

    writeln!(out, "Registers:\n")?;
    writeln!(
        out,
        "{:>11}{:>12}\t\t{:>10}{:>12}",
        "Register", "Value", "Register", "Value"
    )?;

    let values = sim.registers().values();
    for i in 0..constants::REGISTER_COUNT / 2 {
        let left = RegisterId::from_usize(i).unwrap();
        let right = RegisterId::from_usize(i + 16).unwrap();
        writeln!(
            out,
            "{:>6}[{:2}]:{:12}\t\t{:>5}[{:2}]:{:12}",
            left.name(),
            i,
            values[i],
            right.name(),
            i + 16,
            values[i + 16]
        )?;
    }

    writeln!(out, "\nMemory:.")?;
    writeln!(
        out,
        "Address    Label   Value      Address    Label   Value    \
         Address    Label   Value     Address    Label   Value     \
         Address    Label   Value    ."
    )?;

    let cells = sim.stack().cells();
    let rows = constants::STACK_SIZE / 5;
    for i in 0..rows {
        writeln!(
            out,
            "{:7x}{:>8}:{:8}\t{:5x}{:>8}:{:8}\t{:9x}{:>8}:{:8}\t{:6x}{:>8}:{:8}\t{:11x}{:>8}:{:8}",
            address_of(i),
            "<Stack>",
            cells[i],
            address_of(i + rows),
            "<Stack>",
            cells[i + rows],
            address_of(i + 2 * rows),
            "<Stack>",
            cells[i + 2 * rows],
            address_of(i + 3 * rows),
            "<Stack>",
            cells[i + 3 * rows],
            address_of(i + 4 * rows),
            "<Stack>",
            cells[i + 4 * rows]
        )?;
    }

    for (k, entry) in sim.data().iter().enumerate() {
        writeln!(
            out,
            "{:7x}{:>8}:{:8}",
            constants::DATA_BASE as usize + constants::WORD_BYTES * k,
            entry.label,
            entry.value
        )?;
    }

    writeln!(out)
}

fn address_of(cell: usize) -> usize {
    constants::STACK_BASE as usize + constants::WORD_BYTES * cell
}

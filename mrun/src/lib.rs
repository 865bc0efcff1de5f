//! Drives a [`Simulator`](../mipsim/struct.Simulator.html): reads the
//! program file, runs the loader, then executes the fetch-decode-execute
//! loop, pausing for a keystroke after each step in step mode. All
//! console reporting (state dumps, error messages, the line report)
//! happens here; the library is generic over its reader and writer so the
//! loop is testable against in-memory I/O.

use std::error::Error as StdError;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use masm::{Decoded, LineError};
use mipsim::{constants, write_state, DataMemory, ExecError, LabelTable, Program, Simulator};

/// Execution mode, as selected by the user-facing `1`/`2` flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Display state and wait for a keystroke after every instruction.
    Step,
    /// Run to completion and display the final state.
    Run,
}

impl Mode {
    pub fn from_number(number: i32) -> Option<Mode> {
        match number {
            1 => Some(Mode::Step),
            2 => Some(Mode::Run),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    TooManyLines,
    Parse(LineError),
    Exec(ExecError),
    NoHalt,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(_) => f.write_str("File does not exist or could not be opened."),
            Error::TooManyLines => write!(
                f,
                "Number of lines in input too large, maximum allowed is {} lines.",
                constants::MAX_PROGRAM_LINES
            ),
            Error::Parse(error) => error.error.fmt(f),
            Error::Exec(error) => error.fmt(f),
            Error::NoHalt => f.write_str("Program ended without halt."),
        }
    }
}

impl StdError for Error {}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::Io(error)
    }
}

/// Reads the program file into its lines, enforcing the input cap. The
/// file handle is closed before execution starts; only the line vector
/// survives into the run.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
        if lines.len() > constants::MAX_PROGRAM_LINES {
            return Err(Error::TooManyLines);
        }
    }
    Ok(lines)
}

/// Loads the program and runs it. Loader failures are reported in the
/// uniform format (message, offending line, state dump) against a freshly
/// initialized machine.
pub fn launch<R: Read, W: Write>(
    lines: Vec<String>,
    mode: Mode,
    pause: &mut R,
    out: &mut W,
) -> Result<(), Error> {
    match masm::load(&lines) {
        Ok((program, data)) => {
            let mut sim = Simulator::new(program, data);
            run_program(&mut sim, mode, pause, out)
        }
        Err(error) => {
            let shown = error.line.unwrap_or(0);
            let sim = Simulator::new(
                Program::new(lines, LabelTable::default(), shown),
                DataMemory::default(),
            );
            report(out, &sim, error.line, &error.error)?;
            Err(Error::Parse(error))
        }
    }
}

/// The execution loop of the simulator.
///
/// Each iteration re-reads the line at the program counter, decodes it,
/// executes it, and in step mode dumps state and blocks on one byte from
/// `pause`. The loop ends on `halt`, on running past the last line, or on
/// the first error; the final state is always dumped.
pub fn run_program<R: Read, W: Write>(
    sim: &mut Simulator,
    mode: Mode,
    pause: &mut R,
    out: &mut W,
) -> Result<(), Error> {
    writeln!(
        out,
        "Initialized and ready to execute. Current state is as follows : "
    )?;
    write_state(out, sim)?;
    writeln!(out, "\nStarting execution\n")?;

    while sim.program_counter() < sim.program().len() && !sim.halted() {
        let pc = sim.program_counter();
        let raw = sim.program().line(pc).to_string();

        let line = masm::scan::trim_start(masm::scan::strip_comment(&raw));
        if line.is_empty() {
            sim.advance();
            continue;
        }

        match masm::decode(&raw, sim.program().labels(), sim.data()) {
            Ok(Decoded::Label) => sim.advance(),
            Ok(Decoded::Instruction(instruction)) => {
                if let Err(error) = sim.execute(&instruction) {
                    report(out, sim, Some(pc), &error)?;
                    return Err(Error::Exec(error));
                }
            }
            Err(error) => {
                report(out, sim, Some(pc), &error)?;
                return Err(Error::Parse(LineError::at(pc, error)));
            }
        }

        if mode == Mode::Step && !sim.halted() {
            write_state(out, sim)?;
            let mut key = [0u8; 1];
            pause.read(&mut key)?;
        }
    }

    write_state(out, sim)?;

    if !sim.halted() {
        writeln!(out, "Error: Program ended without halt.")?;
        return Err(Error::NoHalt);
    }

    writeln!(out, "\nExecution completed successfully.\n")?;
    Ok(())
}

fn report<W: Write, E: fmt::Display>(
    out: &mut W,
    sim: &Simulator,
    line: Option<usize>,
    error: &E,
) -> io::Result<()> {
    writeln!(out, "Error: {}", error)?;
    if let Some(line) = line {
        writeln!(
            out,
            "Error found in line: {}: {}",
            line + 1,
            sim.program().line(line)
        )?;
    }
    write_state(out, sim)
}

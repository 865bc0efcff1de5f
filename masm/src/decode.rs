use matches::debug_assert_matches;
use pest::error::ErrorVariant;
use pest::iterators::{Pair, Pairs};
use pest::Parser;

use mipsim::{
    DataMemory, Format, Instruction, LabelTable, LoadSource, Opcode, RegisterId, StoreTarget,
};
use util::EnumFromStr;

use crate::error::ParseError;
use crate::parser::{MasmParser, Rule};
use crate::scan;

/// Longest recognised mnemonic (`addi`, `andi`, `slti`, `halt`, ...).
const MNEMONIC_MAX: usize = 4;

/// Result of decoding one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// A `label:` line; executing it is a no-op.
    Label,
    Instruction(Instruction),
}

/// Decodes the line at the program counter.
///
/// The raw line is comment-stripped and trimmed here, so callers hand in
/// program text exactly as stored. Labels in memory operands are resolved
/// against `data` (current value for `lw`, entry index for `sw`); branch
/// and jump labels resolve against the text-label table.
pub fn decode(
    raw: &str,
    labels: &LabelTable,
    data: &DataMemory,
) -> Result<Decoded, ParseError> {
    let line = scan::trim_start(scan::strip_comment(raw));

    if line.contains(':') {
        return Ok(Decoded::Label);
    }
    // No instruction line is shorter than four characters.
    if line.len() < MNEMONIC_MAX {
        return Err(ParseError::UnknownOperation);
    }

    let (mnemonic, rest) = match line.find(scan::is_space) {
        Some(index) => (&line[..index], &line[index + 1..]),
        None => (line, ""),
    };
    if mnemonic.len() > MNEMONIC_MAX {
        return Err(ParseError::UnknownOperation);
    }
    let opcode = Opcode::from_str(mnemonic).map_err(|_| ParseError::UnknownOperation)?;

    let operands = scan::trim_start(rest);

    let instruction = match opcode.format() {
        Format::Register => {
            let pair = parse(Rule::r_operands, operands, ParseError::ExtraArguments)?;
            let mut inner = pair.into_inner();
            let rd = register_of(expect(&mut inner, Rule::register))?;
            let rs1 = register_of(expect(&mut inner, Rule::register))?;
            let rs2 = register_of(expect(&mut inner, Rule::register))?;
            match opcode {
                Opcode::ADD => Instruction::Add { rd, rs1, rs2 },
                Opcode::SUB => Instruction::Sub { rd, rs1, rs2 },
                Opcode::MUL => Instruction::Mul { rd, rs1, rs2 },
                Opcode::AND => Instruction::And { rd, rs1, rs2 },
                Opcode::OR => Instruction::Or { rd, rs1, rs2 },
                Opcode::NOR => Instruction::Nor { rd, rs1, rs2 },
                Opcode::SLT => Instruction::Slt { rd, rs1, rs2 },
                _ => unreachable!(),
            }
        }
        Format::Immediate => {
            let pair = parse(Rule::i_operands, operands, ParseError::TextAfterValue)?;
            let mut inner = pair.into_inner();
            let rd = register_of(expect(&mut inner, Rule::register))?;
            let rs1 = register_of(expect(&mut inner, Rule::register))?;
            let immediate = number_of(expect(&mut inner, Rule::int))?;
            match opcode {
                Opcode::ADDI => Instruction::Addi { rd, rs1, immediate },
                Opcode::ANDI => Instruction::Andi { rd, rs1, immediate },
                Opcode::ORI => Instruction::Ori { rd, rs1, immediate },
                Opcode::SLTI => Instruction::Slti { rd, rs1, immediate },
                _ => unreachable!(),
            }
        }
        Format::Memory => {
            let pair = parse(Rule::m_operands, operands, ParseError::UnexpectedCharacter)?;
            let mut inner = pair.into_inner();
            let rd = register_of(expect(&mut inner, Rule::register))?;
            let operand = expect(&mut inner, Rule::memory_operand)
                .into_inner()
                .next()
                .unwrap();
            match operand.as_rule() {
                Rule::offset_operand => {
                    let mut parts = operand.into_inner();
                    let offset = number_of(expect(&mut parts, Rule::int))?;
                    let base = register_of(expect(&mut parts, Rule::register))?;
                    // -1 is reserved to mark the label form in the legacy
                    // encoding; it stays rejected.
                    if offset == -1 {
                        return Err(ParseError::InvalidOffset);
                    }
                    if opcode == Opcode::LW {
                        Instruction::Lw {
                            rd,
                            source: LoadSource::Stack { base, offset },
                        }
                    } else {
                        Instruction::Sw {
                            rs: rd,
                            target: StoreTarget::Stack { base, offset },
                        }
                    }
                }
                Rule::ident => {
                    let (index, value) = data
                        .lookup(operand.as_str())
                        .ok_or(ParseError::InvalidLabel)?;
                    if opcode == Opcode::LW {
                        Instruction::Lw {
                            rd,
                            source: LoadSource::Data { value },
                        }
                    } else {
                        Instruction::Sw {
                            rs: rd,
                            target: StoreTarget::Data { index },
                        }
                    }
                }
                _ => unreachable!(),
            }
        }
        Format::Branch => {
            let pair = parse(Rule::b_operands, operands, ParseError::TextAfterValue)?;
            let mut inner = pair.into_inner();
            let rs1 = register_of(expect(&mut inner, Rule::register))?;
            let rs2 = register_of(expect(&mut inner, Rule::register))?;
            let target = label_of(expect(&mut inner, Rule::ident), labels)?;
            if opcode == Opcode::BEQ {
                Instruction::Beq { rs1, rs2, target }
            } else {
                Instruction::Bne { rs1, rs2, target }
            }
        }
        Format::Jump => {
            let pair = parse(Rule::j_operands, operands, ParseError::TextAfterValue)?;
            let mut inner = pair.into_inner();
            let target = label_of(expect(&mut inner, Rule::ident), labels)?;
            Instruction::J { target }
        }
        Format::NoOperands => {
            if operands.chars().any(|c| !scan::is_space(c)) {
                return Err(ParseError::ExtraArguments);
            }
            Instruction::Halt
        }
    };

    Ok(Decoded::Instruction(instruction))
}

fn parse(rule: Rule, input: &str, trailing: ParseError) -> Result<Pair<Rule>, ParseError> {
    match MasmParser::parse(rule, input) {
        Ok(mut pairs) => Ok(pairs.next().unwrap()),
        Err(error) => Err(classify(&error, trailing)),
    }
}

/// Maps a pest failure onto the fixed diagnostic set by inspecting which
/// rules the parser still expected at the error position. `trailing` is
/// the format-specific complaint for content after a complete operand
/// list.
fn classify(error: &pest::error::Error<Rule>, trailing: ParseError) -> ParseError {
    let positives = match &error.variant {
        ErrorVariant::ParsingError { positives, .. } => positives,
        ErrorVariant::CustomError { .. } => return trailing,
    };

    if positives.contains(&Rule::comma) {
        ParseError::CommaExpected
    } else if positives.contains(&Rule::lparen) {
        ParseError::OpenParenExpected
    } else if positives.contains(&Rule::rparen) {
        ParseError::CloseParenExpected
    } else if positives.contains(&Rule::register) || positives.contains(&Rule::reg_name) {
        ParseError::RegisterExpected
    } else if positives.contains(&Rule::EOI) {
        trailing
    } else if positives.contains(&Rule::ident) {
        ParseError::InvalidLabel
    } else if positives.contains(&Rule::int) {
        ParseError::NotANumber
    } else {
        trailing
    }
}

fn expect<'i>(pairs: &mut Pairs<'i, Rule>, rule: Rule) -> Pair<'i, Rule> {
    pairs.find(|p| p.as_rule() == rule).unwrap()
}

fn register_of(pair: Pair<Rule>) -> Result<RegisterId, ParseError> {
    debug_assert_matches!(pair.as_rule(), Rule::register);
    let name = pair.into_inner().next().unwrap().as_str();
    RegisterId::from_str(name).map_err(|_| ParseError::InvalidRegister)
}

fn number_of(pair: Pair<Rule>) -> Result<i32, ParseError> {
    debug_assert_matches!(pair.as_rule(), Rule::int);
    scan::parse_number(pair.as_str())
}

fn label_of(pair: Pair<Rule>, labels: &LabelTable) -> Result<usize, ParseError> {
    debug_assert_matches!(pair.as_rule(), Rule::ident);
    labels.find(pair.as_str()).ok_or(ParseError::InvalidLabel)
}

use mipsim::{DataEntry, DataMemory};

use crate::error::{LineError, ParseError};
use crate::scan;

const DATA_DIRECTIVE: &str = ".data";
const TEXT_DIRECTIVE: &str = ".text";
const WORD_DIRECTIVE: &str = ".word";

/// First loader pass: locates the single `.data` directive and collects
/// every `label: .word <int32>` entry until end of input or the `.text`
/// line. Entries come back sorted by label with duplicates rejected.
pub fn scan_data_section(lines: &[String]) -> Result<DataMemory, LineError> {
    let mut data_start = None;

    for (number, line) in lines.iter().enumerate() {
        let stripped = scan::strip_comment(line);
        let index = match stripped.find(DATA_DIRECTIVE) {
            Some(index) => index,
            None => continue,
        };
        if data_start.is_some() {
            return Err(LineError::at(number, ParseError::MultipleData));
        }
        scan::only_spaces(stripped, 0, index).map_err(|e| LineError::at(number, e))?;
        scan::only_spaces(stripped, index + DATA_DIRECTIVE.len(), stripped.len())
            .map_err(|e| LineError::at(number, e))?;
        data_start = Some(number);
    }

    let mut entries = Vec::new();

    if let Some(start) = data_start {
        for (number, line) in lines.iter().enumerate().skip(start + 1) {
            let stripped = scan::trim_start(scan::strip_comment(line));
            if stripped.is_empty() {
                continue;
            }

            let colon = match stripped.find(':') {
                Some(colon) => colon,
                None if stripped.contains(TEXT_DIRECTIVE) => break,
                None => {
                    return Err(LineError::at(number, ParseError::UnexpectedDataSymbol));
                }
            };

            let entry = parse_entry(stripped, colon).map_err(|e| LineError::at(number, e))?;
            entries.push(entry);
        }
    }

    let data = DataMemory::from_entries(entries);
    if data.duplicate().is_some() {
        return Err(LineError::general(ParseError::RepeatedLabels));
    }
    Ok(data)
}

fn parse_entry(line: &str, colon: usize) -> Result<DataEntry, ParseError> {
    let label = scan::extract_label(line, colon)?;

    let rest = &line[colon + 1..];
    let word = rest.find(WORD_DIRECTIVE).ok_or(ParseError::WordNotFound)?;
    scan::only_spaces(rest, 0, word)?;

    let literal = scan::single_token(&rest[word + WORD_DIRECTIVE.len()..])?;
    let value = scan::parse_number(literal)?;

    Ok(DataEntry {
        label: label.to_string(),
        value,
    })
}

use mipsim::{Label, LabelTable};

use crate::error::{LineError, ParseError};
use crate::scan;

const TEXT_DIRECTIVE: &str = ".text";
const ENTRY_LABEL: &str = "main";

/// Second loader pass: locates the single `.text` directive, collects
/// every `label:` line into the label table and resolves `main` to the
/// entry point (the line after the label).
///
/// Labels index the line they appear on, so a branch or jump lands on the
/// label line itself and the execution loop falls through it.
pub fn scan_text_section(lines: &[String]) -> Result<(LabelTable, usize), LineError> {
    let mut text_start = None;

    for (number, line) in lines.iter().enumerate() {
        let stripped = scan::strip_comment(line);
        let index = match stripped.find(TEXT_DIRECTIVE) {
            Some(index) => index,
            None => continue,
        };
        if text_start.is_some() {
            return Err(LineError::at(number, ParseError::MultipleText));
        }
        scan::only_spaces(stripped, 0, index).map_err(|e| LineError::at(number, e))?;
        scan::only_spaces(stripped, index + TEXT_DIRECTIVE.len(), stripped.len())
            .map_err(|e| LineError::at(number, e))?;
        text_start = Some(number);
    }

    let start = match text_start {
        Some(start) => start,
        None => return Err(LineError::general(ParseError::MissingText)),
    };

    let mut entry = None;
    let mut labels = Vec::new();

    for (number, line) in lines.iter().enumerate().skip(start + 1) {
        let stripped = scan::strip_comment(line);
        if stripped.is_empty() {
            continue;
        }
        let colon = match stripped.find(':') {
            Some(colon) => colon,
            None => continue,
        };

        let label = scan::extract_label(stripped, colon).map_err(|e| LineError::at(number, e))?;
        // A label-bearing line carries nothing else.
        scan::only_spaces(stripped, colon + 1, stripped.len())
            .map_err(|e| LineError::at(number, e))?;

        if label == ENTRY_LABEL {
            entry = Some(number + 1);
        } else {
            labels.push(Label {
                name: label.to_string(),
                line: number,
            });
        }
    }

    let table = LabelTable::from_entries(labels);
    if table.duplicate().is_some() {
        return Err(LineError::general(ParseError::RepeatedLabels));
    }

    match entry {
        Some(entry) => Ok((table, entry)),
        None => Err(LineError::general(ParseError::MissingMain)),
    }
}

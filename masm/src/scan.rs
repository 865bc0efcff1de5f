//! Character-level helpers shared by the loader and the decoder.
//!
//! The section directives, label extraction and the `.word` value scan
//! are positional rules (substring search, right-to-left reads, blank
//! ranges), so they are implemented directly on the line text; only
//! instruction operand syntax goes through the grammar.

use crate::error::ParseError;

const I32_MAX_LITERAL: &str = "2147483647";
const I32_MIN_LITERAL: &str = "-2147483648";

/// Removes the comment suffix, if any.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    }
}

pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Removes the maximal prefix of spaces and tabs.
pub fn trim_start(line: &str) -> &str {
    line.trim_start_matches(is_space)
}

/// Asserts that `line[lower..upper]` holds only spaces and tabs.
pub fn only_spaces(line: &str, lower: usize, upper: usize) -> Result<(), ParseError> {
    if line.as_bytes()[lower..upper]
        .iter()
        .all(|&b| b == b' ' || b == b'\t')
    {
        Ok(())
    } else {
        Err(ParseError::UnexpectedCharacter)
    }
}

/// Validates a decimal literal: an optional minus, then digits, with the
/// value inside the signed 32-bit range. The magnitude is checked against
/// the limit literals by digit length before any conversion is attempted.
pub fn check_number(text: &str) -> Result<(), ParseError> {
    let digits = match text.strip_prefix('-') {
        Some(rest) => rest,
        None => text,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NotANumber);
    }

    let out_of_range = if text.starts_with('-') {
        text.len() > I32_MIN_LITERAL.len()
            || (text.len() == I32_MIN_LITERAL.len() && text > I32_MIN_LITERAL)
    } else {
        text.len() > I32_MAX_LITERAL.len()
            || (text.len() == I32_MAX_LITERAL.len() && text > I32_MAX_LITERAL)
    };

    if out_of_range {
        Err(ParseError::NumberOutOfRange)
    } else {
        Ok(())
    }
}

/// Validates and converts a decimal literal.
pub fn parse_number(text: &str) -> Result<i32, ParseError> {
    check_number(text)?;
    text.parse().map_err(|_| ParseError::NumberOutOfRange)
}

/// Asserts that a label is legal: non-empty, not starting with a digit,
/// ASCII alphanumeric throughout.
pub fn check_label(label: &str) -> Result<(), ParseError> {
    let first = match label.bytes().next() {
        Some(b) => b,
        None => return Err(ParseError::LabelStartsWithDigit),
    };
    if first.is_ascii_digit() {
        return Err(ParseError::LabelStartsWithDigit);
    }
    if label.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ParseError::InvalidLabel)
    }
}

/// Extracts the label preceding the colon at `colon`, reading right to
/// left: trailing whitespace is skipped, the label is the nearest token,
/// and anything further left must be whitespace.
pub fn extract_label(line: &str, colon: usize) -> Result<&str, ParseError> {
    let before = line[..colon].trim_end_matches(is_space);
    if before.is_empty() {
        return Err(ParseError::LabelNameExpected);
    }

    let start = match before.rfind(is_space) {
        Some(index) => index + 1,
        None => 0,
    };
    if before[..start].chars().any(|c| !is_space(c)) {
        return Err(ParseError::TextBeforeLabel);
    }

    let label = &before[start..];
    check_label(label)?;
    Ok(label)
}

/// Extracts the single whitespace-delimited token in `text`; a second
/// token is an error. Returns an empty string when there is none.
pub fn single_token(text: &str) -> Result<&str, ParseError> {
    let token = text.trim_matches(is_space);
    if token.chars().any(is_space) {
        Err(ParseError::TextAfterValue)
    } else {
        Ok(token)
    }
}

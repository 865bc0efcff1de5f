use std::error::Error as StdError;
use std::fmt;

/// Every way a program can be rejected while loading or decoding. One
/// variant per diagnostic; `Display` yields the exact console message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    UnexpectedCharacter,
    MultipleData,
    MultipleText,
    MissingText,
    MissingMain,
    UnexpectedDataSymbol,
    LabelNameExpected,
    TextBeforeLabel,
    WordNotFound,
    TextAfterValue,
    RepeatedLabels,
    NotANumber,
    NumberOutOfRange,
    LabelStartsWithDigit,
    InvalidLabel,
    UnknownOperation,
    RegisterExpected,
    InvalidRegister,
    CommaExpected,
    OpenParenExpected,
    CloseParenExpected,
    ExtraArguments,
    InvalidOffset,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match *self {
            ParseError::UnexpectedCharacter => "Unexpected character.",
            ParseError::MultipleData => "Multiple instances of .data.",
            ParseError::MultipleText => "Multiple instances of .text.",
            ParseError::MissingText => "Text section does not exist or found unknown string.",
            ParseError::MissingMain => "Could not find main.",
            ParseError::UnexpectedDataSymbol => "Unexpected symbol in data section.",
            ParseError::LabelNameExpected => "Label name expected.",
            ParseError::TextBeforeLabel => "Unexpected text before label name.",
            ParseError::WordNotFound => ".word not found.",
            ParseError::TextAfterValue => "Unexpected text after value.",
            ParseError::RepeatedLabels => "One or more labels are repeated.",
            ParseError::NotANumber => "Specified value is not a number.",
            ParseError::NumberOutOfRange => "Number out of range.",
            ParseError::LabelStartsWithDigit => "Invalid label: Label begins with a number.",
            ParseError::InvalidLabel => "Invalid label.",
            ParseError::UnknownOperation => "Unknown operation.",
            ParseError::RegisterExpected => "Register expected.",
            ParseError::InvalidRegister => "Invalid register.",
            ParseError::CommaExpected => "Comma expected.",
            ParseError::OpenParenExpected => "'(' expected.",
            ParseError::CloseParenExpected => "')' expected.",
            ParseError::ExtraArguments => "Extra arguments provided.",
            ParseError::InvalidOffset => "Invalid offset.",
        };
        f.write_str(message)
    }
}

impl StdError for ParseError {}

/// A [`ParseError`] tied to the line it was found on (zero-based).
/// Structural errors with no single offending line (a missing section,
/// repeated labels) carry no line.
///
/// [`ParseError`]: enum.ParseError.html
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineError {
    pub line: Option<usize>,
    pub error: ParseError,
}

impl LineError {
    pub fn at(line: usize, error: ParseError) -> LineError {
        LineError {
            line: Some(line),
            error,
        }
    }

    pub fn general(error: ParseError) -> LineError {
        LineError { line: None, error }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {}: {}", line + 1, self.error),
            None => self.error.fmt(f),
        }
    }
}

impl StdError for LineError {}

impl From<ParseError> for LineError {
    fn from(error: ParseError) -> LineError {
        LineError::general(error)
    }
}

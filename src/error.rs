//! This module implements `WhensdayError`.

use core::fmt;
use ixdtf::ParseError;

/// `WhensdayError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// TypeError
    Type,
    /// RangeError
    Range,
    /// SyntaxError
    Syntax,
    /// Assert
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Type => "TypeError",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `whensday_rs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhensdayError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl WhensdayError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a type error.
    #[inline]
    #[must_use]
    pub const fn r#type() -> Self {
        Self::new(ErrorKind::Type)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    #[cfg_attr(debug_assertions, track_caller)]
    pub(crate) const fn assert() -> Self {
        #[cfg(not(debug_assertions))]
        {
            Self::new(ErrorKind::Assert)
        }
        #[cfg(debug_assertions)]
        Self {
            kind: ErrorKind::Assert,
            msg: ErrorMessage::String(core::panic::Location::caller().file()),
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = ErrorMessage::String(msg);
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> &'static str {
        self.msg.to_str()
    }
}

impl fmt::Display for WhensdayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_str();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WhensdayError {}

impl From<ParseError> for WhensdayError {
    fn from(error: ParseError) -> Self {
        WhensdayError::syntax().with_enum(ErrorMessage::Ixdtf(error))
    }
}

/// The error message
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum ErrorMessage {
    // Range
    DayOutOfRange,
    YearOutOfRange,
    WhensdayMonthOutOfRange,
    GregorianMonthOutOfRange,
    DayOfMonthOutOfRange,
    WeensdayHasNoMonth,
    WeensdayDayNotOne,

    // Schedule construction
    PatternNegative,
    ExemptionEndsBeforeStart,
    ResumeAfterNegative,

    // Lookups
    MonthCodeInvalid,

    // Parsing
    ParserNeedsDate,

    // Typed
    None,
    String(&'static str),
    Ixdtf(ParseError),
}

impl ErrorMessage {
    pub(crate) fn to_str(self) -> &'static str {
        match self {
            Self::DayOutOfRange => "Day instant is not within the representable range.",
            Self::YearOutOfRange => "Year is not within the representable range.",
            Self::WhensdayMonthOutOfRange => "Whensday month index must be within 0..=12.",
            Self::GregorianMonthOutOfRange => "Gregorian month index must be within 0..=11.",
            Self::DayOfMonthOutOfRange => "Day is not valid for the given month and year.",
            Self::WeensdayHasNoMonth => "Weensday does not belong to any month.",
            Self::WeensdayDayNotOne => "Weensday only has day 1.",
            Self::PatternNegative => "Schedule pattern values must not be negative.",
            Self::ExemptionEndsBeforeStart => "Exemption end date must not precede its start date.",
            Self::ResumeAfterNegative => "Exemption resume day must not be negative.",
            Self::MonthCodeInvalid => "MonthCode is not valid for the calendar system.",
            Self::ParserNeedsDate => "Could not find a valid DateRecord node during parsing.",
            Self::None => "",
            Self::String(s) => s,
            Self::Ixdtf(s) => ixdtf_error_to_static_string(s),
        }
    }
}

pub(crate) fn ixdtf_error_to_static_string(error: ParseError) -> &'static str {
    match error {
        ParseError::ImplAssert => "Implementation error: this error must not throw.",
        ParseError::AbruptEnd { .. } => "Parsing ended abruptly.",
        ParseError::InvalidEnd => "Unexpected character found after parsing was completed.",
        ParseError::InvalidMonthRange => "Parsed month value not in a valid range.",
        ParseError::InvalidDayRange => "Parsed day value not in a valid range.",
        ParseError::DateYear => "Invalid character while parsing year value.",
        ParseError::DateExtendedYear => "Invalid character while parsing extended year value.",
        ParseError::DateMonth => "Invalid character while parsing month value.",
        ParseError::DateDay => "Invalid character while parsing day value.",
        ParseError::DateUnexpectedEnd => "Unexpected end while parsing a date value.",
        ParseError::DateSeparator => "Invalid character while parsing date separator.",
        ParseError::TimeHour => "Invalid character while parsing hour value.",
        ParseError::TimeSeparator => "Invalid character while parsing time separator.",
        _ => "General IXDTF parsing error",
    }
}

//! When parsing, dividing or casting big numbers goes wrong.

use crate::bigint::BigInteger;
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt::{self, Debug, Display};
use core::result;
use serde::{de, ser};
use std::error;
use std::io;

/// This type represents all possible errors that can occur when building,
/// combining or converting `BigInteger` and `Rational` values.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible,
    /// which keeps every `Result<T>` returned from arithmetic cheap to move.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `longint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based line number at which the error was detected.
    ///
    /// Only errors raised while reading a stream carry a position; for all
    /// other errors this is 0.
    pub fn line(&self) -> usize {
        self.err.line
    }

    /// One-based column number at which the error was detected.
    ///
    /// For stream errors this is the column of the offending byte. Text
    /// parsed through `FromStr` reports the offending byte's position within
    /// the string while keeping `line()` at 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Io` - failure to read or write bytes on an IO stream
    /// - `Category::Input` - text that is not a valid number
    /// - `Category::Arithmetic` - division by zero
    /// - `Category::Cast` - a value that does not fit the requested type
    /// - `Category::Eof` - the input ended before a value was found
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::Message(_) | ErrorCode::InvalidInput(_) => Category::Input,
            ErrorCode::DivisionByZero(_) => Category::Arithmetic,
            ErrorCode::CastOverflow(_, _) | ErrorCode::NegativeToUnsignedCast(_, _) => {
                Category::Cast
            }
            ErrorCode::Io(_) => Category::Io,
            ErrorCode::EofWhileParsingValue => Category::Eof,
        }
    }

    /// Returns true if this error was caused by a failure to read or write
    /// bytes on an IO stream.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }

    /// Returns true if this error was caused by text that is not a numerical
    /// literal.
    pub fn is_input(&self) -> bool {
        self.classify() == Category::Input
    }

    /// Returns true if this error was caused by a zero divisor.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by a value outside the range of
    /// the cast target.
    ///
    /// Inspect `code()` to tell an overflow apart from a negative value cast
    /// to an unsigned type.
    pub fn is_cast(&self) -> bool {
        self.classify() == Category::Cast
    }

    /// Returns true if this error was caused by prematurely reaching the end
    /// of the input data.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }
}

/// Categorizes the cause of a `longint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a failure to read or write bytes on an IO
    /// stream.
    Io,

    /// The error was caused by text that is not a valid number.
    Input,

    /// The error was caused by dividing by zero.
    Arithmetic,

    /// The error was caused by casting to a type that cannot hold the value.
    Cast,

    /// The error was caused by prematurely reaching the end of the input data.
    Eof,
}

#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `longint::Error` into an `io::Error`.
    ///
    /// Input, arithmetic and cast errors are turned into `InvalidData` IO
    /// errors. EOF errors are turned into `UnexpectedEof` IO errors.
    fn from(j: Error) -> Self {
        if let ErrorCode::Io(err) = j.err.code {
            err
        } else {
            match j.classify() {
                Category::Io => unreachable!(),
                Category::Input | Category::Arithmetic | Category::Cast => {
                    io::Error::new(io::ErrorKind::InvalidData, j)
                }
                Category::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, j),
            }
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    line: usize,
    column: usize,
}

/// This type describes all possible errors that can occur when building,
/// combining or converting big numbers.
pub enum ErrorCode {
    /// Catchall for messages raised through serde.
    Message(Box<str>),

    /// Text that is not an optional `-` followed by ASCII digits.
    InvalidInput(Box<str>),

    /// Division with a zero divisor; holds the dividend.
    DivisionByZero(BigInteger),

    /// The value does not fit the target type.
    CastOverflow(BigInteger, &'static str),

    /// A negative value was cast to an unsigned type.
    NegativeToUnsignedCast(BigInteger, &'static str),

    /// Some IO error occurred while reading or writing.
    Io(io::Error),

    /// EOF while looking for a value.
    EofWhileParsingValue,
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.debug_tuple("Message").field(msg).finish(),
            ErrorCode::InvalidInput(text) => f.debug_tuple("InvalidInput").field(text).finish(),
            ErrorCode::DivisionByZero(v) => f.debug_tuple("DivisionByZero").field(v).finish(),
            ErrorCode::CastOverflow(v, t) => {
                f.debug_tuple("CastOverflow").field(v).field(t).finish()
            }
            ErrorCode::NegativeToUnsignedCast(v, t) => f
                .debug_tuple("NegativeToUnsignedCast")
                .field(v)
                .field(t)
                .finish(),
            ErrorCode::Io(_) => f.debug_tuple("Io").finish(),
            ErrorCode::EofWhileParsingValue => f.write_str("EofWhileParsingValue"),
        }
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorCode::Message(l0), ErrorCode::Message(r0)) => l0 == r0,
            (ErrorCode::InvalidInput(l0), ErrorCode::InvalidInput(r0)) => l0 == r0,
            (ErrorCode::DivisionByZero(l0), ErrorCode::DivisionByZero(r0)) => l0 == r0,
            (ErrorCode::CastOverflow(l0, l1), ErrorCode::CastOverflow(r0, r1)) => {
                l0 == r0 && l1 == r1
            }
            (
                ErrorCode::NegativeToUnsignedCast(l0, l1),
                ErrorCode::NegativeToUnsignedCast(r0, r1),
            ) => l0 == r0 && l1 == r1,
            (ErrorCode::Io(_), ErrorCode::Io(_)) => true,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Error {
    #[cold]
    fn new(code: ErrorCode, line: usize, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, line, column }),
        }
    }

    #[cold]
    pub(crate) fn syntax(code: ErrorCode, line: usize, column: usize) -> Self {
        Error::new(code, line, column)
    }

    /// `column` is the one-based position of the offending byte in `text`.
    #[cold]
    pub(crate) fn invalid_input(text: &[u8], column: usize) -> Self {
        let text = String::from_utf8_lossy(text).into_owned().into_boxed_str();
        Error::new(ErrorCode::InvalidInput(text), 0, column)
    }

    #[cold]
    pub(crate) fn division_by_zero(dividend: BigInteger) -> Self {
        Error::new(ErrorCode::DivisionByZero(dividend), 0, 0)
    }

    #[cold]
    pub(crate) fn cast_overflow(value: BigInteger, target: &'static str) -> Self {
        Error::new(ErrorCode::CastOverflow(value, target), 0, 0)
    }

    #[cold]
    pub(crate) fn negative_to_unsigned(value: BigInteger, target: &'static str) -> Self {
        Error::new(ErrorCode::NegativeToUnsignedCast(value, target), 0, 0)
    }

    #[cold]
    pub(crate) fn eof() -> Self {
        Error::new(ErrorCode::EofWhileParsingValue, 0, 0)
    }

    #[doc(hidden)]
    #[cold]
    pub fn io(error: io::Error) -> Self {
        Error::new(ErrorCode::Io(error), 0, 0)
    }

    /// Attach a stream position unless one is already present.
    ///
    /// `f` receives the code and the column recorded relative to the token.
    #[cold]
    pub(crate) fn fix_position<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorCode, usize) -> Error,
    {
        if self.err.line == 0 {
            let ErrorImpl { code, column, .. } = *self.err;
            f(code, column)
        } else {
            self
        }
    }
}

/// Shared tail of the two cast messages.
struct CastFailure<'a> {
    value: &'a BigInteger,
    target: &'static str,
}

impl Display for CastFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Exception during cast. Value to cast: {} type to cast: {}",
            self.value, self.target
        )
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(ref msg) => f.write_str(msg),
            ErrorCode::InvalidInput(ref text) => write!(
                f,
                "Invalid input to create BigInteger: {}. Expected a numerical literal",
                text
            ),
            ErrorCode::DivisionByZero(ref dividend) => {
                write!(f, "Division by zero! Trying to divide {} by zero", dividend)
            }
            ErrorCode::CastOverflow(ref value, target) => write!(
                f,
                "Too big cast. {}",
                CastFailure {
                    value,
                    target,
                }
            ),
            ErrorCode::NegativeToUnsignedCast(ref value, target) => write!(
                f,
                "Trying to cast negative value to unsigned type. {}",
                CastFailure {
                    value,
                    target,
                }
            ),
            ErrorCode::Io(ref err) => Display::fmt(err, f),
            ErrorCode::EofWhileParsingValue => f.write_str("EOF while parsing a value"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.err.code {
            ErrorCode::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(
                f,
                "{} at line {} column {}",
                self.code, self.line, self.column
            )
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, line: {}, column: {})",
            self.err.code.to_string(),
            self.err.line,
            self.err.column
        )
    }
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

impl ser::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        make_error(msg.to_string())
    }
}

fn make_error(msg: String) -> Error {
    Error::new(ErrorCode::Message(msg.into_boxed_str()), 0, 0)
}

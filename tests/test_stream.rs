use longint::{BigInteger, Rational, StreamParser};
use std::io::{self, Read};

// Rustfmt issue https://github.com/rust-lang-nursery/rustfmt/issues/2740
#[rustfmt::skip]
macro_rules! test_stream {
    ($data:expr, $ty:ty, |$stream:ident| $test:block) => {
        {
            let mut $stream = StreamParser::<_, $ty>::from_str($data);
            $test
        }
        {
            let mut $stream = StreamParser::<_, $ty>::from_slice($data.as_bytes());
            $test
        }
        {
            let mut $stream = StreamParser::<_, $ty>::from_reader($data.as_bytes());
            $test
        }
    };
}

#[test]
fn test_stream_values() {
    let data = "100 200 300 -400 0 00010";

    test_stream!(data, BigInteger, |stream| {
        let values: Vec<BigInteger> = stream.by_ref().map(Result::unwrap).collect();
        assert_eq!(values, [100, 200, 300, -400, 0, 10]);
        assert!(stream.next().is_none());
    });
}

#[test]
fn test_stream_whitespace() {
    let data = "\t\n  179\r\n\n-57   \x0c";

    test_stream!(data, BigInteger, |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), 179);
        assert_eq!(stream.next().unwrap().unwrap(), -57);
        assert!(stream.next().is_none());
        assert!(stream.next_value().unwrap_err().is_eof());
    });
}

#[test]
fn test_stream_error_position() {
    let data = "1 2\n  33 4a4\n5";

    test_stream!(data, BigInteger, |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), 1);
        assert_eq!(stream.next().unwrap().unwrap(), 2);
        assert_eq!(stream.next().unwrap().unwrap(), 33);
        let err = stream.next().unwrap().unwrap_err();
        assert!(err.is_input());
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 7);

        // Fused after the first error.
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    });
}

#[test]
fn test_stream_truncated_sign() {
    let data = "7\n-";

    test_stream!(data, BigInteger, |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), 7);
        let err = stream.next().unwrap().unwrap_err();
        assert_eq!((err.line(), err.column()), (2, 2));
    });
}

#[test]
fn test_stream_rationals() {
    let data = "1/2 -6/4\n3 7/0";

    test_stream!(data, Rational, |stream| {
        assert_eq!(stream.next().unwrap().unwrap().to_string(), "1/2");
        assert_eq!(stream.next().unwrap().unwrap().to_string(), "-3/2");
        assert_eq!(stream.next().unwrap().unwrap(), 3);
        let err = stream.next().unwrap().unwrap_err();
        assert!(err.is_arithmetic());
        assert_eq!((err.line(), err.column()), (2, 3));
    });
}

#[test]
fn test_stream_long_tokens() {
    let digits = "1234567890".repeat(50);
    let data = format!("{} -{}", digits, digits);

    test_stream!(data.as_str(), BigInteger, |stream| {
        let a = stream.next().unwrap().unwrap();
        let b = stream.next().unwrap().unwrap();
        assert_eq!(a.to_string(), digits);
        assert!((a + b).is_zero());
    });
}

struct FailingReader {
    data: &'static [u8],
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn test_stream_io_error() {
    let reader = FailingReader { data: b"12 34" };
    let mut stream = longint::from_reader::<BigInteger, _>(reader);
    assert_eq!(stream.next().unwrap().unwrap(), 12);

    // The token is cut short by the failing read.
    let err = stream.next().unwrap().unwrap_err();
    assert!(err.is_io());
    assert_eq!(err.to_string(), "reset");
    assert!(stream.next().is_none());
}

#[test]
fn test_stream_fused_iterator() {
    fn assert_fused<I: std::iter::FusedIterator>(_: &I) {}

    let stream = longint::from_slice::<BigInteger>(b"1 2");
    assert_fused(&stream);
    assert_eq!(stream.count(), 2);
}

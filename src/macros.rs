/// Construct a `longint::BigInteger` from a literal of any length.
///
/// Accepts an integer literal, optionally negated and with `_` separators, or
/// a string literal holding decimal text. A malformed literal panics.
///
/// ```
/// use longint::bigint;
///
/// let big = bigint!(179179179179179179179179179179);
/// assert_eq!(big.to_string(), "179179179179179179179179179179");
/// assert_eq!(bigint!(-1_000), -1000);
/// assert_eq!(bigint!("000123"), 123);
/// ```
#[macro_export]
macro_rules! bigint {
    (- $($tt:tt)+) => {
        -$crate::bigint!($($tt)+)
    };
    ($($tt:tt)+) => {
        $crate::__private::from_literal(stringify!($($tt)+))
    };
}

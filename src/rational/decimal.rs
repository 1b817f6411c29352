use super::Rational;
use crate::bigint::BigInteger;
use alloc::string::String;

impl Rational {
    /// Renders the value with exactly `precision` digits after the point,
    /// rounding half away from zero.
    ///
    /// A zero `precision` renders an integer without a point. A value that
    /// rounds to zero is printed without a sign.
    ///
    /// ```
    /// use longint::Rational;
    ///
    /// let x = Rational::new(11.into(), 20.into()).unwrap();
    /// assert_eq!(x.as_decimal(5), "0.55000");
    /// assert_eq!(Rational::new(10.into(), 3.into()).unwrap().as_decimal(1), "3.3");
    /// assert_eq!(Rational::new((-5).into(), 3.into()).unwrap().as_decimal(1), "-1.7");
    /// assert_eq!(Rational::new(21.into(), 2.into()).unwrap().as_decimal(0), "11");
    /// ```
    pub fn as_decimal(&self, precision: usize) -> String {
        // One extra digit to round from.
        let scale = BigInteger::from(10u32).pow(precision + 1);
        let scaled = (self.numerator.abs() * scale).div_rem_nonzero(&self.denominator).0;
        let rounded = (scaled + 5u32).div_rem_nonzero(&BigInteger::from(10u32)).0;

        let mut digits = String::with_capacity(rounded.decimal_len());
        rounded.write_magnitude(&mut digits);

        let mut result = String::with_capacity(digits.len() + precision + 3);
        if self.numerator.is_negative() && !rounded.is_zero() {
            result.push('-');
        }
        if precision == 0 {
            result.push_str(&digits);
        } else if digits.len() <= precision {
            result.push_str("0.");
            result.extend((digits.len()..precision).map(|_| '0'));
            result.push_str(&digits);
        } else {
            let point = digits.len() - precision;
            result.push_str(&digits[..point]);
            result.push('.');
            result.push_str(&digits[point..]);
        }
        result
    }
}

use longint::{bigint, BigInteger, Rational};

#[test]
fn bigint() {
    assert_eq!(format!("{:?}", BigInteger::zero()), "BigInteger(0)");
    assert_eq!(format!("{:?}", bigint!(-1000)), "BigInteger(-1000)");
}

#[test]
fn rational() {
    let x: Rational = "3/-9".parse().unwrap();
    assert_eq!(format!("{:?}", x), "Rational(-1/3)");
    assert_eq!(format!("{:?}", Rational::from(7)), "Rational(7)");
}

#[test]
fn error() {
    let err = "1x".parse::<BigInteger>().unwrap_err();
    let expected = "Error(\"Invalid input to create BigInteger: 1x. Expected a numerical literal\", line: 0, column: 2)";
    assert_eq!(format!("{:?}", err), expected);
}

#[test]
fn error_code() {
    let err = u8::try_from(&bigint!(300)).unwrap_err();
    assert_eq!(format!("{:?}", err.code()), "CastOverflow(BigInteger(300), \"u8\")");

    let err = BigInteger::from(1).checked_div(&BigInteger::zero()).unwrap_err();
    assert_eq!(format!("{:?}", err.code()), "DivisionByZero(BigInteger(1))");
}

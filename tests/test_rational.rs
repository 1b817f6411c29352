use longint::{gcd, BigInteger, Rational};

fn ratio(n: i64, d: i64) -> Rational {
    Rational::new(n.into(), d.into()).unwrap()
}

fn assert_canonical(x: &Rational) {
    assert!(!x.denominator().is_negative());
    assert!(!x.denominator().is_zero());
    assert_eq!(gcd(x.numerator(), x.denominator()), 1);
}

#[test]
fn test_reduction() {
    let x = ratio(6, -4);
    assert_eq!(x.numerator(), &BigInteger::from(-3));
    assert_eq!(x.denominator(), &BigInteger::from(2));
    assert_eq!(x.to_string(), "-3/2");

    let zero = ratio(0, -17);
    assert_eq!(zero.to_string(), "0");
    assert_eq!(zero.denominator(), &BigInteger::one());
    assert!(zero.is_integer());

    assert_eq!(ratio(-10, -5), 2);
}

#[test]
fn test_arithmetic() {
    let a = ratio(7, 5);
    let b = ratio(-3, 5);

    assert_eq!((&a + &b).to_string(), "4/5");
    assert_eq!((&a - &b).to_string(), "2");
    assert_eq!((&a * &b).to_string(), "-21/25");
    assert_eq!((&a / &b).to_string(), "-7/3");

    assert_eq!(ratio(1, 3) + ratio(1, 6), ratio(1, 2));
    assert_eq!((ratio(11, 7)).to_string(), "11/7");
    assert_eq!((ratio(-179, 57)).to_string(), "-179/57");

    let mut c = ratio(3, 5);
    c += ratio(2, 5);
    assert_eq!(c, 1);
    c -= &ratio(1, 4);
    c *= ratio(4, 9);
    assert_eq!(c.to_string(), "1/3");
    c /= ratio(-1, 6);
    assert_eq!(c, -2);

    assert_eq!(-ratio(3, 5), ratio(-3, 5));
    assert_eq!(ratio(-3, 5).abs(), ratio(3, 5));
    assert_eq!(ratio(-7, 2).trunc(), -3);
}

#[test]
fn test_always_canonical() {
    let values = [ratio(2, 4), ratio(-9, 12), ratio(100, 7), ratio(0, 3), ratio(-1, 1)];
    for x in &values {
        assert_canonical(x);
        for y in &values {
            assert_canonical(&(x + y));
            assert_canonical(&(x - y));
            assert_canonical(&(x * y));
            if let Ok(q) = x.checked_div(y) {
                assert_canonical(&q);
            }
        }
    }

    let sum: Rational = (1..=10).map(|k| ratio(1, k * (k + 1))).sum();
    assert_eq!(sum, ratio(10, 11));
    let product: Rational = (1..=5).map(|k| ratio(k, k + 1)).product();
    assert_eq!(product, ratio(1, 6));
}

#[test]
fn test_ordering() {
    assert!(ratio(1, 3) < ratio(1, 2));
    assert!(ratio(-1, 2) < ratio(-1, 3));
    assert!(ratio(7, 5) > ratio(4, 3));
    assert_eq!(ratio(2, 6).cmp(&ratio(1, 3)), std::cmp::Ordering::Equal);

    let mut values = vec![ratio(3, 4), ratio(-5, 2), ratio(0, 1), ratio(2, 3)];
    values.sort();
    let sorted: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, ["-5/2", "0", "2/3", "3/4"]);
}

#[test]
fn test_division_by_zero() {
    let err = Rational::new(BigInteger::from(3), BigInteger::zero()).unwrap_err();
    assert!(err.is_arithmetic());
    assert_eq!(err.to_string(), "Division by zero! Trying to divide 3 by zero");

    let x = ratio(7, 5);
    let err = x.checked_div(&Rational::zero()).unwrap_err();
    assert_eq!(err.to_string(), "Division by zero! Trying to divide 7 by zero");
    assert_eq!(x, ratio(7, 5));

    assert!(Rational::zero().recip().is_err());
    assert_eq!(ratio(-2, 3).recip().unwrap(), ratio(-3, 2));
}

#[test]
#[should_panic(expected = "Division by zero!")]
fn test_division_by_zero_panics() {
    let _ = ratio(1, 2) / Rational::zero();
}

#[test]
fn test_parse() {
    let x: Rational = "-6/4".parse().unwrap();
    assert_eq!(x, ratio(-3, 2));
    let x: Rational = "42".parse().unwrap();
    assert_eq!(x, 42);

    let err = "1/x".parse::<Rational>().unwrap_err();
    assert!(err.is_input());
    assert_eq!(err.column(), 3);

    let err = "a/2".parse::<Rational>().unwrap_err();
    assert_eq!(err.column(), 1);

    let err = "5/0".parse::<Rational>().unwrap_err();
    assert!(err.is_arithmetic());
}

#[test]
fn test_as_decimal() {
    assert_eq!(ratio(11, 20).as_decimal(5), "0.55000");
    assert_eq!(ratio(7, 5).as_decimal(3), "1.400");
    assert_eq!(ratio(-3, 5).as_decimal(1), "-0.6");
    assert_eq!(ratio(1, 3).as_decimal(10), "0.3333333333");
    assert_eq!(ratio(-1, 3).as_decimal(0), "0");
    assert_eq!(ratio(22, 7).as_decimal(2), "3.14");
}

#[test]
fn test_to_f64() {
    assert_eq!(ratio(7, 5).to_f64().unwrap(), 1.4);
    assert_eq!(ratio(-3, 5).to_f64().unwrap(), -0.6);
    assert_eq!(ratio(3, 4).to_f64().unwrap(), 0.75);
    assert_eq!(f64::try_from(&ratio(-1, 8)).unwrap(), -0.125);

    let huge = Rational::from(BigInteger::from(10).pow(400));
    let err = huge.to_f64().unwrap_err();
    assert!(err.is_cast());
    assert!(err.to_string().starts_with("Too big cast."));
}

#[test]
fn test_natives() {
    assert_eq!(Rational::from(5u8), 5);
    assert_eq!(Rational::from(-5i64), ratio(-5, 1));
    assert!(bool::from(&ratio(1, 9)));
    assert!(!bool::from(&Rational::default()));
    assert_eq!(format!("{:?}", ratio(1, -2)), "Rational(-1/2)");
    let (n, d) = ratio(4, 6).into_parts();
    assert_eq!((n, d), (BigInteger::from(2), BigInteger::from(3)));
}

use longint::{bigint, BigInteger, Rational};
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Ledger {
    total: BigInteger,
    share: Rational,
    entries: Vec<BigInteger>,
}

#[test]
fn test_struct_round_trip() {
    let ledger = Ledger {
        total: bigint!(-179179179179179179179179179179),
        share: "2/6".parse().unwrap(),
        entries: vec![bigint!(0), bigint!(1000), bigint!(-1)],
    };

    let json = serde_json::to_string(&ledger).unwrap();
    assert_eq!(
        json,
        r#"{"total":"-179179179179179179179179179179","share":"1/3","entries":["0","1000","-1"]}"#
    );

    let back: Ledger = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ledger);
}

#[test]
fn test_from_json_numbers() {
    let x: BigInteger = serde_json::from_str("-9223372036854775808").unwrap();
    assert_eq!(x, i64::MIN);
    let x: BigInteger = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(x, u64::MAX);
    let x: Rational = serde_json::from_str("12").unwrap();
    assert_eq!(x, 12);
    let x: Rational = serde_json::from_str("\"-4/10\"").unwrap();
    assert_eq!(x.to_string(), "-2/5");
}

#[test]
fn test_rejects_bad_input() {
    let err = serde_json::from_str::<BigInteger>("\"12e3\"").unwrap_err();
    assert!(err.to_string().starts_with("Invalid input to create BigInteger: 12e3."));

    let err = serde_json::from_str::<Rational>("\"1/0\"").unwrap_err();
    assert!(err.to_string().starts_with("Division by zero!"));

    assert!(serde_json::from_str::<BigInteger>("1.5").is_err());
    assert!(serde_json::from_str::<BigInteger>("[1]").is_err());
}

#[test]
fn test_value_round_trip() {
    let x: BigInteger = "123456789123456789123456789".parse().unwrap();
    let value = serde_json::to_value(&x).unwrap();
    assert_eq!(value, serde_json::Value::String(x.to_string()));
    let back: BigInteger = serde_json::from_value(value).unwrap();
    assert_eq!(back, x);
}

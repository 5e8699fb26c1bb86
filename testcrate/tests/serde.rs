use longint::{Int64, Integer, Word64};

#[test]
fn serde() {
    let x = Int64::from_i64(-1234567890123);
    let s = "-1234567890123";
    assert_eq!(ron::to_string(&x).unwrap(), s);
    let y: Int64 = ron::from_str(s).unwrap();
    assert_eq!(x, y);
    let y: Int64 = ron::from_str("9223372036854775807").unwrap();
    assert_eq!(y, Int64::MAX_VALUE);

    let x = Integer::from_str_radix("-98765432109876543210987654321", 10).unwrap();
    let s = "\"-98765432109876543210987654321\"";
    assert_eq!(ron::to_string(&x).unwrap(), s);
    let y: Integer = ron::from_str(s).unwrap();
    assert_eq!(x, y);
    let y: Integer = ron::from_str("\"0\"").unwrap();
    assert_eq!(y, Integer::ZERO);
    assert!(ron::from_str::<Integer>("\"12x\"").is_err());
    assert!(ron::from_str::<Integer>("\"\"").is_err());

    let x = Word64::MAX;
    let s = "18446744073709551615";
    assert_eq!(ron::to_string(&x).unwrap(), s);
    let y: Word64 = ron::from_str(s).unwrap();
    assert_eq!(x, y);
}

#[test]
fn serde_struct() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Wrapper {
        fixed: Int64,
        big: Integer,
        word: Word64,
    }

    let w = Wrapper {
        fixed: Int64::MIN_VALUE,
        big: Integer::ONE.shl(100),
        word: Word64::from_u32(5),
    };
    let s = ron::to_string(&w).unwrap();
    assert_eq!(
        s,
        "(fixed:-9223372036854775808,big:\"1267650600228229401496703205376\",word:5)"
    );
    let w1: Wrapper = ron::from_str(&s).unwrap();
    assert_eq!(w, w1);
}

use mymdb_catalog::*;

#[test]
fn single_year() {
    assert_eq!(
        parse_year("1999"),
        Some(YearSpan {
            start: 1999,
            end: None
        })
    );
}

#[test]
fn year_range() {
    assert_eq!(
        parse_year("2008-2013"),
        Some(YearSpan {
            start: 2008,
            end: Some(2013)
        })
    );
    assert!(is_valid_year("2010-2010"));
}

#[test]
fn rejects_malformed_years() {
    for bad in ["", "99", "19999", "1999-", "-1999", "2013-2008", "1999 ", " 1999", "199a", "1999-2001-2003", "１９９９"] {
        assert!(!is_valid_year(bad), "'{}' should be invalid", bad);
    }
}

#[test]
fn rating_bounds() {
    assert!(is_valid_rating(1.0));
    assert!(is_valid_rating(7.5));
    assert!(is_valid_rating(10.0));
    assert!(!is_valid_rating(0.9));
    assert!(!is_valid_rating(10.1));
    assert!(!is_valid_rating(f64::NAN));
    assert!(!is_valid_rating(f64::INFINITY));
}

#[test]
fn runtime_is_non_negative() {
    assert!(is_valid_runtime(0));
    assert!(is_valid_runtime(155));
    assert!(!is_valid_runtime(-1));
}

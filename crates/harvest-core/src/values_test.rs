use super::*;

// ---------------------------------------------------------------------------
// ValidUrl
// ---------------------------------------------------------------------------

#[test]
fn valid_url_accepts_https_item_page() {
    let url = ValidUrl::parse("https://www.ebay.com/itm/1234567890").unwrap();
    assert_eq!(url.as_str(), "https://www.ebay.com/itm/1234567890");
    assert_eq!(url.as_url().host_str(), Some("www.ebay.com"));
}

#[test]
fn valid_url_keeps_original_text() {
    let raw = "HTTP://Example.com/a b";
    let url = ValidUrl::parse(raw).unwrap();
    assert_eq!(url.to_string(), raw);
}

#[test]
fn valid_url_rejects_missing_scheme() {
    for input in ["www.ebay.com/itm/1", "//www.ebay.com/itm/1", "ebay.com", ""] {
        let err = ValidUrl::parse(input).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidUrl { .. }),
            "expected InvalidUrl for {input:?}, got: {err:?}"
        );
    }
}

#[test]
fn valid_url_rejects_missing_network_location() {
    for input in [
        "https://",
        "http:example.com",
        "mailto:someone@example.com",
        "file:///tmp/item.html",
        "localhost:8080",
    ] {
        let err = ValidUrl::parse(input).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidUrl { .. }),
            "expected InvalidUrl for {input:?}, got: {err:?}"
        );
    }
}

#[test]
fn valid_url_rejects_leading_whitespace() {
    assert!(ValidUrl::parse(" https://example.com").is_err());
}

#[test]
fn valid_url_serializes_as_plain_string() {
    let url = ValidUrl::parse("https://i.ebayimg.com/images/g/a.jpg").unwrap();
    let json = serde_json::to_value(&url).unwrap();
    assert_eq!(json, serde_json::json!("https://i.ebayimg.com/images/g/a.jpg"));
}

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

#[test]
fn price_accepts_non_negative_integers() {
    for n in [0_i64, 1, 42, 1_000_000, i64::MAX] {
        let price = Price::new(n).unwrap();
        assert_eq!(i64::try_from(price.get()).unwrap(), n);
    }
}

#[test]
fn price_rejects_negative_integers() {
    for n in [-1_i64, -250, i64::MIN] {
        let err = Price::new(n).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidPrice(v) if v == i128::from(n)),
            "expected InvalidPrice({n}), got: {err:?}"
        );
    }
}

#[test]
fn price_parses_digit_strings() {
    assert_eq!(Price::parse("10").unwrap().get(), 10);
    assert_eq!(Price::parse("007").unwrap().get(), 7);
    assert_eq!(" 25 ".parse::<Price>().unwrap().get(), 25);
}

#[test]
fn price_rejects_non_digit_strings_as_conversion_errors() {
    for input in ["$10", "ten", "10.50", "", "1e3", "Free shipping"] {
        let err = Price::parse(input).unwrap_err();
        assert!(
            matches!(err, CoreError::Conversion { .. }),
            "expected Conversion for {input:?}, got: {err:?}"
        );
    }
}

#[test]
fn price_negative_string_fails_range_check_not_conversion() {
    let err = Price::parse("-3").unwrap_err();
    assert!(matches!(err, CoreError::InvalidPrice(-3)), "got: {err:?}");
}

#[test]
fn price_parses_digit_strings_beyond_i64() {
    let price = Price::parse("10000000000000000000").unwrap();
    assert_eq!(price.get(), 10_000_000_000_000_000_000);
    assert_eq!(Price::parse(&u64::MAX.to_string()).unwrap().get(), u64::MAX);
}

#[test]
fn price_digit_string_beyond_u64_is_conversion_error() {
    let err = Price::parse("18446744073709551616").unwrap_err();
    assert!(matches!(err, CoreError::Conversion { .. }), "got: {err:?}");
}

#[test]
fn price_large_negative_string_is_invalid_price() {
    let err = Price::parse("-10000000000000000000").unwrap_err();
    assert!(
        matches!(err, CoreError::InvalidPrice(v) if v == -10_000_000_000_000_000_000),
        "got: {err:?}"
    );
}

#[test]
fn price_signed_zero_and_plus_sign() {
    assert_eq!(Price::parse("-0").unwrap().get(), 0);
    assert_eq!(Price::parse("+7").unwrap().get(), 7);
    assert!(matches!(Price::parse("+-7"), Err(CoreError::Conversion { .. })));
    assert!(matches!(Price::parse("-"), Err(CoreError::Conversion { .. })));
}

#[test]
fn price_try_from_matches_new() {
    assert_eq!(Price::try_from(5).unwrap(), Price::new(5).unwrap());
    assert!(Price::try_from(-5).is_err());
}

// ---------------------------------------------------------------------------
// PriceField
// ---------------------------------------------------------------------------

#[test]
fn price_field_validates_integer_text() {
    let field = PriceField::from_raw("12").unwrap();
    assert_eq!(field, PriceField::Amount(Price::new(12).unwrap()));
    assert_eq!(field.amount().map(Price::get), Some(12));
}

#[test]
fn price_field_keeps_display_text_verbatim() {
    let field = PriceField::from_raw("US $10.99").unwrap();
    assert_eq!(field, PriceField::Text("US $10.99".to_owned()));
    assert!(field.amount().is_none());
}

#[test]
fn price_field_rejects_negative_integer_text() {
    let err = PriceField::from_raw("-1").unwrap_err();
    assert!(matches!(err, CoreError::InvalidPrice(-1)), "got: {err:?}");
}

#[test]
fn price_field_keeps_large_integer_as_amount() {
    let field = PriceField::from_raw("10000000000000000000").unwrap();
    assert_eq!(
        field.amount().map(Price::get),
        Some(10_000_000_000_000_000_000)
    );
}

#[test]
fn price_field_serializes_untagged() {
    let amount = serde_json::to_value(PriceField::from_raw("3").unwrap()).unwrap();
    let text = serde_json::to_value(PriceField::from_raw("$3").unwrap()).unwrap();
    assert_eq!(amount, serde_json::json!(3));
    assert_eq!(text, serde_json::json!("$3"));
}

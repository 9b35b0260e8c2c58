use roster_tool::calendar::Weekday;

#[test]
fn tokens_map_to_monday_through_sunday() {
    let pairs = [
        (Weekday::Seg, chrono::Weekday::Mon),
        (Weekday::Ter, chrono::Weekday::Tue),
        (Weekday::Qua, chrono::Weekday::Wed),
        (Weekday::Qui, chrono::Weekday::Thu),
        (Weekday::Sex, chrono::Weekday::Fri),
        (Weekday::Sab, chrono::Weekday::Sat),
        (Weekday::Dom, chrono::Weekday::Sun),
    ];
    for (token, day) in pairs {
        assert_eq!(token.day_of_week(), day);
    }
}

#[test]
fn from_str_accepts_any_case() {
    assert_eq!(Weekday::from_str("SEG"), Some(Weekday::Seg));
    assert_eq!(Weekday::from_str("seg"), Some(Weekday::Seg));
    assert_eq!(Weekday::from_str("Dom"), Some(Weekday::Dom));
}

#[test]
fn from_str_rejects_padded_tokens() {
    assert_eq!(Weekday::from_str(" QUA"), None);
    assert_eq!(Weekday::from_str("QUA "), None);
    assert_eq!(Weekday::from_str(""), None);
}

#[test]
fn from_str_rejects_unknown_tokens() {
    assert_eq!(Weekday::from_str("MON"), None);
    assert_eq!(Weekday::from_str("SEGX"), None);
}

#[test]
fn as_str_round_trips_every_token() {
    for token in ["SEG", "TER", "QUA", "QUI", "SEX", "SAB", "DOM"] {
        let day = Weekday::from_str(token).unwrap();
        assert_eq!(day.as_str(), token);
        assert_eq!(day.to_string(), token);
    }
}

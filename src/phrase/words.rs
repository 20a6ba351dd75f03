const HOUR_WORDS: [&str; 12] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve",
];

/// Spoken word for a display hour in 1-12. Out-of-range input returns an
/// empty string; upstream invariants keep the hour in range.
pub fn hour_word(hour: u32) -> &'static str {
    match hour {
        1..=12 => HOUR_WORDS[(hour - 1) as usize],
        _ => "",
    }
}

/// Count word for a minute offset. Offsets equidistant from the hour share a
/// word ("twenty-five past" and "twenty-five to" both sound natural), so 25
/// and 35 map to the same word, as do 5/55, 10/50, and 20/40. Anything else
/// falls back to the plain numeral; rounding keeps that branch unreached.
pub fn minute_word(minute: u32) -> String {
    match minute {
        5 | 55 => "five".to_string(),
        10 | 50 => "ten".to_string(),
        20 | 40 => "twenty".to_string(),
        25 | 35 => "twenty-five".to_string(),
        _ => minute.to_string(),
    }
}

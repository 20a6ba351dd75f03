/// Rounds a raw minute to the nearest multiple of 5 (ties go up) and handles
/// the rollover into the next hour. Returns the rounded minute and the
/// possibly-bumped display hour; a bump past 12 wraps to 1.
pub fn round_to_five(minute: u32, display_hour: u32) -> (u32, u32) {
    let rounded = (minute + 2) / 5 * 5;
    if rounded >= 60 {
        let bumped = if display_hour >= 12 { 1 } else { display_hour + 1 };
        (0, bumped)
    } else {
        (rounded, display_hour)
    }
}

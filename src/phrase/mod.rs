mod period;
mod rounding;
mod variation;
mod words;

pub use period::Period;
pub use rounding::round_to_five;
pub use variation::pick;
pub use words::{hour_word, minute_word};

use crate::clock::ClockTime;
use capitalize::Capitalize;
use rand::Rng;

/// Renders a clock reading as a casual spoken-style sentence, e.g.
/// "Half past three." or "About a quarter to noon.".
///
/// The period is classified from the raw 24-hour value before rounding, so a
/// rounding-induced hour bump never changes the noon phrasing decision.
pub fn spoken_time(time: &ClockTime, rng: &mut impl Rng) -> String {
    let period = Period::from_hour(time.hour());
    let (minute, hour) = round_to_five(time.minute(), time.display_hour());
    pick(rng, &variations(hour, minute, period))
}

/// Template set for the bucket matching a rounded minute. Exactly one random
/// pick happens in `spoken_time`; this helper stays deterministic.
fn variations(hour: u32, minute: u32, period: Period) -> Vec<String> {
    let near_noon = hour == 12 && period == Period::Afternoon;
    let word = hour_word(hour);

    match minute {
        0 => {
            if hour == 12 {
                return vec![
                    "It's noon.".to_string(),
                    "It's twelve o'clock.".to_string(),
                    "It's midday.".to_string(),
                ];
            }
            vec![
                format!("It's {} o'clock.", word),
                format!("It's {}.", word),
                format!("About {} o'clock.", word),
            ]
        }
        15 => {
            if near_noon {
                return vec![
                    "A quarter past noon.".to_string(),
                    "About a quarter past twelve.".to_string(),
                    "Fifteen minutes past noon.".to_string(),
                ];
            }
            vec![
                format!("A quarter past {}.", word),
                format!("About a quarter past {}.", word),
                format!("Fifteen minutes past {}.", word),
            ]
        }
        30 => {
            if near_noon {
                return vec![
                    "Half past noon.".to_string(),
                    "About half past twelve.".to_string(),
                    "Thirty minutes past noon.".to_string(),
                ];
            }
            vec![
                format!("Half past {}.", word),
                format!("About half past {}.", word),
                format!("Almost half past {}.", word),
            ]
        }
        45 => {
            let next = next_hour(hour);
            let next_word = hour_word(next);
            if next == 12 {
                return vec![
                    "A quarter to noon.".to_string(),
                    "About a quarter to twelve.".to_string(),
                    "Fifteen minutes to noon.".to_string(),
                ];
            }
            vec![
                format!("A quarter to {}.", next_word),
                format!("About a quarter to {}.", next_word),
                format!("Almost a quarter to {}.", next_word),
            ]
        }
        m if m < 30 => {
            let count = format!("{} minutes", minute_word(m));
            if near_noon {
                return vec![
                    format!("{} past noon.", count.capitalize()),
                    format!("About {} past twelve.", count),
                ];
            }
            vec![
                format!("{} past {}.", count.capitalize(), word),
                format!("About {} past {}.", count, word),
                format!("Just {} past {}.", count, word),
            ]
        }
        m => {
            let next = next_hour(hour);
            let next_word = hour_word(next);
            let count = format!("{} minutes", minute_word(60 - m));
            if next == 12 {
                return vec![
                    format!("{} to noon.", count.capitalize()),
                    format!("About {} to twelve.", count),
                ];
            }
            vec![
                format!("{} to {}.", count.capitalize(), next_word),
                format!("About {} to {}.", count, next_word),
                format!("Almost {} to {}.", count, next_word),
            ]
        }
    }
}

fn next_hour(hour: u32) -> u32 {
    if hour >= 12 { 1 } else { hour + 1 }
}

pub mod cli;
pub mod clock;
pub mod console;
pub mod phrase;

pub use cli::Cli;
pub use clock::{ClockError, ClockTime};
pub use console::{Console, VerbosityLevel, console, init_console};
pub use phrase::{Period, spoken_time};

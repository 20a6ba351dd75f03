use anyhow::Result;
use clap::Parser;
use saytime::{
    cli::Cli,
    clock::ClockTime,
    console::{console, init_console},
    phrase,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_console(cli.get_verbosity());

    let now = ClockTime::now();
    console().verbose(&format!(
        "clock reads {:02}:{:02}",
        now.hour(),
        now.minute()
    ));

    let mut rng = rand::thread_rng();
    let sentence = phrase::spoken_time(&now, &mut rng);
    println!("{}", sentence);

    Ok(())
}

// src/bin/cli.rs

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    booking_feed::cli::run()
}

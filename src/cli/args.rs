use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "shopping-cart")]
#[command(about = "An interactive shopping cart simulator with a fixed product catalog")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging (written to stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

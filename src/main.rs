use asciigen::cli::{Cli, Commands};
use asciigen::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => asciigen::cli::generate::run(args, &printer)?,
        Commands::Palette(args) => asciigen::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => asciigen::cli::completions::run(args)?,
    }

    Ok(())
}

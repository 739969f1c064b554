use clap::Parser;
use miette::Result;
use vexil::cli::{Cli, Commands};
use vexil::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Generate(args) => vexil::cli::generate::run(args, &printer)?,
        Commands::Build(args) => vexil::cli::build::run(args, &printer)?,
        Commands::Validate(args) => vexil::cli::validate::run(args, &printer)?,
        Commands::Init(args) => vexil::cli::init::run(args, &printer)?,
        Commands::Countries(args) => vexil::cli::countries::run(args)?,
        Commands::Completions(args) => vexil::cli::completions::run(args)?,
    }

    Ok(())
}

pub mod build;
pub mod completions;
pub mod countries;
pub mod generate;
pub mod init;
pub mod validate;

use clap::{Parser, Subcommand};

/// vexil - Geometric flag SVG generator
#[derive(Parser, Debug)]
#[command(name = "vexil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one flag SVG from directives
    Generate(generate::GenerateArgs),

    /// Build every flag listed in flags.yaml manifests
    Build(build::BuildArgs),

    /// Validate manifests without writing SVGs
    Validate(validate::ValidateArgs),

    /// Create a starter flags.yaml
    Init(init::InitArgs),

    /// List known country names and ISO codes
    Countries(countries::CountriesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

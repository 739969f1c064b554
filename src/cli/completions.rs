//! Shell completions generation.

use clap::Args;
use clap_complete::Shell;

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> crate::error::Result<()> {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "vexil", &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_include_directives() {
        let mut cmd = <super::super::Cli as clap::CommandFactory>::command();
        let mut out = Vec::new();
        clap_complete::generate(Shell::Bash, &mut cmd, "vexil", &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("--horizontal"));
    }
}

//! Countries command: lists the built-in name → ISO code table.

use clap::Args;
use serde::Serialize;

use crate::country::COUNTRIES;
use crate::error::{FlagError, Result};

/// List known country names and their ISO codes
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CountryEntry {
    name: &'static str,
    iso: &'static str,
}

pub fn run(args: CountriesArgs) -> Result<()> {
    let listing = if args.json {
        render_json()?
    } else {
        render_table()
    };
    print!("{}", listing);
    Ok(())
}

fn render_table() -> String {
    let mut sorted: Vec<&(&str, &str)> = COUNTRIES.iter().collect();
    sorted.sort_by_key(|(name, _)| *name);

    sorted
        .into_iter()
        .map(|(name, code)| format!("{}  {}\n", code, name))
        .collect()
}

fn render_json() -> Result<String> {
    let entries: Vec<CountryEntry> = COUNTRIES
        .iter()
        .map(|&(name, iso)| CountryEntry { name, iso })
        .collect();

    let mut json = serde_json::to_string_pretty(&entries).map_err(|e| FlagError::Parse {
        message: format!("Failed to serialize country table: {}", e),
        help: None,
    })?;
    json.push('\n');
    Ok(json)
}

use std::path::PathBuf;

use clap::Parser;

use crate::pattern::TokenGrammar;

#[derive(Parser, Debug)]
#[command(
    name = "tplex",
    version,
    about = "Extract placeholders from DOCX templates"
)]
pub struct Args {
    /// Template files or directories to scan
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json", "markdown", "names"])]
    pub format: String,

    /// Token grammar for placeholder delimiters
    #[arg(short, long, value_name = "STYLE", value_parser = ["brace", "double-brace", "bracket", "angle"])]
    pub grammar: Option<String>,

    /// Directory for generated documentation artifacts
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip writing the markdown documentation artifact
    #[arg(long)]
    pub no_doc: bool,

    /// Print files that would be scanned, then exit
    #[arg(short = 'L', long)]
    pub list_target_files: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Resolve the token grammar from the CLI flag, if given.
    /// Invalid values are rejected by clap's value_parser before this runs.
    pub fn token_grammar(&self) -> Option<TokenGrammar> {
        self.grammar.as_deref().and_then(TokenGrammar::from_name)
    }
}

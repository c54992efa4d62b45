use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::profile::DEFAULT_PROFILE_NAME;

#[derive(Debug, Parser)]
#[command(name = "profiles", version, about = "Named settings profiles")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_PROFILE_NAME,
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Directory holding the profiles folder")]
    pub root: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Get(GetArgs),
    Set(SetArgs),
    Has(KeyArgs),
    Rm(KeyArgs),
    Clear,
    Show,
    List,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(help = "Setting key")]
    pub key: String,
    #[arg(long, help = "Value printed when the key is missing")]
    pub default: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    String,
    Int,
    Float,
    Bool,
    Json,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(help = "Setting key")]
    pub key: String,
    #[arg(help = "Value to store")]
    pub value: String,
    #[arg(
        long,
        value_enum,
        default_value_t = ValueKind::String,
        help = "How to interpret the value"
    )]
    pub kind: ValueKind,
}

#[derive(Debug, Args)]
pub struct KeyArgs {
    #[arg(help = "Setting key")]
    pub key: String,
}

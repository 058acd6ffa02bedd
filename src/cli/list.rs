use clap::{Parser, ValueEnum};

use crate::catalog::CommandType;

/// Which command types to list
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    Active,
    Experimental,
    #[default]
    All,
}

impl TypeFilter {
    pub fn types(self) -> &'static [CommandType] {
        match self {
            TypeFilter::Active => &[CommandType::Active],
            TypeFilter::Experimental => &[CommandType::Experimental],
            TypeFilter::All => &CommandType::ALL,
        }
    }
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every available command:\n    claude-commands list\n\n\
                  List experimental commands:\n    claude-commands list --type experimental\n\n\
                  List installed commands:\n    claude-commands list --installed")]
pub struct ListArgs {
    /// Command type to list
    #[arg(long = "type", short = 't', value_enum, default_value_t = TypeFilter::All)]
    pub type_filter: TypeFilter,

    /// Only show commands recorded in the manifest
    #[arg(long)]
    pub installed: bool,
}

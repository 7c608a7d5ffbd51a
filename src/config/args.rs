use structopt::{clap::arg_enum, StructOpt};

use std::path::PathBuf;

use crate::meal::MealId;

/// Browse the desserts listed in TheMealDB.
#[derive(Debug, StructOpt)]
pub struct Args {
    /// Path to the configuration file.
    #[structopt(long, short, env = "DESSERTS_CONFIG", name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base url of the api, i.e. `https://themealdb.com/api/json/v1/1`.
    #[structopt(long, env = "DESSERTS_API", name = "URL")]
    pub api: Option<String>,

    /// Request timeout in seconds, `0` falls back to the default.
    #[structopt(long, env = "DESSERTS_TIMEOUT", name = "SECS")]
    pub timeout: Option<u64>,

    /// When to colorize the output.
    #[structopt(long,
                env = "DESSERTS_COLOR",
                possible_values = &ColorWhen::variants(),
                case_insensitive = true,
                default_value = "Automatic")]
    pub color: ColorWhen,

    /// Use plain ascii bullets instead of box drawing characters.
    #[structopt(long, env = "DESSERTS_PLAIN", takes_value = false)]
    pub plain: bool,

    /// Print json instead of text.
    #[structopt(long)]
    pub json: bool,

    #[structopt(subcommand)]
    pub command: Option<Command>,
}

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ColorWhen {
        Always,
        Automatic,
        Never,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, StructOpt)]
pub enum Command {
    /// Default. List all desserts sorted by name.
    List,
    /// Show the details of a single meal.
    Show(ShowCommand),
    /// Walk through the list and the details interactively.
    Browse,
}

#[derive(Debug, Clone, PartialEq, Eq, StructOpt)]
pub struct ShowCommand {
    /// Id of the meal, as listed by `desserts list --json`.
    #[structopt(name = "MEAL_ID")]
    pub id: MealId,
}

impl Default for Command {
    fn default() -> Self {
        Self::List
    }
}

//! # desserts
//!
//! CLI tool to browse the desserts listed in
//! [TheMealDB](https://themealdb.com).
//!
//! ## Features
//!
//! - [X] Lists all desserts, sorted by name.
//! - [X] Shows instructions and ingredients of a single meal.
//! - [X] Interactive browsing from the list to the details and back.
//! - [X] JSON Output
//!
//!
//! ## Usage
//!
//! See `desserts --help`.
//!
//! - `desserts list` lists all desserts with their id and thumbnail.
//! - `desserts show 52768` shows the details of the meal with id 52768.
//! - `desserts browse` lets you pick meals from the list by number.
//!
//! Nothing is cached, every command queries the api again.
//!
//!
//! ## Configuration
//!
//! An optional `config.toml` may set `api-base` and `timeout-secs`.
//! It is looked up in
//! - `$XDG_CONFIG_DIR/desserts/config.toml` on **Linux**,
//! - `$HOME/Library/Application Support/desserts/config.toml` on **macOS**,
//! - `{FOLDERID_RoamingAppData}\desserts\config.toml` on **Windows**

use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Colorizes the output.
///
/// This will colorize for Stdout based on heuristics and colors
/// from the [`owo_colors`] library.
///
/// **Windows**: Automatic color defaults to no color at the moment!
macro_rules! color {
    ($what:expr; $($fn:ident),+) => {
        {
            #[cfg(not(windows))]
            {
                use owo_colors::{OwoColorize, Stream};
                use crate::config::args::ColorWhen;
                match crate::config::CONF.args.color {
                    ColorWhen::Always => {
                        $what $(. $fn())+ .to_string()
                    }
                    ColorWhen::Automatic => {
                        $what.if_supports_color(Stream::Stdout,
                                                |txt| txt $(. $fn().to_string())+).to_string()
                    }
                    ColorWhen::Never => {
                        $what.to_string()
                    }
                }
            }
            #[cfg(windows)]
            {
                use owo_colors::{OwoColorize};
                use crate::config::args::ColorWhen;
                match crate::config::CONF.args.color {
                    ColorWhen::Always => {
                        $what $(. $fn())+ .to_string()
                    }
                    ColorWhen::Automatic | ColorWhen::Never => {
                        $what.to_string()
                    }
                }
            }
        }
    };
}

/// Conditionally select one of two expressions.
///
/// The former will be used unless the `--plain` flag is specified.
macro_rules! if_plain {
    ($fancy:expr, $plain:expr) => {
        if cfg!(windows) || crate::config::CONF.args.plain {
            $plain
        } else {
            $fancy
        }
    };
}

mod browse;
mod config;
mod error;
mod meal;
mod request;
mod screen;

use crate::{
    config::{args::Command, CONF},
    error::{Error, Result, ResultExt},
    request::{Api, DefaultApi},
    screen::{DetailScreen, ListScreen},
};

const THE_MEAL_DB_API: &str = "https://themealdb.com/api/json/v1/1";

fn main() -> Result<()> {
    let res = real_main();
    match res {
        Ok(_) => {}
        Err(ref why) => error!("{}", why),
    }
    res
}

fn real_main() -> Result<()> {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let api = DefaultApi::create()?;
    let base = CONF.api_base();
    // Match over the user requested command
    match CONF.cmd() {
        Command::List => {
            let mut screen = ListScreen::new(base);
            screen.load_meals(&api);
            screen.print()?;
        }
        Command::Show(cmd) => {
            let mut screen = DetailScreen::new(base, cmd.id);
            screen.load_detail(&api);
            screen.print()?;
        }
        Command::Browse => {
            if CONF.args.json {
                return Err(Error::JsonNotInteractive);
            }
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            browse::browse(&api, base, stdin.lock(), &mut stdout.lock())?;
        }
    }
    Ok(())
}

fn get_sane_terminal_dimensions() -> (usize, usize) {
    const MIN_TERM_WIDTH: usize = 20;
    terminal_size::terminal_size()
        .map(|(w, h)| (w.0 as usize, h.0 as usize))
        .map(|(w, h)| (w.max(MIN_TERM_WIDTH), h))
        .ok_or(Error::UnableToGetTerminalSize)
        .log_warn()
        .unwrap_or((80, 80))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let output = stdout.lock();
    serde_json::to_writer_pretty(output, value)
        .map_err(|why| Error::Serializing(why, "writing json"))?;
    println!();
    Ok(())
}

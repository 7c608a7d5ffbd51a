//! Interactive navigation between the list and the detail screen.
//!
//! Every time a screen is entered, it fetches anew.
use std::io::{BufRead, Write};

use tracing::info;

use crate::{
    error::{Error, Result},
    get_sane_terminal_dimensions,
    request::Api,
    screen::{DetailScreen, ListScreen},
};

const LIST_PROMPT: &str = "Open meal by number, [r]eload or [q]uit: ";
const DETAIL_PROMPT: &str = "[b]ack or [q]uit: ";

/// A line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Open(usize),
    Back,
    Reload,
    Quit,
    Unknown,
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "q" | "quit" => Self::Quit,
            "r" | "reload" => Self::Reload,
            "" | "b" | "back" => Self::Back,
            _ => line.parse().map(Self::Open).unwrap_or(Self::Unknown),
        }
    }
}

/// Run the interactive loop until the user quits or `input` is exhausted.
///
/// Screens and prompts are written to `out`.
pub fn browse<A, R, W>(api: &A, base: &str, input: R, out: &mut W) -> Result<()>
where
    A: Api,
    R: BufRead,
    W: Write,
{
    let (width, _height) = get_sane_terminal_dimensions();
    let mut lines = input.lines();
    let mut next_input = || -> Result<Input> {
        match lines.next() {
            Some(line) => Ok(Input::parse(
                &line.map_err(|why| Error::Io(why, "reading input"))?,
            )),
            None => Ok(Input::Quit),
        }
    };
    let mut list = ListScreen::new(base);
    'list: loop {
        list.load_meals(api);
        write_lines(out, &list.lines())?;
        let id = loop {
            prompt(out, LIST_PROMPT)?;
            match next_input()? {
                Input::Quit => return Ok(()),
                Input::Reload => continue 'list,
                Input::Open(number) => match list.meal(number) {
                    Some(meal) => break meal.id.clone(),
                    None => {
                        let msg = format!("No meal number {}", number);
                        write_lines(out, &[color!(msg; red)])?;
                    }
                },
                Input::Back | Input::Unknown => {}
            }
        };
        list.leave();
        let mut detail = DetailScreen::new(base, id);
        info!("Opening meal {:?}", detail.meal_id());
        detail.load_detail(api);
        write_lines(out, &[String::new()])?;
        write_lines(out, &detail.lines(width))?;
        loop {
            prompt(out, DETAIL_PROMPT)?;
            match next_input()? {
                Input::Quit => return Ok(()),
                Input::Back => break,
                _ => {}
            }
        }
        detail.leave();
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    lines
        .iter()
        .try_for_each(|line| writeln!(out, "{}", line))
        .map_err(|why| Error::Io(why, "writing output"))
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "\n{}", color!(text; bright_black))
        .and_then(|_| out.flush())
        .map_err(|why| Error::Io(why, "writing prompt"))
}

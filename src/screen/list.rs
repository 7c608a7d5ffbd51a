use crate::{config::CONF, error::Result, meal::Meal, print_json, request::Api};

use super::{print_failure_json, Screen, ScreenState};

const TITLE: &str = "Dessert Meals";

/// All desserts, sorted by name.
#[derive(Debug)]
pub struct ListScreen {
    screen: Screen<Vec<Meal>>,
    base: String,
}

impl ListScreen {
    /// Create the screen for the api at `base`, nothing is fetched yet.
    pub fn new<S: Into<String>>(base: S) -> Self {
        Self {
            screen: Screen::new(),
            base: base.into(),
        }
    }

    pub fn state(&self) -> &ScreenState<Vec<Meal>> {
        self.screen.state()
    }

    /// Fetch the desserts and settle the screen.
    pub fn load_meals<A: Api>(&mut self, api: &A) {
        let ticket = self.screen.begin();
        let result = Meal::fetch_desserts(api, &self.base).map(sort_by_name);
        self.screen.settle(ticket, result, "Failed to fetch meals");
    }

    pub fn leave(&mut self) {
        self.screen.leave();
    }

    /// The meal listed as entry `number`, counting from one.
    pub fn meal(&self, number: usize) -> Option<&Meal> {
        match self.state() {
            ScreenState::Loaded(meals) => meals.get(number.checked_sub(1)?),
            _ => None,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![color!(TITLE; bold, underline)];
        match self.state() {
            ScreenState::Loading => lines.push(String::from("Loading meals...")),
            ScreenState::Failed(why) => lines.push(color!(why; red)),
            ScreenState::Loaded(meals) => {
                for (idx, meal) in meals.iter().enumerate() {
                    lines.push(String::new());
                    lines.extend(meal.list_lines(idx + 1));
                }
            }
        }
        lines
    }

    /// Print the screen, respecting `--json`.
    pub fn print(&self) -> Result<()> {
        if CONF.args.json {
            match self.state() {
                ScreenState::Loaded(meals) => print_json(meals),
                ScreenState::Failed(why) => print_failure_json(why),
                ScreenState::Loading => Ok(()),
            }
        } else {
            self.lines().iter().for_each(|line| println!("{}", line));
            Ok(())
        }
    }
}

/// Stable sort by name, case-sensitive.
pub fn sort_by_name(mut meals: Vec<Meal>) -> Vec<Meal> {
    meals.sort_by(|a, b| a.name.cmp(&b.name));
    meals
}

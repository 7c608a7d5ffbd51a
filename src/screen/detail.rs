use crate::{
    config::CONF,
    error::Result,
    get_sane_terminal_dimensions,
    meal::{MealDetail, MealId},
    print_json,
    request::Api,
};

use super::{print_failure_json, Screen, ScreenState};

const TITLE: &str = "Meal Details";

/// Everything known about a single meal.
#[derive(Debug)]
pub struct DetailScreen {
    screen: Screen<MealDetail>,
    base: String,
    meal_id: MealId,
}

impl DetailScreen {
    pub fn new<S: Into<String>>(base: S, meal_id: MealId) -> Self {
        Self {
            screen: Screen::new(),
            base: base.into(),
            meal_id,
        }
    }

    pub fn meal_id(&self) -> &str {
        &self.meal_id
    }

    pub fn state(&self) -> &ScreenState<MealDetail> {
        self.screen.state()
    }

    /// Look the meal up and settle the screen.
    ///
    /// An empty lookup fails the screen just like any other error.
    pub fn load_detail<A: Api>(&mut self, api: &A) {
        let ticket = self.screen.begin();
        let result = MealDetail::fetch(api, &self.base, &self.meal_id);
        self.screen.settle(ticket, result, "Failed to fetch meal details");
    }

    pub fn leave(&mut self) {
        self.screen.leave();
    }

    pub fn lines(&self, width: usize) -> Vec<String> {
        let mut lines = vec![color!(TITLE; bold, underline)];
        match self.state() {
            ScreenState::Loading => lines.push(String::from("Loading meal details...")),
            ScreenState::Failed(why) => lines.push(color!(why; red)),
            ScreenState::Loaded(detail) => {
                lines.push(String::new());
                lines.extend(detail.detail_lines(width));
            }
        }
        lines
    }

    /// Print the screen, respecting `--json`.
    pub fn print(&self) -> Result<()> {
        if CONF.args.json {
            match self.state() {
                ScreenState::Loaded(detail) => print_json(&detail.complete()),
                ScreenState::Failed(why) => print_failure_json(why),
                ScreenState::Loading => Ok(()),
            }
        } else {
            let (width, _height) = get_sane_terminal_dimensions();
            self.lines(width).iter().for_each(|line| println!("{}", line));
            Ok(())
        }
    }
}

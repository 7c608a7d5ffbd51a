use lazy_static::lazy_static;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{Meal, MealDetail};

const NUMBER_WIDTH: usize = 4;
const TEXT_INDENT: &str = "     ";

lazy_static! {
    static ref NAME_PRE: &'static str = if_plain!(" ╭───╴", " - ");
    static ref THUMB_PRE: &'static str = if_plain!(" ├╴", "   ");
    static ref HEADLINE_PRE: &'static str = if_plain!(" ├─╴", "   ");
    static ref TEXT_PRE: &'static str = if_plain!(" ┊   ", "     ");
    static ref BULLET: &'static str = if_plain!(" ┊   • ", "     - ");
    static ref END: &'static str = if_plain!(" ╰╴", "");
}

/// Serializable view of a [`MealDetail`] for json output.
///
/// Contains only the non-blank ingredients.
#[derive(Debug, Serialize)]
pub struct MealDetailComplete<'c> {
    pub id: &'c str,
    pub name: &'c str,
    pub thumbnail: &'c str,
    pub instructions: &'c str,
    pub ingredients: Vec<IngredientComplete<'c>>,
}

#[derive(Debug, Serialize)]
pub struct IngredientComplete<'c> {
    pub ingredient: &'c str,
    pub measure: &'c str,
}

impl Meal {
    /// Terminal lines for this meal as entry `number` of a list.
    pub fn list_lines(&self, number: usize) -> Vec<String> {
        vec![
            format!(
                "{} {}",
                color!(format!("{:>width$}", number, width = NUMBER_WIDTH); bold, bright_yellow),
                color!(self.name; bold),
            ),
            format!("{}{}", TEXT_INDENT, color!(self.thumbnail_url; bright_black)),
        ]
    }
}

impl MealDetail {
    /// Terminal lines for this meal, wrapped to `width` columns.
    pub fn detail_lines(&self, width: usize) -> Vec<String> {
        let mut lines = vec![
            format!("{}{}", *NAME_PRE, color!(self.name; bold)),
            format!("{}{}", *THUMB_PRE, color!(self.thumbnail_url; bright_black)),
            format!("{}{}", *HEADLINE_PRE, color!("Instructions:"; bright_blue)),
        ];
        let text_width = width.saturating_sub(TEXT_PRE.width()).max(1);
        for paragraph in self.instructions.lines().filter(|p| !p.trim().is_empty()) {
            for part in textwrap::wrap(paragraph.trim(), text_width) {
                lines.push(format!("{}{}", *TEXT_PRE, part));
            }
        }
        lines.push(format!(
            "{}{}",
            *HEADLINE_PRE,
            color!("Ingredients:"; bright_blue)
        ));
        lines.extend(
            self.filtered_pairs()
                .map(|(ingredient, measure)| ingredient_line(ingredient, measure)),
        );
        if !END.is_empty() {
            lines.push(END.to_string());
        }
        lines
    }

    pub fn complete(&self) -> MealDetailComplete<'_> {
        MealDetailComplete {
            id: &self.id,
            name: &self.name,
            thumbnail: &self.thumbnail_url,
            instructions: &self.instructions,
            ingredients: self
                .filtered_pairs()
                .map(|(ingredient, measure)| IngredientComplete {
                    ingredient: ingredient.trim(),
                    measure: measure.trim(),
                })
                .collect(),
        }
    }
}

/// A single bullet point, the measure is omitted if blank.
pub fn ingredient_line(ingredient: &str, measure: &str) -> String {
    let measure = measure.trim();
    if measure.is_empty() {
        format!("{}{}", *BULLET, ingredient.trim())
    } else {
        format!("{}{}: {}", *BULLET, ingredient.trim(), measure)
    }
}

use serde::{Deserialize, Serialize};
use tracing::warn;

mod de;
mod print;
mod ser;

use crate::{
    error::{Error, Result},
    request::{endpoint, fetch_json, Api},
};

pub type MealId = String;

/// Number of numbered ingredient/measure fields in a lookup response.
pub const SLOTS: usize = 20;

const CATEGORY_DESSERT: &str = "Dessert";
const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// Summary of a meal, as returned by the category filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename(deserialize = "idMeal"))]
    pub id: MealId,
    #[serde(rename(deserialize = "strMeal"))]
    pub name: String,
    #[serde(rename(deserialize = "strMealThumb", serialize = "thumbnail"))]
    pub thumbnail_url: String,
}

/// The complete record of a single meal.
///
/// Ingredients and measures are kept in [`SLOTS`] index-aligned slots,
/// blanks included.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "de::MealDetailDeserialized")]
pub struct MealDetail {
    pub id: MealId,
    pub name: String,
    pub instructions: String,
    pub thumbnail_url: String,
    slots: [Slot; SLOTS],
}

/// One ingredient together with its measure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    pub ingredient: String,
    pub measure: String,
}

/// Envelope of the category filter response.
///
/// The list is required, `null` is a decoding error.
#[derive(Debug, Deserialize)]
pub struct MealListResponse {
    pub meals: Vec<Meal>,
}

/// Envelope of the lookup response.
///
/// A `null` or missing list is read as empty, i.e. the meal does not exist.
#[derive(Debug, Deserialize)]
pub struct MealDetailResponse {
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub meals: Vec<MealDetail>,
}

impl Meal {
    /// Fetch all desserts, in the order the api returns them.
    pub fn fetch_desserts<A: Api>(api: &A, base: &str) -> Result<Vec<Self>> {
        let url = endpoint(base, "filter.php", &[("c", CATEGORY_DESSERT)])?;
        let resp: MealListResponse = fetch_json(api, &url)?;
        Ok(resp.meals)
    }
}

impl MealDetail {
    /// Assemble a detail from parallel ingredient and measure lists.
    ///
    /// Missing entries are left blank, entries past [`SLOTS`] are dropped.
    pub fn new<I, M>(
        id: MealId,
        name: String,
        instructions: String,
        thumbnail_url: String,
        ingredients: I,
        measures: M,
    ) -> Self
    where
        I: IntoIterator<Item = String>,
        M: IntoIterator<Item = String>,
    {
        let mut slots: [Slot; SLOTS] = Default::default();
        let mut ingredients = ingredients.into_iter();
        let mut measures = measures.into_iter();
        for slot in slots.iter_mut() {
            slot.ingredient = ingredients.next().unwrap_or_default();
            slot.measure = measures.next().unwrap_or_default();
        }
        if ingredients.next().is_some() || measures.next().is_some() {
            warn!("Meal {:?} has more than {} ingredients, dropping the rest", id, SLOTS);
        }
        Self {
            id,
            name,
            instructions,
            thumbnail_url,
            slots,
        }
    }

    /// Fetch a single meal by id.
    ///
    /// An empty lookup result is reported as [`Error::MealNotFound`].
    pub fn fetch<A: Api>(api: &A, base: &str, id: &str) -> Result<Self> {
        let url = endpoint(base, "lookup.php", &[("i", id)])?;
        let resp: MealDetailResponse = fetch_json(api, &url)?;
        resp.meals
            .into_iter()
            .next()
            .ok_or_else(|| Error::MealNotFound(id.to_owned()))
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &str> + Clone {
        self.slots.iter().map(|slot| slot.ingredient.as_str())
    }

    pub fn measures(&self) -> impl Iterator<Item = &str> + Clone {
        self.slots.iter().map(|slot| slot.measure.as_str())
    }

    /// Ingredient/measure pairs whose ingredient is not blank.
    ///
    /// The measure may still be blank. Pairs keep their original order.
    pub fn filtered_pairs(&self) -> impl Iterator<Item = (&str, &str)> + Clone {
        self.slots
            .iter()
            .filter(|slot| !slot.ingredient.trim().is_empty())
            .map(|slot| (slot.ingredient.as_str(), slot.measure.as_str()))
    }
}

/// Wire name of the numbered field for slot `idx`, e.g. `strIngredient1` for 0.
fn slot_key(prefix: &str, idx: usize) -> String {
    format!("{}{}", prefix, idx + 1)
}

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::{slot_key, MealDetail, MealId, INGREDIENT_PREFIX, MEASURE_PREFIX, SLOTS};

/// For deserializing responses from API/lookup.php.
///
/// The numbered `strIngredientN`/`strMeasureN` fields are collected in
/// `numbered` and folded into slots afterwards.
#[derive(Debug, Deserialize)]
pub struct MealDetailDeserialized {
    #[serde(rename = "idMeal")]
    id: MealId,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strInstructions")]
    instructions: String,
    #[serde(rename = "strMealThumb")]
    thumbnail_url: String,
    #[serde(flatten)]
    numbered: HashMap<String, Value>,
}

impl TryFrom<MealDetailDeserialized> for MealDetail {
    type Error = Error;

    fn try_from(mut raw: MealDetailDeserialized) -> Result<Self> {
        let ingredients = take_numbered(&mut raw.numbered, INGREDIENT_PREFIX)?;
        let measures = take_numbered(&mut raw.numbered, MEASURE_PREFIX)?;
        Ok(MealDetail::new(
            raw.id,
            raw.name,
            raw.instructions,
            raw.thumbnail_url,
            ingredients,
            measures,
        ))
    }
}

/// Remove the fields `{prefix}1` to `{prefix}20` from `fields`.
///
/// Missing and `null` fields are read as empty strings.
fn take_numbered(fields: &mut HashMap<String, Value>, prefix: &str) -> Result<Vec<String>> {
    (0..SLOTS)
        .map(|idx| {
            let key = slot_key(prefix, idx);
            match fields.remove(&key) {
                None | Some(Value::Null) => Ok(String::new()),
                Some(Value::String(value)) => Ok(value),
                Some(_) => Err(Error::InvalidSlot(key)),
            }
        })
        .collect()
}

/// Read a `null` list as an empty one.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

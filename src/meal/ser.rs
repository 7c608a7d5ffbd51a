use serde::{ser::SerializeMap, Serialize, Serializer};

use super::{slot_key, MealDetail, INGREDIENT_PREFIX, MEASURE_PREFIX, SLOTS};

/// Serializes back into the wire format of API/lookup.php.
///
/// All numbered fields are written, blank slots as empty strings.
impl Serialize for MealDetail {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4 + 2 * SLOTS))?;
        map.serialize_entry("idMeal", &self.id)?;
        map.serialize_entry("strMeal", &self.name)?;
        map.serialize_entry("strInstructions", &self.instructions)?;
        map.serialize_entry("strMealThumb", &self.thumbnail_url)?;
        for (idx, ingredient) in self.ingredients().enumerate() {
            map.serialize_entry(&slot_key(INGREDIENT_PREFIX, idx), ingredient)?;
        }
        for (idx, measure) in self.measures().enumerate() {
            map.serialize_entry(&slot_key(MEASURE_PREFIX, idx), measure)?;
        }
        map.end()
    }
}

//! Simplified, aggregated view of an entry.
//!
//! [`simplify`] folds the food items of an [`Entry`] into one summary row:
//! macro totals are summed, names and serving sizes are joined with
//! [`SEPARATOR`], and the first non-empty thumbnail becomes the image. The
//! view is derived on every read and never stored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{Entry, EntryId};

/// Separator placed between food names and between serving sizes.
pub const SEPARATOR: &str = " + ";

/// Aggregated projection of an [`Entry`].
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SimplifiedEntry {
    /// Identifier of the source entry.
    pub id: EntryId,

    /// Date of the source entry.
    #[schema(example = "2025-08-11")]
    pub date: String,

    /// Query of the source entry.
    #[schema(example = "1 cup rice")]
    pub query: String,

    /// Food names joined with `" + "`.
    #[schema(example = "rice")]
    pub food_name: String,

    /// Serving sizes (`"{qty:.1} {unit}"`) joined with `" + "`.
    #[schema(example = "1.0 cup")]
    pub serving_size: String,

    /// Total energy in kcal.
    #[schema(example = 205.4)]
    pub calories: f64,

    /// Total protein in grams.
    #[serde(rename = "protein_g")]
    #[schema(example = 4.25)]
    pub protein: f64,

    /// Total carbohydrate in grams.
    #[serde(rename = "carbs_g")]
    #[schema(example = 44.51)]
    pub carbs: f64,

    /// Total fat in grams.
    #[serde(rename = "fat_g")]
    #[schema(example = 0.44)]
    pub fat: f64,

    /// First available thumbnail among the food items.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://nix-tag-images.s3.amazonaws.com/784_thumb.jpg")]
    pub image_url: Option<String>,

    /// Creation time of the source entry.
    pub created_at: DateTime<Utc>,
}

/// Builds the simplified view of `entry`.
///
/// Pure and infallible: any entry, including one without food items,
/// produces a view. Totals are plain `f64` sums of the inputs.
#[must_use]
pub fn simplify(entry: &Entry) -> SimplifiedEntry {
    let foods = entry.foods();

    let mut calories = 0.0;
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;
    let mut names = Vec::with_capacity(foods.len());
    let mut servings = Vec::with_capacity(foods.len());
    let mut image_url = None;

    for food in foods {
        calories += food.calories;
        protein += food.protein;
        carbs += food.total_carbohydrate;
        fat += food.total_fat;
        names.push(food.food_name.as_str());
        servings.push(format!("{:.1} {}", food.serving_qty, food.serving_unit));

        if image_url.is_none() {
            image_url = food.photo.thumbnail().map(str::to_string);
        }
    }

    SimplifiedEntry {
        id: entry.id,
        date: entry.date.clone(),
        query: entry.query.clone(),
        food_name: names.join(SEPARATOR),
        serving_size: servings.join(SEPARATOR),
        calories,
        protein,
        carbs,
        fat,
        image_url,
        created_at: entry.created_at,
    }
}

//! Food items as returned by the nutrition lookup service.
//!
//! Field names follow the Nutritionix wire format so the same types are used
//! to decode the upstream response and to serialize stored entries. The
//! upstream service sends `null` for nutrients it has no value for; those
//! decode to zero (or an empty string) rather than failing the whole lookup.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// One food component of a lookup result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    /// Food name, e.g. `"rice"`.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "rice")]
    pub food_name: String,

    /// Serving quantity in `serving_unit`s.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = 1.0)]
    pub serving_qty: f64,

    /// Serving unit, e.g. `"cup"`.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "cup")]
    pub serving_unit: String,

    /// Serving weight in grams.
    #[serde(rename = "serving_weight_grams", default, deserialize_with = "null_as_default")]
    #[schema(example = 158.0)]
    pub serving_weight: f64,

    /// Energy in kcal.
    #[serde(rename = "nf_calories", default, deserialize_with = "null_as_default")]
    #[schema(example = 205.4)]
    pub calories: f64,

    /// Protein in grams.
    #[serde(rename = "nf_protein", default, deserialize_with = "null_as_default")]
    #[schema(example = 4.25)]
    pub protein: f64,

    /// Total fat in grams.
    #[serde(rename = "nf_total_fat", default, deserialize_with = "null_as_default")]
    #[schema(example = 0.44)]
    pub total_fat: f64,

    /// Total carbohydrate in grams.
    #[serde(rename = "nf_total_carbohydrate", default, deserialize_with = "null_as_default")]
    #[schema(example = 44.51)]
    pub total_carbohydrate: f64,

    /// Sodium in milligrams.
    #[serde(rename = "nf_sodium", default, deserialize_with = "null_as_default")]
    #[schema(example = 1.58)]
    pub sodium: f64,

    /// Sugars in grams.
    #[serde(rename = "nf_sugars", default, deserialize_with = "null_as_default")]
    #[schema(example = 0.08)]
    pub sugars: f64,

    /// Dietary fiber in grams.
    #[serde(rename = "nf_dietary_fiber", default, deserialize_with = "null_as_default")]
    #[schema(example = 0.63)]
    pub dietary_fiber: f64,

    /// Image URLs for the food.
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: Photo,
}

/// Thumbnail and high-resolution image URLs.
///
/// Both keys are always serialized; an absent URL is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct Photo {
    /// Thumbnail URL.
    #[serde(default)]
    #[schema(example = "https://nix-tag-images.s3.amazonaws.com/784_thumb.jpg")]
    pub thumb: Option<String>,

    /// High-resolution URL.
    #[serde(default)]
    #[schema(example = "https://nix-tag-images.s3.amazonaws.com/784_highres.jpg")]
    pub highres: Option<String>,
}

impl Photo {
    /// Returns the thumbnail URL if it is present and non-empty.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumb.as_deref().filter(|url| !url.is_empty())
    }
}

/// Decodes `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

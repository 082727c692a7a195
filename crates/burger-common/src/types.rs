//! Catalog, order and user types as delivered by the ordering API

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Ingredient category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientType {
    /// Bun, placed on top and at the bottom of the burger
    Bun,
    /// Main filling
    Main,
    /// Sauce
    Sauce,
}

impl fmt::Display for IngredientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientType::Bun => write!(f, "bun"),
            IngredientType::Main => write!(f, "main"),
            IngredientType::Sauce => write!(f, "sauce"),
        }
    }
}

impl FromStr for IngredientType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bun" => Ok(Self::Bun),
            "main" => Ok(Self::Main),
            "sauce" => Ok(Self::Sauce),
            other => Err(crate::Error::Custom(format!("Unknown ingredient type {other}"))),
        }
    }
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient id
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Category
    #[serde(rename = "type")]
    pub kind: IngredientType,
    /// Proteins
    pub proteins: u32,
    /// Fat
    pub fat: u32,
    /// Carbohydrates
    pub carbohydrates: u32,
    /// Calories
    pub calories: u32,
    /// Price
    pub price: u64,
    /// Image
    pub image: String,
    /// Image for small screens
    pub image_mobile: String,
    /// Large image
    pub image_large: String,
}

impl Ingredient {
    /// Whether this ingredient is a bun
    pub fn is_bun(&self) -> bool {
        self.kind == IngredientType::Bun
    }
}

/// An order as returned by the backend
///
/// Ingredients are kept as ids; hydrating them is up to the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id
    #[serde(rename = "_id")]
    pub id: String,
    /// Human readable name
    #[serde(default)]
    pub name: String,
    /// Status (`created`, `pending`, `done`, ...)
    #[serde(default)]
    pub status: String,
    /// Creation time
    #[serde(default)]
    pub created_at: String,
    /// Last update time
    #[serde(default)]
    pub updated_at: String,
    /// Order number
    pub number: u64,
    /// Ingredient ids in burger order
    #[serde(deserialize_with = "ingredient_ids")]
    pub ingredients: Vec<String>,
}

/// Order creation answers with hydrated ingredients, every other endpoint
/// with bare ids; keep ids either way.
fn ingredient_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdOrIngredient {
        Id(String),
        Ingredient {
            #[serde(rename = "_id")]
            id: String,
        },
    }

    Ok(Vec::<IdOrIngredient>::deserialize(deserializer)?
        .into_iter()
        .map(|entry| match entry {
            IdOrIngredient::Id(id) | IdOrIngredient::Ingredient { id } => id,
        })
        .collect())
}

/// Public feed payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersData {
    /// Most recent orders
    pub orders: Vec<Order>,
    /// Orders placed all time
    pub total: u64,
    /// Orders placed today
    pub total_today: u64,
}

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Email
    pub email: String,
    /// Display name
    pub name: String,
}

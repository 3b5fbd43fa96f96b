use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric recipe identifier, as assigned by the recipe catalog.
pub type RecipeId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    #[serde(rename = "śniadanie", alias = "breakfast")]
    Breakfast,
    #[serde(rename = "obiad", alias = "lunch")]
    Lunch,
    #[serde(rename = "kolacja", alias = "dinner")]
    Dinner,
    #[serde(rename = "przekąska", alias = "snack")]
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "śniadanie",
            MealType::Lunch => "obiad",
            MealType::Dinner => "kolacja",
            MealType::Snack => "przekąska",
        }
    }

    /// Parse either the catalog label or the English name.
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|m| {
            m.label() == lower || format!("{:?}", m).to_lowercase() == lower
        })
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ingredient line of a recipe: an amount per crew member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientAmount {
    /// Supply id of the ingredient.
    pub id: String,

    /// Quantity per crew member, in the ingredient's unit.
    pub amount: f64,
}

impl IngredientAmount {
    pub fn new(id: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }
}

/// A dish definition with ingredient quantities per crew member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub meal_type: Vec<MealType>,

    pub difficulty: u8,

    pub ingredients: Vec<IngredientAmount>,

    #[serde(default)]
    pub instructions: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equipment: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developed_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taste_score: Option<u8>,

    /// Preparation time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<u32>,
}

impl Recipe {
    /// Validation applied when a catalog is loaded.
    ///
    /// Difficulty and taste score must be in 1..=5 and every ingredient
    /// amount must be a finite, non-negative number. Zero is allowed.
    pub fn is_valid(&self) -> bool {
        (1..=5).contains(&self.difficulty)
            && self.taste_score.is_none_or(|s| (1..=5).contains(&s))
            && !self.name.trim().is_empty()
            && self
                .ingredients
                .iter()
                .all(|line| {
                    !line.id.trim().is_empty() && line.amount.is_finite() && line.amount >= 0.0
                })
    }

    pub fn is_meal_type(&self, meal_type: MealType) -> bool {
        self.meal_type.contains(&meal_type)
    }

    /// Comma-separated meal type labels, e.g. "obiad, kolacja".
    pub fn meal_type_labels(&self) -> String {
        self.meal_type
            .iter()
            .map(|m| m.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

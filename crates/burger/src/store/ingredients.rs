//! Ingredient catalog, fetched once per session and read many times

use burger_common::{Ingredient, IngredientType};

use super::lifecycle::{Lifecycle, RequestStatus};

const FETCH_FAILED: &str = "Failed to load ingredients";

/// Catalog action
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientsAction {
    /// Catalog fetch
    Fetch(Lifecycle<Vec<Ingredient>>),
}

/// Catalog state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientsState {
    /// Full catalog
    pub data: Vec<Ingredient>,
    /// Fetch status
    pub status: RequestStatus,
}

impl IngredientsState {
    /// Catalog fetch in flight
    pub fn loading(&self) -> bool {
        self.status.loading
    }

    /// Last fetch error
    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    /// Look up an ingredient
    pub fn by_id(&self, id: &str) -> Option<&Ingredient> {
        self.data.iter().find(|ing| ing.id == id)
    }

    /// Ingredients of one category, in catalog order
    pub fn of_type(&self, kind: IngredientType) -> impl Iterator<Item = &Ingredient> {
        self.data.iter().filter(move |ing| ing.kind == kind)
    }

    /// Apply an action
    pub fn reduce(mut self, action: IngredientsAction) -> Self {
        match action {
            IngredientsAction::Fetch(phase) => {
                if let Some(data) = self.status.apply(phase, FETCH_FAILED) {
                    self.data = data;
                }
            }
        }
        self
    }
}

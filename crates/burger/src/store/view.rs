//! Constructor view derived from the selection and the catalog

use burger_common::Ingredient;

/// Bun and fillings of the burger being assembled
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorView {
    /// First selected bun
    pub bun: Option<Ingredient>,
    /// Every other resolvable selection entry, in selection order
    pub ingredients: Vec<Ingredient>,
}

impl ConstructorView {
    /// Price of the burger, the bun counted top and bottom
    pub fn total_price(&self) -> u64 {
        let bun = self
            .bun
            .as_ref()
            .map_or(0, |bun| bun.price.saturating_mul(2));
        self.ingredients
            .iter()
            .fold(bun, |total, ing| total.saturating_add(ing.price))
    }

    /// How many times an ingredient is in the burger
    pub fn count_of(&self, id: &str) -> usize {
        match &self.bun {
            Some(bun) if bun.id == id => 2,
            _ => self.ingredients.iter().filter(|ing| ing.id == id).count(),
        }
    }

    /// A burger needs a bun before it can be ordered
    pub fn is_orderable(&self) -> bool {
        self.bun.is_some()
    }
}

/// Build the constructor view
///
/// Ids missing from the catalog are skipped. When several buns are selected
/// the first one wins and the rest are ignored.
pub fn constructor_view(selected_ids: &[String], catalog: &[Ingredient]) -> ConstructorView {
    let resolved = selected_ids
        .iter()
        .filter_map(|id| catalog.iter().find(|ing| &ing.id == id));

    let mut view = ConstructorView::default();
    for ingredient in resolved {
        if ingredient.is_bun() {
            if view.bun.is_none() {
                view.bun = Some(ingredient.clone());
            }
        } else {
            view.ingredients.push(ingredient.clone());
        }
    }
    view
}

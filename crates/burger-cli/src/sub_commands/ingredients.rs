use anyhow::Result;
use burger::{IngredientType, Session};
use clap::Args;

#[derive(Args)]
pub struct IngredientsSubCommand {
    /// Only list one category
    #[arg(short, long)]
    kind: Option<IngredientType>,
}

pub async fn ingredients(session: &Session, sub_command_args: &IngredientsSubCommand) -> Result<()> {
    session.fetch_ingredients().await?;
    let state = session.state();

    let kinds = match &sub_command_args.kind {
        Some(kind) => vec![*kind],
        None => vec![IngredientType::Bun, IngredientType::Main, IngredientType::Sauce],
    };

    for kind in kinds {
        println!("{kind}:");
        for ingredient in state.ingredients.of_type(kind) {
            println!("  {} {} {}", ingredient.id, ingredient.name, ingredient.price);
        }
    }

    Ok(())
}

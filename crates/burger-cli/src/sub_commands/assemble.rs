use anyhow::{bail, Result};
use burger::{Error, Session};
use clap::Args;

#[derive(Args)]
pub struct AssembleSubCommand {
    /// Ingredient ids in burger order; a later bun replaces an earlier one
    #[arg(required = true)]
    ingredients: Vec<String>,
    /// Move an entry, `from:to`
    #[arg(long = "move", value_parser = parse_move)]
    moves: Vec<(usize, usize)>,
    /// Place the order instead of only pricing it
    #[arg(long, default_value_t = false)]
    place: bool,
}

fn parse_move(arg: &str) -> Result<(usize, usize), String> {
    let (from, to) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected from:to, got {arg}"))?;
    let from = from.parse().map_err(|_| format!("invalid index {from}"))?;
    let to = to.parse().map_err(|_| format!("invalid index {to}"))?;
    Ok((from, to))
}

pub async fn assemble(session: &Session, sub_command_args: &AssembleSubCommand) -> Result<()> {
    session.fetch_ingredients().await?;

    for id in &sub_command_args.ingredients {
        if session.state().ingredients.by_id(id).is_none() {
            bail!("Unknown ingredient {id}");
        }
        session.add_ingredient(id.clone());
    }
    for (from, to) in &sub_command_args.moves {
        session.move_ingredient(*from, *to);
    }

    let view = session.state().constructor_view();
    match &view.bun {
        Some(bun) => println!("{} (x2)", bun.name),
        None => println!("No bun selected"),
    }
    for ingredient in &view.ingredients {
        println!("{}", ingredient.name);
    }
    println!("Total: {}", view.total_price());

    if !sub_command_args.place {
        return Ok(());
    }

    if let Err(err) = session.fetch_profile().await {
        tracing::debug!("No profile: {}", err);
    }

    match session.place_order().await {
        Ok(Some(order)) => println!("Order #{} placed: {}", order.number, order.name),
        Ok(None) => bail!("A burger needs a bun"),
        Err(Error::NotAuthenticated) => bail!("Log in before ordering"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

use anyhow::Result;
use burger::Session;
use clap::Args;

use super::print_order;

#[derive(Args)]
pub struct OrderSubCommand {
    /// Order number
    number: u64,
}

pub async fn order(session: &Session, sub_command_args: &OrderSubCommand) -> Result<()> {
    session.fetch_ingredients().await?;
    let order = session.fetch_order_by_number(sub_command_args.number).await?;

    let state = session.state();
    print_order(&order, &state.ingredients.data);

    Ok(())
}

use anyhow::Result;
use burger::Session;
use clap::Args;

use super::print_order;

#[derive(Args)]
pub struct FeedSubCommand {
    /// Resolve ingredient names
    #[arg(long, default_value_t = false)]
    details: bool,
    /// Number of orders to show
    #[arg(short, long, default_value_t = 10)]
    limit: usize,
}

pub async fn feed(session: &Session, sub_command_args: &FeedSubCommand) -> Result<()> {
    if sub_command_args.details {
        session.fetch_ingredients().await?;
    }
    let feed = session.fetch_feed().await?;
    let state = session.state();

    println!("Total: {}", feed.total);
    println!("Today: {}", feed.total_today);
    for order in feed.orders.iter().take(sub_command_args.limit) {
        if sub_command_args.details {
            print_order(order, &state.ingredients.data);
        } else {
            println!("#{} {} [{}]", order.number, order.name, order.status);
        }
    }

    Ok(())
}

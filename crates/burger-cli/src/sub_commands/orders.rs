use anyhow::Result;
use burger::Session;

use super::print_order;

pub async fn orders(session: &Session) -> Result<()> {
    session.fetch_ingredients().await?;
    let orders = session.fetch_user_orders().await?;

    if orders.is_empty() {
        println!("No orders yet");
    }

    let state = session.state();
    for order in &orders {
        print_order(order, &state.ingredients.data);
    }

    Ok(())
}

pub mod assemble;
pub mod feed;
pub mod forgot_password;
pub mod ingredients;
pub mod login;
pub mod logout;
pub mod order;
pub mod orders;
pub mod profile;
pub mod register;
pub mod reset_password;

use burger::{Ingredient, Order};

/// One line per order, ingredient ids resolved against the catalog when given
pub fn print_order(order: &Order, catalog: &[Ingredient]) {
    println!("#{} {} [{}] {}", order.number, order.name, order.status, order.created_at);
    for id in &order.ingredients {
        match catalog.iter().find(|ingredient| &ingredient.id == id) {
            Some(ingredient) => println!("    {} ({})", ingredient.name, ingredient.price),
            None => println!("    {id}"),
        }
    }
}

use anyhow::Result;
use burger::{RegisterData, Session};
use clap::Args;

#[derive(Args)]
pub struct RegisterSubCommand {
    /// Account email
    #[arg(short, long)]
    email: String,
    /// Display name
    #[arg(short, long)]
    name: String,
    /// Password
    #[arg(short, long, env = "BURGER_PASSWORD")]
    password: String,
}

pub async fn register(session: &Session, sub_command_args: &RegisterSubCommand) -> Result<()> {
    let user = session
        .register_user(RegisterData {
            email: sub_command_args.email.clone(),
            name: sub_command_args.name.clone(),
            password: sub_command_args.password.clone(),
        })
        .await?;

    println!("Registered {} <{}>", user.name, user.email);

    Ok(())
}

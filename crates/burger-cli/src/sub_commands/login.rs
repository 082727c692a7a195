use anyhow::Result;
use burger::{LoginData, Session};
use clap::Args;

#[derive(Args)]
pub struct LoginSubCommand {
    /// Account email
    #[arg(short, long)]
    email: String,
    /// Password
    #[arg(short, long, env = "BURGER_PASSWORD")]
    password: String,
}

pub async fn login(session: &Session, sub_command_args: &LoginSubCommand) -> Result<()> {
    let user = session
        .login_user(LoginData {
            email: sub_command_args.email.clone(),
            password: sub_command_args.password.clone(),
        })
        .await?;

    println!("Logged in as {} <{}>", user.name, user.email);

    Ok(())
}

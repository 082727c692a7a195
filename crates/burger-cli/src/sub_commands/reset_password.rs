use anyhow::Result;
use burger::{ResetPasswordData, Session};
use clap::Args;

#[derive(Args)]
pub struct ResetPasswordSubCommand {
    /// New password
    #[arg(short, long, env = "BURGER_PASSWORD")]
    password: String,
    /// Code from the reset email
    #[arg(short, long)]
    code: String,
}

pub async fn reset_password(
    session: &Session,
    sub_command_args: &ResetPasswordSubCommand,
) -> Result<()> {
    session
        .reset_password(ResetPasswordData {
            password: sub_command_args.password.clone(),
            token: sub_command_args.code.clone(),
        })
        .await?;

    println!("Password updated");

    Ok(())
}

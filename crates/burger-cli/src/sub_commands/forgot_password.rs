use anyhow::Result;
use burger::{ForgotPasswordData, Session};
use clap::Args;

#[derive(Args)]
pub struct ForgotPasswordSubCommand {
    /// Account email
    #[arg(short, long)]
    email: String,
}

pub async fn forgot_password(
    session: &Session,
    sub_command_args: &ForgotPasswordSubCommand,
) -> Result<()> {
    session
        .forgot_password(ForgotPasswordData {
            email: sub_command_args.email.clone(),
        })
        .await?;

    println!("Reset code sent to {}", sub_command_args.email);

    Ok(())
}

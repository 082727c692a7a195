use anyhow::Result;
use burger::{Session, UserPatch};
use clap::Args;

#[derive(Args)]
pub struct ProfileSubCommand {
    /// New display name
    #[arg(long)]
    name: Option<String>,
    /// New email
    #[arg(long)]
    email: Option<String>,
    /// New password
    #[arg(long)]
    password: Option<String>,
}

pub async fn profile(session: &Session, sub_command_args: &ProfileSubCommand) -> Result<()> {
    let patch = UserPatch {
        name: sub_command_args.name.clone(),
        email: sub_command_args.email.clone(),
        password: sub_command_args.password.clone(),
    };

    let user = if patch == UserPatch::default() {
        session.fetch_profile().await?
    } else {
        session.update_user(patch).await?
    };

    println!("Name: {}", user.name);
    println!("Email: {}", user.email);

    Ok(())
}

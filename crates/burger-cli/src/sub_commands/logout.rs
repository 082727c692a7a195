use anyhow::Result;
use burger::Session;

pub async fn logout(session: &Session) -> Result<()> {
    session.logout_user().await?;
    println!("Logged out");

    Ok(())
}

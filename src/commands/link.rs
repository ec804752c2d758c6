//! Account link management.

use crate::{
    cli::types::{AccountId, DiscordId},
    epic::http::EpicClient,
    error::{Result, StatsError},
    storage::LinkDatabase,
};

/// Resolve an Epic display name and store the link for a Discord user.
pub async fn handle_link_set(discord: DiscordId, name: String) -> Result<()> {
    let client = EpicClient::from_env()?;
    let player = client
        .find_player(&name)
        .await?
        .ok_or_else(|| StatsError::AccountNotFound { name: name.clone() })?;

    let mut db = LinkDatabase::new()?;
    db.link_account(
        &discord,
        &AccountId::new(player.id.clone()),
        &player.display_name,
    )?;

    println!(
        "Linked Discord user {} to Epic account {} ({})",
        discord, player.display_name, player.id
    );
    Ok(())
}

/// Print the linked account for a Discord user.
pub fn handle_link_show(discord: DiscordId) -> Result<()> {
    let db = LinkDatabase::new()?;
    match db.get_linked_account(&discord)? {
        Some(linked) => println!(
            "{} is linked to {} ({})",
            discord, linked.epic_display_name, linked.epic_account_id
        ),
        None => println!("No account linked for Discord user {}", discord),
    }
    Ok(())
}

/// Remove a Discord user's link.
pub fn handle_link_remove(discord: DiscordId) -> Result<()> {
    let mut db = LinkDatabase::new()?;
    if db.unlink_account(&discord)? {
        println!("Removed link for Discord user {}", discord);
    } else {
        println!("No account linked for Discord user {}", discord);
    }
    Ok(())
}

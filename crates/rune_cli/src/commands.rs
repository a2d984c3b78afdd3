use chrono::{DateTime, Utc};
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use rune_auth::{
    DeveloperAllowlist, Invocation, RuneConfig, UserId, is_bot_dev_id, saved_logins_limit,
};

/// Report whether `user_id` is on the developer allowlist
pub fn dev(user_id: UserId) {
    if is_bot_dev_id(user_id) {
        println!("{} {} is a bot developer", "✓".bright_green(), user_id);
    } else {
        println!("{} {} is not a bot developer", "✗".bright_red(), user_id);
    }
}

pub fn devs() {
    for user_id in DeveloperAllowlist::BUILTIN.iter() {
        println!("{user_id}");
    }
}

/// Show the saved login limit for `user_id` as of now
pub fn quota(user_id: UserId, premium: bool, config: &RuneConfig) {
    let limit = quota_limit(user_id, premium, config, Utc::now());

    println!("User:       {}", user_id.bright_cyan());
    println!("Created:    {}", user_id.created_at().to_rfc3339());
    println!(
        "Premium:    {}",
        if premium {
            "yes".bright_green().to_string()
        } else {
            "no".dimmed().to_string()
        }
    );
    println!("Limit:      {}", limit.bright_yellow());
    if !config.allow_users_to_save_logins {
        println!("{}", "Saving logins is disabled on this instance".bright_red());
    }
}

fn quota_limit(user_id: UserId, premium: bool, config: &RuneConfig, now: DateTime<Utc>) -> usize {
    let ctx = Invocation::new(user_id).with_premium(premium);
    saved_logins_limit(&ctx, &config.saved_logins, now)
}

pub fn show_config(config: &RuneConfig) -> Result<()> {
    println!("{}", render_config(config)?);
    Ok(())
}

fn render_config(config: &RuneConfig) -> Result<String> {
    toml::to_string_pretty(config).into_diagnostic()
}

//! Saved login quota
//!
//! Premium users get the premium limit. Everyone else gets a complimentary
//! limit once their Discord account is old enough, and nothing before that.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::{AuthError, CommandContext, QuotaSettings, Result, RuneConfig, has_premium};

/// Number of saved logins the invoker may keep at `now`
pub fn saved_logins_limit<C: CommandContext + ?Sized>(
    ctx: &C,
    settings: &QuotaSettings,
    now: DateTime<Utc>,
) -> usize {
    if has_premium(ctx) {
        return settings.max_for_premium;
    }

    let min_age = Duration::days(i64::from(settings.min_account_age_days_for_complimentary));
    if now - ctx.user_id().created_at() >= min_age {
        settings.max_for_complimentary
    } else {
        0
    }
}

/// Whether the invoker may save one more login given `saved_count` existing ones
pub fn check_can_add<C: CommandContext + ?Sized>(
    ctx: &C,
    config: &RuneConfig,
    saved_count: usize,
    now: DateTime<Utc>,
) -> Result<()> {
    let settings = &config.saved_logins;
    let limit = saved_logins_limit(ctx, settings, now);

    if saved_count >= limit {
        let user_id = ctx.user_id();
        debug!(%user_id, saved_count, limit, "denied: saved login quota");
        if saved_count == 0 && limit == 0 && !has_premium(ctx) {
            return Err(AuthError::premium_required(
                complimentary_notice(settings),
                user_id,
            ));
        }
        return Err(AuthError::SavedLoginLimitReached { limit });
    }

    if !config.allow_users_to_save_logins {
        return Err(AuthError::SavingLoginsDisabled);
    }

    Ok(())
}

fn complimentary_notice(settings: &QuotaSettings) -> String {
    format!(
        "Your Discord account must be older than {} days in order to have {} complimentary saved logins.\nGet {} saved logins regardless of account age",
        settings.min_account_age_days_for_complimentary,
        settings.max_for_complimentary,
        settings.max_for_premium,
    )
}

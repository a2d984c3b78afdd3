//! Command guards
//!
//! Fallible wrappers over the predicates for command handlers that want to
//! bail out with `?` and show the invoker a reason.

use std::fmt;

use tracing::debug;

use crate::{AuthError, CommandContext, Result, has_premium, is_bot_dev};

/// A precondition a command can be registered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    BotDeveloper,
    Premium { feature: &'static str },
}

impl Requirement {
    pub fn is_met<C: CommandContext + ?Sized>(&self, ctx: &C) -> bool {
        match self {
            Self::BotDeveloper => is_bot_dev(ctx),
            Self::Premium { .. } => has_premium(ctx),
        }
    }

    pub fn check<C: CommandContext + ?Sized>(&self, ctx: &C) -> Result<()> {
        match self {
            Self::BotDeveloper => ensure_bot_dev(ctx),
            Self::Premium { feature } => ensure_premium(ctx, *feature),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BotDeveloper => write!(f, "bot developer"),
            Self::Premium { feature } => write!(f, "premium ({feature})"),
        }
    }
}

pub fn ensure_bot_dev<C: CommandContext + ?Sized>(ctx: &C) -> Result<()> {
    if is_bot_dev(ctx) {
        return Ok(());
    }
    let user_id = ctx.user_id();
    debug!(%user_id, "denied: not a bot developer");
    Err(AuthError::NotBotDeveloper { user_id })
}

/// Fail with [`AuthError::PremiumRequired`] unless the invoker has premium.
///
/// `feature` is shown to the user, e.g. "Change account display name".
pub fn ensure_premium<C: CommandContext + ?Sized>(
    ctx: &C,
    feature: impl Into<String>,
) -> Result<()> {
    if has_premium(ctx) {
        return Ok(());
    }
    let user_id = ctx.user_id();
    let feature = feature.into();
    debug!(%user_id, %feature, "denied: premium required");
    Err(AuthError::premium_required(feature, user_id))
}

/// Check requirements in order, stopping at the first one that fails
pub fn ensure_all<C: CommandContext + ?Sized>(ctx: &C, requirements: &[Requirement]) -> Result<()> {
    requirements.iter().try_for_each(|req| req.check(ctx))
}

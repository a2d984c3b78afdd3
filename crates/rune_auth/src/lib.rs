//! Rune Auth - command authorization for the Rune Discord bot
//!
//! Two predicates answer who may run a command: [`is_bot_dev`] checks the
//! compiled-in developer allowlist and [`has_premium`] forwards the host's
//! entitlement flag. Guards, the saved login quota and configuration are
//! built on top of them.

pub mod allowlist;
pub mod config;
pub mod context;
pub mod error;
pub mod guard;
pub mod id;
pub mod premium;
pub mod quota;

pub use allowlist::{BOT_DEVELOPERS, DeveloperAllowlist, is_bot_dev, is_bot_dev_id};
pub use config::{QuotaSettings, RuneConfig, load_config, load_config_from_standard_locations};
pub use context::{CommandContext, InteractionContext, Invocation};
pub use error::{AuthError, Result};
pub use guard::{Requirement, ensure_all, ensure_bot_dev, ensure_premium};
pub use id::{DISCORD_EPOCH_MS, UserId};
pub use premium::has_premium;
pub use quota::{check_can_add, saved_logins_limit};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        AuthError, CommandContext, DeveloperAllowlist, Invocation, Requirement, Result,
        RuneConfig, UserId, ensure_bot_dev, ensure_premium, has_premium, is_bot_dev,
    };
}

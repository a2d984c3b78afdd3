//! Command invocation context
//!
//! The host bot owns the real per-invocation object; this crate only needs the
//! invoker's id and the entitlement flag the host already computed.

use std::sync::Arc;

use serenity::model::application::CommandInteraction;

use crate::UserId;

/// What the authorization predicates read from a command invocation
pub trait CommandContext {
    /// Stable identifier of the user who invoked the command
    fn user_id(&self) -> UserId;

    /// Host-computed premium entitlement of the invoker
    fn has_premium(&self) -> bool;
}

impl<T: CommandContext + ?Sized> CommandContext for &T {
    fn user_id(&self) -> UserId {
        (**self).user_id()
    }

    fn has_premium(&self) -> bool {
        (**self).has_premium()
    }
}

impl<T: CommandContext + ?Sized> CommandContext for Box<T> {
    fn user_id(&self) -> UserId {
        (**self).user_id()
    }

    fn has_premium(&self) -> bool {
        (**self).has_premium()
    }
}

impl<T: CommandContext + ?Sized> CommandContext for Arc<T> {
    fn user_id(&self) -> UserId {
        (**self).user_id()
    }

    fn has_premium(&self) -> bool {
        (**self).has_premium()
    }
}

/// Plain invocation snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub user_id: UserId,
    pub premium: bool,
}

impl Invocation {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            premium: false,
        }
    }

    pub fn with_premium(mut self, premium: bool) -> Self {
        self.premium = premium;
        self
    }
}

impl CommandContext for Invocation {
    fn user_id(&self) -> UserId {
        self.user_id
    }

    fn has_premium(&self) -> bool {
        self.premium
    }
}

/// A slash command interaction paired with the host's entitlement decision
#[derive(Debug, Clone, Copy)]
pub struct InteractionContext<'a> {
    interaction: &'a CommandInteraction,
    premium: bool,
}

impl<'a> InteractionContext<'a> {
    pub fn new(interaction: &'a CommandInteraction, premium: bool) -> Self {
        Self {
            interaction,
            premium,
        }
    }

    pub fn interaction(&self) -> &'a CommandInteraction {
        self.interaction
    }
}

impl CommandContext for InteractionContext<'_> {
    fn user_id(&self) -> UserId {
        self.interaction.user.id.into()
    }

    fn has_premium(&self) -> bool {
        self.premium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_through<C: CommandContext>(ctx: C) -> (UserId, bool) {
        (ctx.user_id(), ctx.has_premium())
    }

    #[test]
    fn test_invocation_defaults_to_no_premium() {
        let ctx = Invocation::new(5u64);
        assert_eq!(read_through(ctx), (UserId::new(5), false));
        assert!(read_through(ctx.with_premium(true)).1);
    }

    #[test]
    fn test_smart_pointer_impls() {
        let ctx = Invocation::new(9u64).with_premium(true);
        let boxed: Box<dyn CommandContext> = Box::new(ctx);
        let shared: Arc<dyn CommandContext + Send + Sync> = Arc::new(ctx);

        assert_eq!(read_through(&ctx), (UserId::new(9), true));
        assert_eq!(read_through(&boxed), (UserId::new(9), true));
        assert_eq!(read_through(shared), (UserId::new(9), true));
    }
}

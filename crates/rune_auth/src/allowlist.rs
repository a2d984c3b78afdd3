//! Bot developer allowlist
//!
//! The allowlist is compiled in and never changes at runtime. Commands that
//! touch bot internals are registered behind [`is_bot_dev`].

use tracing::trace;

use crate::{CommandContext, UserId};

/// Bot developer ids, sorted ascending for binary search
pub const BOT_DEVELOPERS: [UserId; 4] = [
    UserId::new(175279476245004288),
    UserId::new(299693897859465228),
    UserId::new(335937477997101056),
    UserId::new(624299014388711455),
];

/// Membership check against [`BOT_DEVELOPERS`]
pub const fn is_bot_dev_id(user_id: UserId) -> bool {
    let needle = user_id.get();
    let mut lo = 0;
    let mut hi = BOT_DEVELOPERS.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let probe = BOT_DEVELOPERS[mid].get();
        if probe == needle {
            return true;
        } else if probe < needle {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    false
}

/// Whether the invoker of the command is one of the bot developers
pub fn is_bot_dev<C: CommandContext + ?Sized>(ctx: &C) -> bool {
    let user_id = ctx.user_id();
    let allowed = is_bot_dev_id(user_id);
    trace!(%user_id, allowed, "bot developer check");
    allowed
}

/// Read-only view over the compiled-in developer set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeveloperAllowlist;

impl DeveloperAllowlist {
    pub const BUILTIN: Self = Self;

    pub const fn contains(self, user_id: UserId) -> bool {
        is_bot_dev_id(user_id)
    }

    pub fn iter(self) -> impl Iterator<Item = UserId> {
        BOT_DEVELOPERS.into_iter()
    }

    pub const fn len(self) -> usize {
        BOT_DEVELOPERS.len()
    }

    pub const fn is_empty(self) -> bool {
        BOT_DEVELOPERS.is_empty()
    }
}

const _: () = {
    let mut i = 1;
    while i < BOT_DEVELOPERS.len() {
        assert!(BOT_DEVELOPERS[i - 1].get() < BOT_DEVELOPERS[i].get());
        i += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Invocation;

    #[test]
    fn test_each_developer_is_allowed() {
        for id in [
            624299014388711455u64,
            299693897859465228,
            335937477997101056,
            175279476245004288,
        ] {
            assert!(is_bot_dev(&Invocation::new(id)), "{id} should be a developer");
        }
    }

    #[test]
    fn test_zero_is_not_a_developer() {
        assert!(!is_bot_dev(&Invocation::new(0u64)));
    }

    #[test]
    fn test_neighbours_are_not_developers() {
        for dev in DeveloperAllowlist::BUILTIN.iter() {
            let id = dev.get();
            assert!(!is_bot_dev_id(UserId::new(id - 1)));
            assert!(!is_bot_dev_id(UserId::new(id + 1)));
        }
        assert!(!is_bot_dev_id(UserId::new(u64::MAX)));
        assert!(!is_bot_dev_id(UserId::new(1)));
    }

    #[test]
    fn test_premium_does_not_grant_developer() {
        let ctx = Invocation::new(42u64).with_premium(true);
        assert!(!is_bot_dev(&ctx));
    }

    #[test]
    fn test_allowlist_view() {
        let list = DeveloperAllowlist::BUILTIN;
        assert_eq!(list.len(), 4);
        assert!(!list.is_empty());
        assert!(list.contains(UserId::new(335937477997101056)));

        let mut ids: Vec<_> = list.iter().collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}

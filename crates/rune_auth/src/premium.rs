use crate::CommandContext;

/// Whether the invoker has a premium entitlement.
///
/// The host's flag is authoritative and is neither cached nor revalidated here.
#[inline]
pub fn has_premium<C: CommandContext + ?Sized>(ctx: &C) -> bool {
    ctx.has_premium()
}

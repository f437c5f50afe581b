//! Registration-time propagation over the check taxonomy.
//!
//! A hook registered for a group must fire for every check below that group.
//! Rather than walking the taxonomy on every dispatch, the set of check types
//! a registration reaches is materialized once, when the hook is added.

use checkhook_core::CheckType;

/// Every check type a registration for `target` must reach.
///
/// - [`CheckType::ALL`]: every check type in the taxonomy.
/// - anything else: `target` itself followed by all of its direct and
///   indirect descendants, in taxonomy order.
pub fn closure<C: CheckType>(target: C) -> Vec<C> {
    if target.is_universal() {
        return C::values().to_vec();
    }
    let mut reached = vec![target];
    reached.extend(
        C::values()
            .iter()
            .copied()
            .filter(|candidate| *candidate != target && candidate.is_descendant_of(target)),
    );
    reached
}

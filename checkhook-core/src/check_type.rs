//! # Check Taxonomy
//!
//! Check types form a forest: each one optionally names a parent group, and
//! groups can themselves belong to groups. The taxonomy is fixed for the
//! lifetime of the process and is normally a plain `enum`, declared with
//! `#[derive(CheckType)]` from `checkhook-macros`.

use std::{collections::HashSet, fmt::Debug, hash::Hash};

/// A node in the check taxonomy.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CheckType)]
/// enum Check {
///     #[check(all)]
///     All,
///     Moving,
///     #[check(group = Moving)]
///     MovingSurvivalFly,
/// }
///
/// assert!(Check::MovingSurvivalFly.is_descendant_of(Check::Moving));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a check taxonomy",
    label = "missing `CheckType` implementation",
    note = "Declare the taxonomy as an enum and add `#[derive(CheckType)]`."
)]
pub trait CheckType: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The universal pseudo-type standing for every check.
    const ALL: Self;

    /// Every check type in declaration order, [`CheckType::ALL`] included.
    fn values() -> &'static [Self];

    /// The parent group of this check type, if any.
    fn group(self) -> Option<Self>;

    /// The name used when this check type appears in log records.
    fn name(self) -> &'static str;

    /// Whether this is the universal pseudo-type.
    fn is_universal(self) -> bool {
        self == Self::ALL
    }

    /// Whether `ancestor` is a strict, direct or indirect, parent group of `self`.
    ///
    /// Walks the `group` chain iteratively. A malformed taxonomy containing a
    /// cycle ends the walk with `false` instead of looping forever.
    fn is_descendant_of(self, ancestor: Self) -> bool {
        let mut visited = HashSet::new();
        let mut current = self.group();
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            if !visited.insert(node) {
                return false;
            }
            current = node.group();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Check {
        All,
        Chat,
        ChatSpam,
        ChatSpamWords,
        Fight,
    }

    impl CheckType for Check {
        const ALL: Self = Check::All;

        fn values() -> &'static [Self] {
            &[
                Check::All,
                Check::Chat,
                Check::ChatSpam,
                Check::ChatSpamWords,
                Check::Fight,
            ]
        }

        fn group(self) -> Option<Self> {
            match self {
                Check::ChatSpam => Some(Check::Chat),
                Check::ChatSpamWords => Some(Check::ChatSpam),
                _ => None,
            }
        }

        fn name(self) -> &'static str {
            match self {
                Check::All => "ALL",
                Check::Chat => "CHAT",
                Check::ChatSpam => "CHAT_SPAM",
                Check::ChatSpamWords => "CHAT_SPAM_WORDS",
                Check::Fight => "FIGHT",
            }
        }
    }

    // Two nodes pointing at each other.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Cyclic {
        All,
        A,
        B,
    }

    impl CheckType for Cyclic {
        const ALL: Self = Cyclic::All;

        fn values() -> &'static [Self] {
            &[Cyclic::All, Cyclic::A, Cyclic::B]
        }

        fn group(self) -> Option<Self> {
            match self {
                Cyclic::All => None,
                Cyclic::A => Some(Cyclic::B),
                Cyclic::B => Some(Cyclic::A),
            }
        }

        fn name(self) -> &'static str {
            "cyclic"
        }
    }

    #[test]
    fn test_direct_and_indirect_descendants() {
        assert!(Check::ChatSpam.is_descendant_of(Check::Chat));
        assert!(Check::ChatSpamWords.is_descendant_of(Check::ChatSpam));
        assert!(Check::ChatSpamWords.is_descendant_of(Check::Chat));
    }

    #[test]
    fn test_not_a_descendant() {
        assert!(!Check::Chat.is_descendant_of(Check::Chat));
        assert!(!Check::Chat.is_descendant_of(Check::ChatSpam));
        assert!(!Check::Fight.is_descendant_of(Check::Chat));
        // ALL is not a group in the parent chain.
        assert!(!Check::Fight.is_descendant_of(Check::All));
    }

    #[test]
    fn test_is_universal() {
        assert!(Check::All.is_universal());
        assert!(!Check::Chat.is_universal());
    }

    #[test]
    fn test_cycle_terminates() {
        assert!(Cyclic::A.is_descendant_of(Cyclic::B));
        assert!(!Cyclic::A.is_descendant_of(Cyclic::All));
    }
}

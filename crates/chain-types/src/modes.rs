use arbitrary::Arbitrary;

/// Strictness level applied when validating a header.
///
/// Levels are ordered: each level implies every check of the levels below
/// it. A validation call always names its mode explicitly.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
pub enum HeaderValidationMode {
    /// No checks at all.
    None,

    /// Only checks that do not require the parent or chain context.
    DetachedOnly,

    /// Parent-context checks, skipping the expensive ones.
    Light,

    /// The complete ruleset.
    Full,
}

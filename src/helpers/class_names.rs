//! Class-name composition
//!
//! Joins class tokens into a single `class` attribute value. Omitted tokens
//! (`None`, empty or whitespace-only strings) are dropped, the rest keep
//! their input order and are separated by exactly one space.

/// Compose an ordered sequence of optional class tokens into a class string
///
/// # Example
/// ```
/// use widget_kit::helpers::compose;
///
/// let disabled = true;
/// let class = compose([Some("btn"), None, disabled.then_some("opacity-50")]);
/// assert_eq!(class, "btn opacity-50");
/// ```
pub fn compose<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for token in tokens.into_iter().flatten().map(str::trim) {
        if token.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Fluent builder over [`compose`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames<'a> {
    tokens: Vec<Option<&'a str>>,
}

impl<'a> ClassNames<'a> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token unconditionally
    pub fn push(mut self, token: &'a str) -> Self {
        self.tokens.push(Some(token));
        self
    }

    /// Append a token only when `cond` holds
    pub fn push_if(mut self, cond: bool, token: &'a str) -> Self {
        self.tokens.push(cond.then_some(token));
        self
    }

    /// Append an optional token
    pub fn push_opt(mut self, token: Option<&'a str>) -> Self {
        self.tokens.push(token);
        self
    }

    /// Build the class string
    pub fn build(&self) -> String {
        compose(self.tokens.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compose_empty() {
        assert_eq!(compose(std::iter::empty()), "");
        assert_eq!(compose([None, Some(""), Some("   ")]), "");
    }

    #[test]
    fn test_compose_preserves_order() {
        let class = compose([Some("base"), Some("variant"), None, Some("size"), Some("extra")]);
        assert_eq!(class, "base variant size extra");
    }

    #[test]
    fn test_compose_trims_tokens() {
        assert_eq!(compose([Some(" a "), Some("b  c")]), "a b  c");
    }

    #[test]
    fn test_builder_matches_compose() {
        let built = ClassNames::new()
            .push("base")
            .push_if(false, "disabled")
            .push_opt(Some("extra"))
            .push_opt(None)
            .build();
        assert_eq!(built, compose([Some("base"), None, Some("extra"), None]));
    }

    proptest! {
        #[test]
        fn prop_compose_is_deterministic(tokens in prop::collection::vec(prop::option::of("[a-z0-9:-]{0,8}"), 0..8)) {
            let first = compose(tokens.iter().map(|t| t.as_deref()));
            let second = compose(tokens.iter().map(|t| t.as_deref()));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_compose_has_no_stray_whitespace(tokens in prop::collection::vec(prop::option::of("[ a-z]{0,6}"), 0..8)) {
            let class = compose(tokens.iter().map(|t| t.as_deref()));
            prop_assert_eq!(class.trim(), class.as_str());
            prop_assert!(!class.contains("  ") || tokens.iter().flatten().any(|t| t.trim().contains("  ")));
        }

        #[test]
        fn prop_compose_keeps_every_non_empty_token(tokens in prop::collection::vec("[a-z]{1,6}", 0..8)) {
            let class = compose(tokens.iter().map(|t| Some(t.as_str())));
            let split: Vec<&str> = class.split(' ').filter(|s| !s.is_empty()).collect();
            prop_assert_eq!(split, tokens.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}

//! Conditional class composition.
//!
//! Templates often need "these classes, plus that one when a flag is set".
//! [`class_names`] turns a list of literal and conditional tokens into the
//! final `class` attribute value:
//!
//! 1. Conditional tokens whose flag is false are dropped.
//! 2. Every token is split on whitespace, so `"btn btn--primary"` counts as two.
//! 3. Duplicates collapse; the last occurrence decides the position.
//! 4. BEM modifiers of the same block conflict: of `badge--new` and
//!    `badge--bestseller`, only the one appearing last survives.
//!
//! The function is pure; given the same tokens it always returns the same
//! string.

/// One input to [`class_names`].
#[derive(Debug, Clone, Copy)]
pub enum ClassToken<'a> {
    /// Always included.
    Always(&'a str),
    /// Included only when the flag is true.
    When(&'a str, bool),
}

impl<'a> From<&'a str> for ClassToken<'a> {
    fn from(token: &'a str) -> Self {
        ClassToken::Always(token)
    }
}

impl<'a> From<(&'a str, bool)> for ClassToken<'a> {
    fn from((token, on): (&'a str, bool)) -> Self {
        ClassToken::When(token, on)
    }
}

/// The block a BEM modifier belongs to: `badge` for `badge--new`.
fn modifier_block(class: &str) -> Option<&str> {
    class.split_once("--").map(|(block, _)| block)
}

/// Resolve tokens into a space-separated class list.
pub fn class_names(tokens: &[ClassToken<'_>]) -> String {
    let active = tokens.iter().filter_map(|t| match *t {
        ClassToken::Always(s) => Some(s),
        ClassToken::When(s, true) => Some(s),
        ClassToken::When(_, false) => None,
    });

    let mut out: Vec<&str> = Vec::new();
    for class in active.flat_map(str::split_whitespace) {
        out.retain(|existing| *existing != class);
        if let Some(block) = modifier_block(class) {
            out.retain(|existing| modifier_block(existing) != Some(block));
        }
        out.push(class);
    }
    out.join(" ")
}

/// `class_names` for the common case of literal-or-conditional tuples.
///
/// ```
/// use mulyam::classes;
///
/// let open = true;
/// let class = classes!["drawer", ("drawer--open", open), ("drawer--closed", !open)];
/// assert_eq!(class, "drawer drawer--open");
/// ```
#[macro_export]
macro_rules! classes {
    ($($token:expr),* $(,)?) => {
        $crate::classes::class_names(&[$($crate::classes::ClassToken::from($token)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_join_in_order() {
        assert_eq!(classes!["card", "card-product"], "card card-product");
    }

    #[test]
    fn false_conditionals_are_dropped() {
        assert_eq!(classes!["nav-link", ("current", false)], "nav-link");
        assert_eq!(classes!["nav-link", ("current", true)], "nav-link current");
    }

    #[test]
    fn multi_token_strings_are_split() {
        assert_eq!(classes!["btn  btn--primary", "wide"], "btn btn--primary wide");
    }

    #[test]
    fn duplicates_keep_last_position() {
        assert_eq!(classes!["a", "b", "a"], "b a");
    }

    #[test]
    fn later_modifier_wins_for_same_block() {
        assert_eq!(
            classes!["badge badge--new", "badge--bestseller"],
            "badge badge--bestseller"
        );
    }

    #[test]
    fn modifiers_of_different_blocks_coexist() {
        assert_eq!(
            classes!["btn--primary", "badge--new"],
            "btn--primary badge--new"
        );
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(class_names(&[]), "");
        assert_eq!(classes![("hidden", false)], "");
    }

    #[test]
    fn same_input_same_output() {
        let tokens = [
            ClassToken::Always("drawer"),
            ClassToken::When("drawer--open", true),
        ];
        assert_eq!(class_names(&tokens), class_names(&tokens));
    }
}

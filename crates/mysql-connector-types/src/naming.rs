//! Identifier normalization between database names and client (GraphQL)
//! names.
//!
//! The two functions here are deliberately simple pattern rewrites, not
//! linguistic tools. Their exact behavior is part of the generated contract,
//! so changing them changes every generated type and field name.

/// Converts a database identifier into a PascalCase type name: splits on
/// underscores and capitalizes the first letter of every segment.
pub fn to_type_name(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Strips exactly one trailing `s` from an identifier longer than one
/// character.
///
/// This is a heuristic, not a singularizer: words that end in `s` while
/// already singular come out wrong (`status` becomes `statu`).
pub fn to_singular(identifier: &str) -> &str {
    match identifier.strip_suffix('s') {
        Some(stripped) if identifier.len() > 1 => stripped,
        _ => identifier,
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{to_singular, to_type_name};

    #[test]
    fn type_name_from_snake_case() {
        assert_eq!("UserAccounts", to_type_name("user_accounts"));
        assert_eq!("CreatedAt", to_type_name("created_at"));
        assert_eq!("Users", to_type_name("users"));
    }

    #[test]
    fn type_name_ignores_leading_and_repeated_separators() {
        assert_eq!("Private", to_type_name("_private"));
        assert_eq!("AB", to_type_name("a__b"));
    }

    #[test]
    fn type_name_is_idempotent_on_pascal_case() {
        assert_eq!("UserAccounts", to_type_name("UserAccounts"));
        assert_eq!("Users", to_type_name(&to_type_name("users")));
    }

    #[test]
    fn singular_strips_one_trailing_s() {
        assert_eq!("user", to_singular("users"));
        assert_eq!("addres", to_singular("address"));
    }

    #[test]
    fn singular_leaves_short_and_non_plural_names_alone() {
        assert_eq!("s", to_singular("s"));
        assert_eq!("user", to_singular("user"));
        assert_eq!("", to_singular(""));
    }

    // Documented limitation: already-singular words ending in `s` are
    // mangled. The contract generator inherits this.
    #[test]
    fn singular_mangles_singular_words_ending_in_s() {
        assert_eq!("statu", to_singular("status"));
    }
}

//! Slug helpers shared by heading anchors and breadcrumbs.

/// Convert heading text to an anchor slug.
///
/// Lowercases the text and collapses every whitespace run into a single
/// `-`. No other characters are removed, so the result matches the ids the
/// rendering layer assigns to heading elements.
///
/// # Examples
///
/// ```
/// use academy_markup::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Coût   du capital"), "coût-du-capital");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

/// Uppercase the first character of a string.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a URL slug back into a display title.
///
/// Hyphens become spaces and every word is capitalized.
///
/// # Examples
///
/// ```
/// use academy_markup::sanitize_slug;
///
/// assert_eq!(sanitize_slug("manar-conseil"), "Manar Conseil");
/// ```
#[must_use]
pub fn sanitize_slug(text: &str) -> String {
    text.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("EBITDA"), "ebitda");
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Multiple \t  Spaces"), "multiple-spaces");
    }

    #[test]
    fn test_slugify_keeps_punctuation() {
        assert_eq!(slugify("Comment ça marche ?"), "comment-ça-marche-?");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("nestle"), "Nestle");
        assert_eq!(capitalize("émission"), "Émission");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_sanitize_slug_single_word() {
        assert_eq!(sanitize_slug("dooc"), "Dooc");
    }

    #[test]
    fn test_sanitize_slug_hyphenated() {
        assert_eq!(sanitize_slug("fintech-academy"), "Fintech Academy");
    }
}

//! Pluralization for category labels.

/// Turns a singular label into its plural form.
pub trait Pluralize {
    fn pluralize(&self, word: &str) -> String;
}

/// English rules, enough for the taxonomy's vocabulary. Only the last word
/// of a multi-word label changes ("Type Alias" → "Type Aliases").
pub struct EnglishPluralizer;

impl Pluralize for EnglishPluralizer {
    fn pluralize(&self, word: &str) -> String {
        let lower = word.to_ascii_lowercase();
        if lower.is_empty() {
            return String::new();
        }
        if ["s", "x", "z", "ch", "sh"].iter().any(|end| lower.ends_with(end)) {
            return format!("{}es", word);
        }
        let mut chars = lower.chars().rev();
        if let (Some('y'), Some(before)) = (chars.next(), chars.next()) {
            if !"aeiou".contains(before) {
                return format!("{}ies", &word[..word.len() - 1]);
            }
        }
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Class", "Classes")]
    #[case("Type Alias", "Type Aliases")]
    #[case("Property", "Properties")]
    #[case("Enumeration", "Enumerations")]
    #[case("didSet Observer", "didSet Observers")]
    #[case("Key", "Keys")]
    #[case("Box", "Boxes")]
    #[case("Guide", "Guides")]
    fn english_plurals(#[case] word: &str, #[case] plural: &str) {
        assert_eq!(EnglishPluralizer.pluralize(word), plural);
    }
}

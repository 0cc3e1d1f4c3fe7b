/// Turns an API slug like `"special-attack"` into `"Special Attack"`.
pub fn humanize(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_joins_words() {
        assert_eq!(humanize("special-attack"), "Special Attack");
        assert_eq!(humanize("mr-mime"), "Mr Mime");
        assert_eq!(humanize("pikachu"), "Pikachu");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn capitalize_handles_unicode() {
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }
}

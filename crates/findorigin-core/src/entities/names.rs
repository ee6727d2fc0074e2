//! Proper-noun candidates from capitalized word runs

use super::patterns::unique;
use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Function words and pronouns that never start a name
    static ref STOP_WORDS: HashSet<&'static str> = [
        "и", "в", "на", "с", "по", "для", "из", "к", "о", "от", "до", "при", "за",
        "это", "что", "как", "так", "или", "но", "а", "если", "когда", "где",
        "он", "она", "оно", "они", "мы", "вы", "я", "его", "её", "их",
        "год", "лет", "раз", "день", "время", "человек", "людей",
    ]
    .into_iter()
    .collect();
}

/// Drop everything except letters, digits and hyphens
fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_name_start(word: &str) -> bool {
    word.chars().count() >= 2
        && starts_uppercase(word)
        && !STOP_WORDS.contains(word.to_lowercase().as_str())
}

/// Scan whitespace tokens left to right. A qualifying token opens a name that
/// greedily absorbs every following capitalized token; continuation tokens
/// only need the capital letter, not the length or stop-word checks.
pub fn extract_names(text: &str) -> Vec<String> {
    let words: Vec<String> = text.split_whitespace().map(clean_token).collect();
    let mut names = Vec::new();
    let mut i = 0;

    while i < words.len() {
        if !is_name_start(&words[i]) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < words.len() && starts_uppercase(&words[j]) {
            j += 1;
        }
        names.push(words[i..j].join(" "));
        i = j;
    }

    unique(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_multi_word_names() {
        let names = extract_names("Вчера Владимир Путин встретился с Илоном Маском в Москве.");
        assert_eq!(names, vec!["Вчера Владимир Путин", "Илоном Маском", "Москве"]);
    }

    #[test]
    fn test_stop_word_cannot_start_but_can_continue() {
        let names = extract_names("Он сказал. Компания Она Есть");
        assert_eq!(names, vec!["Компания Она Есть"]);
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let names = extract_names("(«Газпром»), и \"Роснефть\".");
        assert_eq!(names, vec!["Газпром", "Роснефть"]);
    }

    #[test]
    fn test_short_tokens_do_not_start_names() {
        assert!(extract_names("X и Y").is_empty());
        assert_eq!(extract_names("Компания X заключила"), vec!["Компания X"]);
    }

    #[test]
    fn test_latin_and_hyphenated() {
        let names = extract_names("visited New York and Rostov-on-Don");
        assert_eq!(names, vec!["New York", "Rostov-on-Don"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let names = extract_names("Сбербанк вырос. Сбербанк упал.");
        assert_eq!(names, vec!["Сбербанк"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_names("").is_empty());
    }
}

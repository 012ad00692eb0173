//! Spoken-text helpers: list joining, ordinal words, TTS-friendly team
//! numbers, and final whitespace normalization.

use rand::rngs::StdRng;
use rand::Rng;

/// Ordinal words for the seeds a bracket can actually hold.
const ORDINAL_WORDS: &[&str] = &["zeroth", "first", "second", "third", "fourth"];

/// English ordinal word for small numbers; "<n>th" above four.
///
/// Deliberately does not special-case 1st/2nd/3rd or 11th–13th — anything
/// past "fourth" is read as "5th", "12th", and so on.
pub fn ordinal(n: u32) -> String {
    match ORDINAL_WORDS.get(n as usize) {
        Some(word) => (*word).to_string(),
        None => format!("{}th", n),
    }
}

/// Join items into natural prose: one item verbatim, otherwise
/// comma-separated with " and " before the last item and no serial comma.
pub fn word_join<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{} and {}", init.join(", "), last.as_ref())
        }
    }
}

/// Render a team number the way a commentator would read it to a TTS
/// engine.
///
/// Four-digit numbers may be grouped as two two-digit chunks and
/// five-digit numbers as one two-digit chunk plus single digits; otherwise
/// every digit is read individually, with zeros sometimes read as the
/// letter O. Grouping is skipped when the second chunk would start with a
/// zero.
pub fn spoken_number(number: u32, rng: &mut StdRng) -> String {
    let digits = number.to_string();

    if digits.len() == 4 && digits.as_bytes()[2] != b'0' && rng.gen_bool(0.5) {
        return format!("{} {}", &digits[..2], &digits[2..]);
    }
    if digits.len() == 5 && rng.gen_bool(0.5) {
        let tail = spell_digits(&digits[2..], rng);
        return format!("{} {}", &digits[..2], tail);
    }
    spell_digits(&digits, rng)
}

fn spell_digits(digits: &str, rng: &mut StdRng) -> String {
    let spoken: Vec<String> = digits
        .chars()
        .map(|d| {
            if d == '0' && rng.gen_bool(0.5) {
                "O".to_string()
            } else {
                d.to_string()
            }
        })
        .collect();
    spoken.join(" ")
}

/// Collapse every run of whitespace, line breaks included, to a single
/// space. The assembler's only transformation.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn ordinal_words_then_suffix() {
        assert_eq!(ordinal(0), "zeroth");
        assert_eq!(ordinal(1), "first");
        assert_eq!(ordinal(2), "second");
        assert_eq!(ordinal(3), "third");
        assert_eq!(ordinal(4), "fourth");
        assert_eq!(ordinal(5), "5th");
        assert_eq!(ordinal(12), "12th");
    }

    #[test]
    fn word_join_single_item_verbatim() {
        assert_eq!(word_join(&["alpha"]), "alpha");
        assert_eq!(word_join::<&str>(&[]), "");
    }

    #[test]
    fn word_join_comma_and_structure() {
        assert_eq!(word_join(&["a", "b"]), "a and b");
        assert_eq!(word_join(&["a", "b", "c"]), "a, b and c");

        // N items: exactly N-2 commas and one " and ".
        let items = ["w", "x", "y", "z"];
        let joined = word_join(&items);
        assert_eq!(joined.matches(", ").count(), items.len() - 2);
        assert_eq!(joined.matches(" and ").count(), 1);
        assert!(joined.ends_with(" and z"));
    }

    #[test]
    fn spoken_number_tokens_are_digits_or_chunks() {
        let mut rng = StdRng::seed_from_u64(3);
        for number in [7u32, 302, 4050, 16072, 12345] {
            for _ in 0..20 {
                let spoken = spoken_number(number, &mut rng);
                for token in spoken.split(' ') {
                    let ok = token == "O"
                        || (!token.is_empty()
                            && token.len() <= 2
                            && token.chars().all(|c| c.is_ascii_digit()));
                    assert!(ok, "unexpected token {:?} in {:?}", token, spoken);
                }
            }
        }
    }

    #[test]
    fn spoken_number_round_trips_digits() {
        let mut rng = StdRng::seed_from_u64(11);
        for number in [9u32, 88, 504, 9999, 20001] {
            for _ in 0..20 {
                let spoken = spoken_number(number, &mut rng);
                let rebuilt: String = spoken
                    .split(' ')
                    .map(|t| if t == "O" { "0".to_string() } else { t.to_string() })
                    .collect();
                assert_eq!(rebuilt, number.to_string());
            }
        }
    }

    #[test]
    fn spoken_number_never_chunks_on_mid_zero() {
        // 4-digit numbers whose third digit is zero would produce a chunk
        // like "07"; those always fall back to digit-by-digit.
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let spoken = spoken_number(5107, &mut rng);
            assert!(spoken.split(' ').count() >= 4, "chunked: {:?}", spoken);
        }
    }

    #[test]
    fn spoken_number_can_group_four_digits() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grouped = false;
        for _ in 0..50 {
            if spoken_number(1234, &mut rng) == "12 34" {
                grouped = true;
                break;
            }
        }
        assert!(grouped, "expected at least one grouped reading");
    }

    #[test]
    fn normalize_whitespace_collapses_runs() {
        assert_eq!(
            normalize_whitespace("a  b\n\tc \n d"),
            "a b c d"
        );
        assert_eq!(normalize_whitespace("  lead and trail  "), "lead and trail");
        assert_eq!(normalize_whitespace(""), "");
    }
}

// 🔤 Letter values - Pythagorean alphabet
// A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8

/// Vowels used for the soul number. Y counts as a vowel.
pub const VOWELS: [char; 6] = ['A', 'E', 'I', 'O', 'U', 'Y'];

/// Value of a single letter: `A..Z` cycle through `1..9`.
///
/// Anything outside `A`–`Z` is worth 0 and contributes nothing to sums.
pub fn letter_value(ch: char) -> u32 {
    if ch.is_ascii_uppercase() {
        (ch as u32 - 'A' as u32) % 9 + 1
    } else {
        0
    }
}

pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Letter that counts as a consonant (an `A`–`Z` letter that is not a vowel).
pub fn is_consonant(ch: char) -> bool {
    ch.is_ascii_uppercase() && !is_vowel(ch)
}

/// Sum of letter values over the letters selected by `filter`.
pub fn sum_letters<F>(name: &str, filter: F) -> u32
where
    F: Fn(char) -> bool,
{
    name.chars()
        .filter(|c| *c != ' ' && filter(*c))
        .map(letter_value)
        .sum()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values_cycle() {
        assert_eq!(letter_value('A'), 1);
        assert_eq!(letter_value('I'), 9);
        assert_eq!(letter_value('J'), 1);
        assert_eq!(letter_value('R'), 9);
        assert_eq!(letter_value('S'), 1);
        assert_eq!(letter_value('Z'), 8);
    }

    #[test]
    fn test_non_letters_are_zero() {
        assert_eq!(letter_value(' '), 0);
        assert_eq!(letter_value('-'), 0);
        assert_eq!(letter_value('a'), 0);
        assert_eq!(letter_value('7'), 0);
    }

    #[test]
    fn test_vowels_and_consonants() {
        assert!(is_vowel('Y'));
        assert!(!is_vowel('N'));
        assert!(is_consonant('N'));
        assert!(!is_consonant('A'));
        assert!(!is_consonant(' '));
    }

    #[test]
    fn test_sum_letters_skips_spaces() {
        assert_eq!(sum_letters("AN", |_| true), 6);
        assert_eq!(sum_letters("A N", |_| true), 6);
        assert_eq!(sum_letters("VAN AN", is_vowel), 2);
    }
}

// 🧹 Name normalization - Vietnamese diacritics → plain Latin
//
// "Nguyễn  Văn An " → "NGUYEN VAN AN"

/// Accented forms absorbed by each base letter.
const ACCENTS: &[(char, &str)] = &[
    ('a', "áàạảãâấầậẩẫăắằặẳẵ"),
    ('e', "éèẹẻẽêếềệểễ"),
    ('i', "íìịỉĩ"),
    ('o', "óòọỏõôốồộổỗơớờợởỡ"),
    ('u', "úùụủũưứừựửữ"),
    ('y', "ýỳỵỷỹ"),
    ('d', "đ"),
    ('A', "ÁÀẠẢÃÂẤẦẬẨẪĂẮẰẶẲẴ"),
    ('E', "ÉÈẸẺẼÊẾỀỆỂỄ"),
    ('I', "ÍÌỊỈĨ"),
    ('O', "ÓÒỌỎÕÔỐỒỘỔỖƠỚỜỢỞỠ"),
    ('U', "ÚÙỤỦŨƯỨỪỰỬỮ"),
    ('Y', "ÝỲỴỶỸ"),
    ('D', "Đ"),
];

/// Replace a Vietnamese accented letter with its base letter.
pub fn strip_accent(ch: char) -> char {
    ACCENTS
        .iter()
        .find(|(_, variants)| variants.contains(ch))
        .map(|(base, _)| *base)
        .unwrap_or(ch)
}

/// Normalize a personal name for numerology.
///
/// Strips diacritics, upper-cases, drops anything that is not `A`–`Z` or a
/// space, collapses runs of spaces and trims the ends. Output only ever
/// contains `A`–`Z` and single space separators, and normalizing twice gives
/// the same string.
pub fn normalize(name: &str) -> String {
    let upper: Vec<char> = name
        .chars()
        .map(strip_accent)
        .flat_map(char::to_uppercase)
        .filter_map(|c| {
            if c.is_whitespace() {
                Some(' ')
            } else if c.is_ascii_uppercase() {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    // Keep a space only when the next character is not another space
    let mut collapsed = String::with_capacity(upper.len());
    for (i, &c) in upper.iter().enumerate() {
        if c != ' ' || upper.get(i + 1) != Some(&' ') {
            collapsed.push(c);
        }
    }

    collapsed.trim().to_string()
}

/// Words of an already normalized name.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|w| !w.is_empty())
}

/// First letter of the first word and first letter of the last word.
///
/// A single-word name yields its first letter twice.
pub fn first_and_last_initials(normalized: &str) -> Option<(char, char)> {
    let first = words(normalized).next()?.chars().next()?;
    let last = words(normalized).last()?.chars().next()?;
    Some((first, last))
}

// ============================================================================
// TESTS
// ============================================================================

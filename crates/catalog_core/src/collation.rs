//! Locale-aware string ordering for table sorting.
//!
//! Comparison is layered the way UCA collations are: base letters first
//! (case- and accent-insensitive), then accents, then case, then code points so
//! that distinct strings never compare equal.

use std::cmp::Ordering;

pub fn locale_compare(left: &str, right: &str) -> Ordering {
    primary_weights(left)
        .cmp(primary_weights(right))
        .then_with(|| accent_weights(left).cmp(accent_weights(right)))
        .then_with(|| case_weights(left).cmp(case_weights(right)))
        .then_with(|| left.cmp(right))
}

fn primary_weights(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(base_letter)
}

fn accent_weights(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(|ch| base_letter(ch) != simple_lowercase(ch))
}

// Lower case sorts before upper case at this level.
fn case_weights(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

fn simple_lowercase(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Lowercase base letter with Latin-1 Supplement and Latin Extended-A
/// diacritics removed. Other characters are only lowercased.
fn base_letter(ch: char) -> char {
    match ch {
        '\u{00C0}'..='\u{00C6}' | '\u{00E0}'..='\u{00E6}' | '\u{0100}'..='\u{0105}' => 'a',
        '\u{00C7}' | '\u{00E7}' | '\u{0106}'..='\u{010D}' => 'c',
        '\u{010E}'..='\u{0111}' => 'd',
        '\u{00C8}'..='\u{00CB}' | '\u{00E8}'..='\u{00EB}' | '\u{0112}'..='\u{011B}' => 'e',
        '\u{011C}'..='\u{0123}' => 'g',
        '\u{0124}'..='\u{0127}' => 'h',
        '\u{00CC}'..='\u{00CF}' | '\u{00EC}'..='\u{00EF}' | '\u{0128}'..='\u{0131}' => 'i',
        '\u{0134}'..='\u{0135}' => 'j',
        '\u{0136}'..='\u{0137}' => 'k',
        '\u{0139}'..='\u{0142}' => 'l',
        '\u{00D1}' | '\u{00F1}' | '\u{0143}'..='\u{0148}' => 'n',
        '\u{00D2}'..='\u{00D6}'
        | '\u{00D8}'
        | '\u{00F2}'..='\u{00F6}'
        | '\u{00F8}'
        | '\u{014C}'..='\u{0151}' => 'o',
        '\u{0154}'..='\u{0159}' => 'r',
        '\u{015A}'..='\u{0161}' => 's',
        '\u{0162}'..='\u{0167}' => 't',
        '\u{00D9}'..='\u{00DC}' | '\u{00F9}'..='\u{00FC}' | '\u{0168}'..='\u{0173}' => 'u',
        '\u{0174}'..='\u{0175}' => 'w',
        '\u{00DD}' | '\u{00FD}' | '\u{00FF}' | '\u{0176}'..='\u{0178}' => 'y',
        '\u{0179}'..='\u{017E}' => 'z',
        _ => simple_lowercase(ch),
    }
}

// 🔢 Derived numbers - one function per report field
//
// Every function takes an already normalized name (see `normalize`) and/or
// a BirthDate. All of them are total: no errors, no panics.

use crate::alphabet::{is_consonant, is_vowel, letter_value, sum_letters};
use crate::birth_date::BirthDate;
use crate::normalize::first_and_last_initials;
use crate::reduce::{abs_diff, reduce, reduce_default, split_digits, ReduceMode};

// ============================================================================
// CORE NUMBERS
// ============================================================================

/// Life path: `reduce(day + month + year)`.
pub fn walks_of_life(date: &BirthDate) -> u32 {
    reduce_default(date.day.saturating_add(date.month).saturating_add(date.year), 0)
}

/// Sum of every letter.
pub fn mission(name: &str) -> u32 {
    reduce_default(sum_letters(name, |_| true), 0)
}

/// Sum of the vowels (A E I O U Y).
pub fn soul(name: &str) -> u32 {
    reduce_default(sum_letters(name, is_vowel), 0)
}

/// Sum of the consonants.
pub fn personality(name: &str) -> u32 {
    reduce_default(sum_letters(name, is_consonant), 0)
}

/// Same summation as `mission`, reported as its own field.
pub fn passion(name: &str) -> u32 {
    reduce_default(sum_letters(name, |_| true), 0)
}

/// Distance between the digit-reduced life path and mission.
pub fn connect(walks_of_life: u32, mission: u32) -> u32 {
    let (w1, w2) = split_digits(walks_of_life);
    let (m1, m2) = split_digits(mission);
    abs_diff(reduce_default(w1, w2), reduce_default(m1, m2))
}

pub fn mature(walks_of_life: u32, mission: u32) -> u32 {
    reduce(walks_of_life, mission, ReduceMode::Mature)
}

fn initials_value(name: &str) -> u32 {
    first_and_last_initials(name)
        .map(|(first, last)| letter_value(first) + letter_value(last))
        .unwrap_or(0)
}

/// First letter of the first word plus first letter of the last word.
pub fn balance(name: &str) -> u32 {
    reduce_default(initials_value(name), 0)
}

/// Same initials as `balance`, plus the birth day.
pub fn rational_thinking(name: &str, day: u32) -> u32 {
    reduce_default(initials_value(name).saturating_add(day), 0)
}

// ============================================================================
// MISSING NUMBERS
// ============================================================================

/// Digits 1..=9 that no letter of the name maps to, ascending.
pub fn missing_numbers(name: &str) -> Vec<u32> {
    let mut present = [false; 10];
    for value in name.chars().map(letter_value) {
        present[value as usize] = true;
    }
    (1..=9).filter(|d| !present[*d as usize]).collect()
}

pub fn subconscious_power(missing: &[u32]) -> u32 {
    9 - missing.len() as u32
}

// ============================================================================
// WAYS & CHALLENGES
// ============================================================================

pub fn ways(date: &BirthDate) -> [u32; 4] {
    let way1 = reduce_default(date.month, date.day);
    let way2 = reduce_default(date.year, date.day);
    let way3 = reduce_default(way1, way2);
    let way4 = reduce(date.month, date.year, ReduceMode::FinalWay);
    [way1, way2, way3, way4]
}

/// Plain differences, never reduced.
pub fn challenges(date: &BirthDate) -> [u32; 4] {
    let c1 = abs_diff(date.month, date.day);
    let c2 = abs_diff(date.year, date.day);
    let c3 = abs_diff(c1, c2);
    let c4 = abs_diff(date.month, date.year);
    [c1, c2, c3, c4]
}

pub fn date_of_birth(day: u32) -> u32 {
    reduce_default(day, 0)
}

// ============================================================================
// PERSONAL CYCLES
// ============================================================================

/// Personal year for `current_year + offset`.
pub fn year_individual(date: &BirthDate, current_year: u32, offset: u32) -> u32 {
    reduce_default(current_year.saturating_add(offset), date.day.saturating_add(date.month))
}

/// Personal months for the current month and the three following.
///
/// Months past December wrap to the next year and use that year's
/// personal year.
pub fn month_individuals(date: &BirthDate, current_year: u32, current_month: u32) -> [u32; 4] {
    let this_year = year_individual(date, current_year, 0);
    let next_year = year_individual(date, current_year, 1);

    let mut months = [reduce_default(this_year, current_month), 0, 0, 0];
    for k in 1..=3u32 {
        let wrapped = (current_month + k - 1) % 12 + 1;
        let base = if current_month + k > 12 { next_year } else { this_year };
        months[k as usize] = reduce_default(base, wrapped);
    }
    months
}

pub fn link_personality_and_soul(personality: u32, soul: u32) -> u32 {
    abs_diff(personality, soul)
}

/// Render sub-values as `" a b c d"` (leading space kept).
pub fn format_spaced(values: &[u32]) -> String {
    values.iter().map(|v| format!(" {}", v)).collect()
}

/// Render missing numbers as `"2 3 7"`.
pub fn format_missing(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// TESTS
// ============================================================================

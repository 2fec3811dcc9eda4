//! Derives the displayed list from the authoritative collection.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

use crate::model::{Todo, ViewState};

/// Filters `todos` by a case-insensitive substring match on the title, then
/// optionally orders the result by title. The input is never reordered.
pub fn project<'a>(todos: &'a [Todo], search_term: &str, sort_enabled: bool) -> Vec<&'a Todo> {
    let mut visible: Vec<&Todo> = if search_term.is_empty() {
        todos.iter().collect()
    } else {
        let needle = search_term.to_lowercase();
        todos
            .iter()
            .filter(|todo| todo.title.to_lowercase().contains(&needle))
            .collect()
    };

    if sort_enabled {
        visible.sort_by(|a, b| locale_cmp(&a.title, &b.title));
    }

    visible
}

pub fn project_view<'a>(todos: &'a [Todo], view: &ViewState) -> Vec<&'a Todo> {
    project(todos, &view.search_term, view.sort_enabled)
}

/// Locale-style title comparison.
///
/// Letters compare by base form first, so `"apple" < "Banana" < "cherry"`;
/// accents break ties next, then case (lowercase first), then code points.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

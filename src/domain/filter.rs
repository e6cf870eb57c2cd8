//! Filter criteria shared by every record page.
//!
//! A page's visible list is the conjunction of a free-text query over the
//! record's searchable fields and zero or more categorical selectors. A
//! selector left on `All` admits every record.

use std::fmt;

use super::error::FilterError;

/// Label used for the "no restriction" selector value.
pub const ALL_LABEL: &str = "All";

/// A categorical selector over one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    /// Exact comparison against the record's field.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Selector::All => None,
            Selector::Only(value) => Some(value),
        }
    }
}

impl<T: fmt::Display> Selector<T> {
    pub fn label(&self) -> String {
        match self {
            Selector::All => ALL_LABEL.to_string(),
            Selector::Only(value) => value.to_string(),
        }
    }
}

/// Step a selector through `All, options[0], options[1], ...`, wrapping.
pub fn cycle<T: Clone + PartialEq>(selector: &mut Selector<T>, options: &[T], forward: bool) {
    let len = options.len() + 1;
    let pos = match selector {
        Selector::All => 0,
        Selector::Only(current) => options
            .iter()
            .position(|option| option == current)
            .map(|idx| idx + 1)
            .unwrap_or(0),
    };
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    *selector = match next {
        0 => Selector::All,
        n => Selector::Only(options[n - 1].clone()),
    };
}

/// Resolve typed input (`approved`, `office_supplies`, `in-progress`) against
/// the option list of a selector.
pub fn resolve<T: Clone + fmt::Display>(
    key: &str,
    input: &str,
    options: &[T],
) -> Result<Selector<T>, FilterError> {
    let wanted = normalize_choice(input);
    if wanted == normalize_choice(ALL_LABEL) {
        return Ok(Selector::All);
    }
    options
        .iter()
        .find(|option| normalize_choice(&option.to_string()) == wanted)
        .cloned()
        .map(Selector::Only)
        .ok_or_else(|| FilterError::UnknownValue {
            key: key.to_string(),
            value: input.to_string(),
        })
}

fn normalize_choice(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|ch| match ch {
            '_' | '-' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Case-insensitive substring match of `query` against any of `fields`.
///
/// The query is used as typed: no trimming, no tokenizing. An empty query
/// matches every record.
pub fn query_matches<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filter criteria for one record type.
///
/// `Options` carries the selectable values for string-valued selectors
/// (categories, departments, positions); it is built once from the seed.
pub trait RecordFilter<R>: Default {
    type Options;

    /// Selector slot names, in filter-bar order.
    const SLOTS: &'static [&'static str];

    fn options(records: &[R]) -> Self::Options;

    fn matches(&self, record: &R) -> bool;

    fn query(&self) -> &str;

    fn query_mut(&mut self) -> &mut String;

    fn slot_label(&self, slot: usize) -> String;

    fn cycle_slot(&mut self, slot: usize, forward: bool, options: &Self::Options);

    fn set_slot(
        &mut self,
        key: &str,
        value: &str,
        options: &Self::Options,
    ) -> Result<(), FilterError>;

    fn is_default(&self) -> bool {
        self.query().is_empty()
            && (0..Self::SLOTS.len()).all(|slot| self.slot_label(slot) == ALL_LABEL)
    }
}

/// Records admitted by `filter`, in seed order.
pub fn apply<'a, R, F: RecordFilter<R>>(filter: &F, records: &'a [R]) -> Vec<&'a R> {
    records.iter().filter(|record| filter.matches(record)).collect()
}

/// Positions of the records admitted by `filter`.
pub fn apply_indices<R, F: RecordFilter<R>>(filter: &F, records: &[R]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(record))
        .map(|(idx, _)| idx)
        .collect()
}

/// Distinct values in first-seen order.
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out
}

/// Split `status:approved category:office_supplies` into key/value pairs.
pub fn parse_assignments(input: &str) -> Result<Vec<(&str, &str)>, FilterError> {
    let pairs = input
        .split_whitespace()
        .map(|token| match token.split_once(':') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => Ok((key, value)),
            _ => Err(FilterError::Malformed(token.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if pairs.is_empty() {
        return Err(FilterError::Malformed(input.to_string()));
    }
    Ok(pairs)
}

/// Set every pair on a copy of `filter`; the copy replaces `filter` only if
/// all of them resolve.
pub fn assign_all<R, F: RecordFilter<R> + Clone>(
    filter: &mut F,
    input: &str,
    options: &F::Options,
) -> Result<(), FilterError> {
    let mut next = filter.clone();
    for (key, value) in parse_assignments(input)? {
        next.set_slot(key, value, options)?;
    }
    *filter = next;
    Ok(())
}

/// Match a slot key typed on the command line (`status`, `dept`, ...).
pub(crate) fn slot_key_matches(key: &str, names: &[&str]) -> bool {
    let key = key.trim().to_ascii_lowercase();
    names.iter().any(|name| *name == key)
}

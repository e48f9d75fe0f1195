//! Best-match lookup of a free-text query over food records.
//!
//! Exact (case-insensitive) name hits win outright. Otherwise every record
//! whose name or alias contains the query is scored:
//! - +100 name equals the query
//! - +50 name starts with the query
//! - +max(0, 20 - name length) specificity bonus for short names
//! - per alias: +80 when equal to the query, else +30 when it contains it
//!
//! Highest score wins; ties go to the record that comes first in the input.

use super::repo_types::FoodRecord;

const NAME_EQUALS_BONUS: i64 = 100;
const NAME_PREFIX_BONUS: i64 = 50;
const SHORT_NAME_BASE: i64 = 20;
const ALIAS_EQUALS_BONUS: i64 = 80;
const ALIAS_CONTAINS_BONUS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchMatch<'a> {
    pub record: &'a FoodRecord,
    pub score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome<'a> {
    Found(SearchMatch<'a>),
    NotFound,
}

impl<'a> SearchOutcome<'a> {
    pub fn record(&self) -> Option<&'a FoodRecord> {
        match self {
            SearchOutcome::Found(m) => Some(m.record),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Score of `record` for an already lower-cased query.
pub fn score_record(record: &FoodRecord, query: &str) -> i64 {
    let name = record.name.to_lowercase();
    let mut score = 0;

    if name == query {
        score += NAME_EQUALS_BONUS;
    }
    if name.starts_with(query) {
        score += NAME_PREFIX_BONUS;
    }
    let name_len = record.name.chars().count() as i64;
    score += (SHORT_NAME_BASE - name_len).max(0);

    for alias in &record.alternate_names {
        let alias = alias.to_lowercase();
        if alias == query {
            score += ALIAS_EQUALS_BONUS;
        } else if alias.contains(query) {
            score += ALIAS_CONTAINS_BONUS;
        }
    }
    score
}

fn is_candidate(record: &FoodRecord, query: &str) -> bool {
    record.name.to_lowercase().contains(query)
        || record
            .alternate_names
            .iter()
            .any(|alias| alias.to_lowercase().contains(query))
}

/// Substring candidates ordered by score, best first, input order kept on ties.
pub fn rank_candidates<'a>(query: &str, records: &'a [FoodRecord]) -> Vec<SearchMatch<'a>> {
    let query = query.to_lowercase();
    let mut matches: Vec<SearchMatch<'a>> = records
        .iter()
        .filter(|r| is_candidate(r, &query))
        .map(|record| SearchMatch {
            record,
            score: score_record(record, &query),
        })
        .collect();
    // sort_by is stable
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

pub fn find_best_match<'a>(query: &str, records: &'a [FoodRecord]) -> SearchOutcome<'a> {
    let lowered = query.to_lowercase();

    if let Some(record) = records.iter().find(|r| r.name.to_lowercase() == lowered) {
        return SearchOutcome::Found(SearchMatch {
            record,
            score: score_record(record, &lowered),
        });
    }

    match rank_candidates(query, records).into_iter().next() {
        Some(best) => SearchOutcome::Found(best),
        None => SearchOutcome::NotFound,
    }
}

//! Vote aggregation.
//!
//! Everything here is a pure function of its inputs: results are recomputed
//! from freshly read rows on every request.

use crate::core::models::option::{Candidate, Destination, RidingDate};
use crate::core::models::tally::{Category, Counted, TallyRow, TripResults};
use crate::core::models::vote::Vote;
use itertools::Itertools;
use std::collections::HashMap;
use uuid::Uuid;

/// Ranks the options of one category by the votes that reference them.
///
/// Votes with a null or unknown option id are skipped. Options nobody voted
/// for produce no row. Rows with equal counts keep the order in which their
/// first vote was seen.
pub fn compute_tally<C>(votes: &[Vote], options: &[C], category: Category) -> Vec<TallyRow>
where
    C: Candidate,
{
    let known: HashMap<Uuid, &C> = options.iter().map(|o| (o.id(), o)).collect();
    let mut slots: HashMap<Uuid, usize> = HashMap::new();
    let mut rows: Vec<TallyRow> = Vec::new();
    for vote in votes {
        let Some(id) = category.pick(vote) else {
            continue;
        };
        let Some(option) = known.get(&id) else {
            continue;
        };
        let idx = *slots.entry(id).or_insert_with(|| {
            rows.push(TallyRow::new(id, option.label()));
            rows.len() - 1
        });
        rows[idx].count += 1;
        rows[idx].voters.push(vote.voter_name.clone());
    }
    // stable: ties stay in first-seen order
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    let total: usize = rows.iter().map(|r| r.count).sum();
    for row in rows.iter_mut() {
        row.percentage = percentage(row.count, total);
    }
    if let Some(first) = rows.first_mut() {
        first.is_leading = total > 0 && first.count > 0;
    }
    rows
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Distinct voter names, compared exactly ("Bob" and "bob " differ).
pub fn count_distinct_participants(votes: &[Vote]) -> usize {
    votes.iter().map(|v| v.voter_name.as_str()).unique().count()
}

/// Vote count of every option, zero included, in option order.
pub fn count_by_option<C>(votes: &[Vote], options: Vec<C>, category: Category) -> Vec<Counted<C>>
where
    C: Candidate,
{
    let counts = votes.iter().filter_map(|v| category.pick(v)).counts();
    options
        .into_iter()
        .map(|option| {
            let vote_count = counts.get(&option.id()).copied().unwrap_or(0);
            Counted { option, vote_count }
        })
        .collect()
}

pub fn summarize(votes: &[Vote], destinations: &[Destination], dates: &[RidingDate]) -> TripResults {
    TripResults {
        destinations: compute_tally(votes, destinations, Category::Destination),
        dates: compute_tally(votes, dates, Category::Date),
        participant_count: count_distinct_participants(votes),
        total_votes: votes.len(),
    }
}

use election_ages::config::{LoaderConfig, MissingPolicy};
use election_ages::elections::PLACEHOLDER_NAME;
use election_ages::error::DataLoadError;
use election_ages::evaluator::ElectionEvaluator;
use election_ages::loader::{ElectionTable, Row};
use election_ages::output::{render_details, write_derived};
use election_ages::stats::SummaryStats;
use election_ages::utility::round_half_even;
use proptest::prelude::*;
use std::cmp::Ordering;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/presidents_election_full.csv"
);
const PARTIAL_FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/partial_elections.csv"
);

#[test]
fn test_full_pipeline() {
    let ev = ElectionEvaluator::new(LoaderConfig::new(FIXTURE)).expect("Failed to load fixture");
    let summary = ev.get_summary();

    assert_eq!(ev.table().len(), 16);
    assert_eq!(summary.age_sum, 1896);
    assert_eq!(summary.candidate_count, 32);
    assert_eq!(summary.average_age, 59);
    assert_eq!(summary.max_total_age_index, 15);
    assert_eq!(summary.min_total_age_index, 0);
    assert_eq!(summary.youngest_winner_index, 0);
    assert_eq!(summary.oldest_winner_index, 15);
    assert_eq!(summary.youngest_competitor_index, 0);
    assert_eq!(summary.oldest_competitor_index, 15);

    assert_eq!(ev.get_elections().len(), 16);
    assert_eq!(ev.get_elections()[15].winner().name, "Joe Biden");
}

#[test]
fn test_fixture_report() {
    let ev = ElectionEvaluator::new(LoaderConfig::new(FIXTURE)).unwrap();
    let lines = render_details(&ev).unwrap();

    assert_eq!(
        lines,
        vec![
            "Oldest Election Year: 2020",
            "Oldest Competitor: Donald Trump - Age: 74",
            "Oldest President: Joe Biden - Age: 77",
            "Youngest President: John F. Kennedy - Age: 43",
            "Youngest Competitor: Richard Nixon - Age: 47",
            "Average Candidate Age: 59",
        ]
    );
}

#[test]
fn test_partial_fixture_strict_fails() {
    let err = ElectionEvaluator::new(LoaderConfig::new(PARTIAL_FIXTURE)).unwrap_err();
    assert!(matches!(err, DataLoadError::MissingValue { line: 3, .. }));
}

#[test]
fn test_partial_fixture_lenient() {
    let config = LoaderConfig::new(PARTIAL_FIXTURE).with_missing_policy(MissingPolicy::Lenient);
    let ev = ElectionEvaluator::new(config).unwrap();
    let summary = ev.get_summary();

    assert_eq!(summary.age_sum, 43 + 47 + 56 + 55 + 57);
    assert_eq!(summary.candidate_count, 5);
    assert_eq!(summary.average_age, 52); // 51.6
    assert_eq!(summary.oldest_winner_index, 1);
    assert_eq!(summary.max_total_age_index, 2);

    let partial = &ev.get_elections()[1];
    assert_eq!(partial.competitor().name, PLACEHOLDER_NAME);
    assert_eq!(partial.competitor().age, 0);
}

#[test]
fn test_missing_file() {
    let err = ElectionEvaluator::new(LoaderConfig::new("does/not/exist.csv")).unwrap_err();
    assert!(matches!(err, DataLoadError::NotFound(_)));
}

/// `values[index]` is a first-occurrence extreme in the `wanted` direction.
fn is_first_extreme<T: Ord>(values: &[T], index: usize, wanted: Ordering) -> bool {
    let best = &values[index];
    values.iter().all(|v| v.cmp(best) != wanted)
        && values[..index].iter().all(|v| v.cmp(best) == wanted.reverse())
}

fn partial_rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    let age = || prop::option::weighted(0.7, 20u32..100);
    prop::collection::vec((1789i32..2100, age(), age()), 1..40).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(i, (year, winner_age, competitor_age))| Row {
                year,
                winner: Some(format!("W{i}")),
                winner_age,
                competitor: Some(format!("C{i}")),
                competitor_age,
            })
            .collect()
    })
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((1789i32..2100, 20u32..100, 20u32..100), 1..40).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(i, (year, wa, ca))| Row::new(year, &format!("W{i}"), wa, &format!("C{i}"), ca))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_average_is_rounded_quotient(rows in rows_strategy()) {
        let table = ElectionTable::from_rows(rows).unwrap();
        let stats = SummaryStats::from_table(&table).unwrap();

        prop_assert_eq!(stats.candidate_count, 2 * table.len() as u64);
        prop_assert_eq!(
            Some(stats.average_age),
            round_half_even(stats.age_sum, stats.candidate_count)
        );
    }

    #[test]
    fn prop_total_age_is_sum_of_ages(rows in rows_strategy()) {
        let table = ElectionTable::from_rows(rows).unwrap();

        for d in table.iter() {
            let expected = u64::from(d.row.winner_age.unwrap()) + u64::from(d.row.competitor_age.unwrap());
            prop_assert_eq!(d.total_age, Some(expected));
        }
    }

    #[test]
    fn prop_extremal_indices_are_first_extremes(rows in rows_strategy()) {
        let table = ElectionTable::from_rows(rows).unwrap();
        let stats = SummaryStats::from_table(&table).unwrap();
        let totals: Vec<u64> = table.iter().map(|d| d.total_age.unwrap()).collect();
        let winners: Vec<u32> = table.iter().map(|d| d.row.winner_age.unwrap()).collect();
        let competitors: Vec<u32> = table.iter().map(|d| d.row.competitor_age.unwrap()).collect();

        prop_assert!(is_first_extreme(&totals, stats.max_total_age_index, Ordering::Greater));
        prop_assert!(is_first_extreme(&totals, stats.min_total_age_index, Ordering::Less));
        prop_assert!(is_first_extreme(&winners, stats.oldest_winner_index, Ordering::Greater));
        prop_assert!(is_first_extreme(&winners, stats.youngest_winner_index, Ordering::Less));
        prop_assert!(is_first_extreme(&competitors, stats.oldest_competitor_index, Ordering::Greater));
        prop_assert!(is_first_extreme(&competitors, stats.youngest_competitor_index, Ordering::Less));
    }

    #[test]
    fn prop_lenient_statistics_skip_absent_ages(rows in partial_rows_strategy()) {
        let csv = write_derived(&ElectionTable::from_rows(rows).unwrap(), Vec::new()).unwrap();
        let table = ElectionTable::from_reader(csv.as_slice(), MissingPolicy::Lenient).unwrap();
        let winner_present = table.iter().any(|d| d.row.winner_age.is_some());
        let competitor_present = table.iter().any(|d| d.row.competitor_age.is_some());
        let total_present = table.iter().any(|d| d.total_age.is_some());

        let result = SummaryStats::from_table(&table);
        if !(winner_present && competitor_present && total_present) {
            prop_assert!(matches!(result, Err(DataLoadError::NoValues { .. })), "expected NoValues error");
            return Ok(());
        }
        let stats = result.unwrap();

        let present: Vec<u32> = table
            .iter()
            .flat_map(|d| [d.row.winner_age, d.row.competitor_age])
            .flatten()
            .collect();
        prop_assert_eq!(stats.candidate_count, present.len() as u64);
        prop_assert_eq!(stats.age_sum, present.iter().map(|&a| u64::from(a)).sum::<u64>());

        let rows = table.rows();
        prop_assert!(rows[stats.max_total_age_index].total_age.is_some());
        prop_assert!(rows[stats.min_total_age_index].total_age.is_some());
        prop_assert!(rows[stats.oldest_winner_index].row.winner_age.is_some());
        prop_assert!(rows[stats.youngest_winner_index].row.winner_age.is_some());
        prop_assert!(rows[stats.oldest_competitor_index].row.competitor_age.is_some());
        prop_assert!(rows[stats.youngest_competitor_index].row.competitor_age.is_some());

        // absent cells are skipped, present ones still follow first-extreme order
        let winners: Vec<Option<u32>> = rows.iter().map(|d| d.row.winner_age).collect();
        let oldest = winners[stats.oldest_winner_index];
        prop_assert!(winners.iter().flatten().all(|&w| Some(w) <= oldest));
        prop_assert!(winners[..stats.oldest_winner_index].iter().flatten().all(|&w| Some(w) < oldest));
    }

    #[test]
    fn prop_elections_follow_rows(rows in rows_strategy()) {
        let table = ElectionTable::from_rows(rows).unwrap();
        let ev = ElectionEvaluator::from_table(LoaderConfig::default(), table).unwrap();

        prop_assert_eq!(ev.get_elections().len(), ev.table().len());
        for (election, d) in ev.get_elections().iter().zip(ev.table().iter()) {
            prop_assert_eq!(election.year, d.row.year);
            prop_assert_eq!(Some(election.winner().age), d.row.winner_age);
            prop_assert_eq!(Some(election.competitor().age), d.row.competitor_age);
        }
    }
}

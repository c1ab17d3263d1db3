use std::collections::BTreeSet;

use motiva_core::error::CoreError;
use motiva_core::models::answer::{AnswerSet, Rating};
use motiva_core::models::driver::Driver;
use motiva_core::models::question::{question_bank, QUESTION_COUNT};

#[test]
fn bank_has_twenty_one_unique_questions() {
    let bank = question_bank();
    assert_eq!(bank.len(), QUESTION_COUNT);

    let ids: BTreeSet<&str> = bank.iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), QUESTION_COUNT, "question ids must be unique");
}

#[test]
fn bank_driver_distribution_matches_design() {
    let count = |driver: Driver| {
        question_bank()
            .iter()
            .filter(|q| q.driver == driver)
            .count()
    };

    assert_eq!(count(Driver::Certainty), 3);
    assert_eq!(count(Driver::Variety), 3);
    assert_eq!(count(Driver::Significance), 4);
    assert_eq!(count(Driver::Connection), 3);
    assert_eq!(count(Driver::Growth), 4);
    assert_eq!(count(Driver::Contribution), 4);
}

#[test]
fn rating_rejects_out_of_range_values() {
    assert!(matches!(Rating::new(0), Err(CoreError::RatingOutOfRange(0))));
    assert!(matches!(Rating::new(6), Err(CoreError::RatingOutOfRange(6))));
    for value in 1..=5 {
        assert_eq!(Rating::new(value).expect("in range").value(), value);
    }
}

#[test]
fn record_rejects_unknown_question_ids() {
    let mut set = AnswerSet::new();
    let err = set
        .record("q99", Rating::new(3).expect("valid"))
        .expect_err("q99 is not in the bank");
    assert!(matches!(err, CoreError::UnknownQuestion(_)));
    assert_eq!(set.answered_count(), 0);
}

#[test]
fn record_overwrites_existing_answers() {
    let mut set = AnswerSet::new();
    set.record("q1", Rating::new(2).expect("valid")).expect("record");
    set.record("q1", Rating::new(5).expect("valid")).expect("record");

    assert_eq!(set.answered_count(), 1);
    assert_eq!(set.get("q1").expect("answered").value(), 5);
}

#[test]
fn completeness_requires_every_question() {
    let mut set = AnswerSet::new();
    assert!(!set.is_complete());
    assert_eq!(set.progress_percent(), 0);

    let bank = question_bank();
    for q in &bank[..QUESTION_COUNT - 1] {
        set.record(q.id, Rating::new(3).expect("valid")).expect("record");
    }
    assert!(!set.is_complete());

    set.record(bank[QUESTION_COUNT - 1].id, Rating::new(3).expect("valid"))
        .expect("record");
    assert!(set.is_complete());
    assert_eq!(set.progress_percent(), 100);
}

#[test]
fn progress_percent_rounds() {
    let mut set = AnswerSet::new();
    set.record("q1", Rating::new(1).expect("valid")).expect("record");
    // 1 of 21 is 4.76 percent.
    assert_eq!(set.progress_percent(), 5);
}

#[test]
fn clear_returns_every_entry_to_unanswered() {
    let mut set = AnswerSet::new();
    for q in question_bank() {
        set.record(q.id, Rating::new(4).expect("valid")).expect("record");
    }
    assert!(set.is_complete());

    set.clear();
    assert_eq!(set.answered_count(), 0);
    assert!(!set.is_complete());
    assert!(set.get("q1").is_none());
}

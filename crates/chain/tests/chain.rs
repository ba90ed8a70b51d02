use std::collections::VecDeque;

use seq_chain::{make_chain, Exhausted};


#[test]
fn forward_traversal_concatenates_mixed_sources() {
    let head = vec![1, 2, 3];
    let mid: VecDeque<i32> = VecDeque::from(vec![4, 5]);
    let tail: &[i32] = &[6];

    let chain = make_chain((&head, &mid, tail));
    let items: Vec<i32> = chain.iter().copied().collect();

    assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
}


#[test]
fn retreating_from_end_walks_the_chain_backward() {
    let head = vec![1, 2, 3];
    let tail = vec![4, 5];

    let chain = make_chain((&head, &tail));
    let mut iter = chain.end();

    let mut items = Vec::new();
    while iter.retreat().is_ok() {
        items.push(*iter.current());
    }

    assert_eq!(items, vec![5, 4, 3, 2, 1]);
    assert_eq!(iter, chain.begin());
}


#[test]
fn begin_skips_leading_empty_ranges() {
    let empty: Vec<i32> = Vec::new();
    let tail = vec![4, 5];

    let chain = make_chain((&empty, &tail));

    assert_eq!(chain.begin().current(), &4);
}


#[test]
fn advance_crosses_consecutive_empty_ranges() -> anyhow::Result<()> {
    let head = vec![1];
    let gap1: Vec<i32> = Vec::new();
    let gap2: Vec<i32> = Vec::new();
    let tail = vec![2];

    let chain = make_chain((&head, &gap1, &gap2, &tail));
    let mut iter = chain.begin();

    assert_eq!(iter.current(), &1);
    iter.advance()?;
    assert_eq!(iter.current(), &2);
    iter.advance()?;
    assert!(iter.is_end());
    assert_eq!(iter, chain.end());

    Ok(())
}


#[test]
fn chain_of_empty_ranges_is_empty() {
    let a: Vec<i32> = Vec::new();
    let b: VecDeque<i32> = VecDeque::new();

    let chain = make_chain((&a, &b));

    assert!(chain.is_empty());
    assert_eq!(chain.begin(), chain.end());
    assert_eq!(chain.iter().next(), None);
}


#[test]
fn single_range_chain_matches_direct_traversal() {
    let items = vec![7, 8, 9];

    let chain = make_chain((&items,));

    let forward: Vec<i32> = chain.iter().copied().collect();
    assert_eq!(forward, items);

    let backward: Vec<i32> = chain.iter().rev().copied().collect();
    assert_eq!(backward, vec![9, 8, 7]);
}


#[test]
fn dereference_is_stable_without_stepping() {
    let items = vec![42];
    let chain = make_chain((&items,));
    let iter = chain.begin();

    assert_eq!(iter.current(), iter.current());
    assert_eq!(iter.try_current(), Some(&42));
}


#[test]
fn checked_stepping_errors_at_the_boundaries() {
    let items = vec![1];
    let chain = make_chain((&items,));

    let mut iter = chain.end();
    assert_eq!(iter.advance(), Err(Exhausted));
    assert_eq!(iter, chain.end());
    assert_eq!(iter.try_current(), None);

    let mut iter = chain.begin();
    assert_eq!(iter.retreat(), Err(Exhausted));
    assert_eq!(iter, chain.begin());
}


#[test]
fn retreat_errors_at_a_begin_that_skipped_empty_ranges() {
    let empty: Vec<i32> = Vec::new();
    let tail = vec![4, 5];

    let chain = make_chain((&empty, &tail));
    let mut iter = chain.begin();

    assert_eq!(iter.retreat(), Err(Exhausted));
    assert_eq!(iter, chain.begin());
}


#[test]
fn retreat_from_end_crosses_trailing_empty_ranges() -> anyhow::Result<()> {
    let head = vec![1, 2];
    let gap1: Vec<i32> = Vec::new();
    let gap2: Vec<i32> = Vec::new();

    let chain = make_chain((&head, &gap1, &gap2));
    let mut iter = chain.end();

    iter.retreat()?;
    assert_eq!(iter.current(), &2);

    Ok(())
}


#[test]
fn double_ended_iteration_meets_in_the_middle() {
    let head = vec![1, 2];
    let tail = vec![3, 4];

    let chain = make_chain((&head, &tail));
    let mut iter = chain.iter();

    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}


#[test]
fn iterators_compare_by_position_identity() -> anyhow::Result<()> {
    let head = vec![1, 2];
    let tail = vec![3];

    let chain = make_chain((&head, &tail));
    let mut iter = chain.begin();

    assert_eq!(iter, chain.begin());
    iter.advance()?;
    assert_ne!(iter, chain.begin());
    assert_ne!(iter, chain.end());

    iter.advance()?;
    iter.advance()?;
    assert_eq!(iter, chain.end());

    Ok(())
}


#[test]
fn chain_works_in_a_for_loop() {
    let head = vec![1, 2, 3];
    let tail: VecDeque<i32> = VecDeque::from(vec![4, 5]);

    let chain = make_chain((&head, &tail));

    let mut sum = 0;
    for item in &chain {
        sum += item;
    }

    assert_eq!(sum, 15);
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ordinal_core::{Element, Sequence, Traversable};

#[test]
fn test_empty_sequence() {
    let seq: Sequence<i32> = Sequence::empty();

    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.present_len(), 0);
    assert_eq!(seq, Sequence::default());
}

#[test]
fn test_dense_sequence_from_vec() {
    let seq = Sequence::from(vec![10, 20, 30]);

    assert_eq!(seq.len(), 3);
    assert_eq!(seq.present_len(), 3);
    assert_eq!(seq.get(1), Some(&20));
    assert_eq!(seq.get(3), None);
}

#[test]
fn test_holes_keep_length_but_not_presence() {
    let seq = Sequence::from_slots(vec![Some('a'), None, Some('c'), None]);

    assert_eq!(seq.len(), 4);
    assert_eq!(seq.present_len(), 2);
    assert!(seq.is_present(0));
    assert!(!seq.is_present(1));
    assert_eq!(seq.get(1), None);
}

#[test]
fn test_present_yields_original_indices() {
    let seq = Sequence::from_slots(vec![None, Some("x"), None, Some("y")]);

    let present: Vec<_> = seq.present().collect();

    assert_eq!(present, vec![(1, &"x"), (3, &"y")]);
}

#[test]
fn test_sparse_ignores_out_of_range_entries() {
    let seq = Sequence::sparse(3, [(0, 1), (5, 99), (2, 3), (2, 4)]);

    assert_eq!(seq.slots(), &[Some(1), None, Some(4)]);
}

#[test]
fn test_from_array_and_iterator() {
    let from_array = Sequence::from([1, 2, 3]);
    let from_iter: Sequence<i32> = (1..=3).collect();

    assert_eq!(from_array, from_iter);
}

#[test]
fn test_clone_shares_slots() {
    let seq = Sequence::from(vec![String::from("a")]);
    let copy = seq.clone();

    assert!(std::ptr::eq(seq.slots(), copy.slots()));
}

#[test]
fn test_debug_lists_slots() {
    let seq = Sequence::from_slots(vec![Some(1), None]);

    assert_eq!(format!("{seq:?}"), "[Some(1), None]");
}

#[test]
fn test_elements_skip_holes_and_carry_sequence() {
    let seq = Sequence::from_slots(vec![Some(5), None, Some(7)]);

    let elements: Vec<Element<i32>> = seq.elements().collect();

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].clone().into_parts(), (5, 0));
    assert_eq!(elements[1].clone().into_parts(), (7, 2));
    assert_eq!(elements[1].sequence, seq);
}

#[test]
fn test_with_context_binds_context_to_every_element() {
    let seq = Sequence::from(vec![1, 2]);
    let bound = seq.with_context("ctx");

    let contexts: Vec<&str> = bound.elements().map(|element| element.context).collect();

    assert_eq!(contexts, vec!["ctx", "ctx"]);
    assert_eq!(bound.sequence(), &seq);
}

#[test]
fn test_with_context_or_default_falls_back() {
    let seq = Sequence::from(vec![1]);

    let bound = seq.with_context_or_default::<u32>(None);
    let explicit = seq.with_context_or_default(Some(9u32));

    assert_eq!(*bound.context(), 0);
    assert_eq!(*explicit.context(), 9);
    assert_eq!(explicit.into_inner(), (seq, 9));
}

#[test]
fn test_unit_context_for_plain_sequence() {
    let seq = Sequence::from(vec![1]);

    let bound = seq.to_bound();

    assert_eq!(bound.context(), &());
    assert_eq!(bound.sequence(), &seq);
}

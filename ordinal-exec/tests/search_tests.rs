// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ordinal_core::Sequence;
use ordinal_exec::SearchExt;
use ordinal_test_utils::helpers::assert_element_failure;
use ordinal_test_utils::test_data::{animal_dog, mixed_roster, person_bob, sparse_roster};
use ordinal_test_utils::{
    delayed_err, delayed_ok, never, reversed_delay, settle_within, CallRecorder, TestError,
};

#[tokio::test]
async fn test_find_prefers_lowest_index_over_first_completion() -> anyhow::Result<()> {
    // Arrange
    let sequence = Sequence::from(vec![1, 2, 3, 4]);

    // Act
    let found = sequence
        .find(|element| {
            let delay = reversed_delay(element.index, 4, 10);
            delayed_ok(element.value >= 2, delay)
        })
        .await?;

    // Assert
    assert_eq!(found, Some(2));
    Ok(())
}

#[tokio::test]
async fn test_find_does_not_wait_for_slots_above_the_match() -> anyhow::Result<()> {
    let sequence = Sequence::from(vec![1, 2, 3]);

    let found = settle_within(sequence.find(|element| async move {
        match element.index {
            0 => delayed_ok(false, 5).await,
            1 => delayed_ok(true, 10).await,
            _ => never().await,
        }
    }))
    .await?;

    assert_eq!(found, Some(2));
    Ok(())
}

#[tokio::test]
async fn test_find_series_stops_at_first_match() -> anyhow::Result<()> {
    // Arrange
    let sequence = Sequence::from(vec![1, 5, 7, 9]);
    let recorder = CallRecorder::new();

    // Act
    let found = sequence
        .find_series({
            let recorder = recorder.clone();
            move |element| {
                recorder.track(element.index, async move {
                    Ok::<_, TestError>(element.value > 3)
                })
            }
        })
        .await?;

    // Assert
    assert_eq!(found, Some(5));
    assert_eq!(recorder.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_find_no_match() -> anyhow::Result<()> {
    let roster = mixed_roster();

    let parallel = roster
        .find(|element| async move { Ok::<_, TestError>(element.value.name() == "Zed") })
        .await?;
    let series = roster
        .find_series(|element| async move { Ok::<_, TestError>(element.value.name() == "Zed") })
        .await?;

    assert_eq!(parallel, None);
    assert_eq!(series, None);
    Ok(())
}

#[tokio::test]
async fn test_find_empty_sequence() -> anyhow::Result<()> {
    let sequence: Sequence<u8> = Sequence::empty();

    let found = sequence
        .find(|_| async { Ok::<_, TestError>(true) })
        .await?;
    let index = sequence
        .find_index_series(|_| async { Ok::<_, TestError>(true) })
        .await?;

    assert_eq!(found, None);
    assert_eq!(index, None);
    Ok(())
}

#[tokio::test]
async fn test_find_index_reports_original_slot() -> anyhow::Result<()> {
    // Arrange
    let roster = sparse_roster();

    // Act
    let parallel = roster
        .find_index(|element| async move { Ok::<_, TestError>(element.value.is_animal()) })
        .await?;
    let series = roster
        .find_index_series(|element| async move { Ok::<_, TestError>(element.value.is_animal()) })
        .await?;

    // Assert
    assert_eq!(parallel, Some(2));
    assert_eq!(series, Some(2));
    Ok(())
}

#[tokio::test]
async fn test_find_never_tests_holes() -> anyhow::Result<()> {
    let roster = sparse_roster();
    let recorder = CallRecorder::new();

    let found = roster
        .find_series({
            let recorder = recorder.clone();
            move |element| {
                recorder.track(element.index, async move {
                    Ok::<_, TestError>(element.value == person_bob())
                })
            }
        })
        .await?;

    assert_eq!(found, Some(person_bob()));
    assert_eq!(recorder.indices(), vec![0, 2, 4]);
    Ok(())
}

#[tokio::test]
async fn test_find_failure_before_answer_rejects() {
    let sequence = Sequence::from(vec![1, 2, 3]);

    let result = sequence
        .find(|element| async move {
            match element.index {
                0 => delayed_ok(true, 30).await,
                1 => delayed_err("lookup failed", 5).await,
                _ => delayed_ok(false, 1).await,
            }
        })
        .await;

    assert_element_failure(&result.unwrap_err(), 1, "lookup failed");
}

#[tokio::test]
async fn test_find_failure_after_answer_is_ignored() -> anyhow::Result<()> {
    let sequence = Sequence::from(vec![1, 2]);

    let found = sequence
        .find(|element| async move {
            match element.index {
                0 => delayed_ok(true, 1).await,
                _ => delayed_err("late", 30).await,
            }
        })
        .await?;

    assert_eq!(found, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_some_and_every_on_empty_sequence() -> anyhow::Result<()> {
    let sequence: Sequence<i32> = Sequence::empty();

    let some = sequence.some(|_| async { Ok::<_, TestError>(true) }).await?;
    let some_series = sequence
        .some_series(|_| async { Ok::<_, TestError>(true) })
        .await?;
    let every = sequence.every(|_| async { Ok::<_, TestError>(false) }).await?;
    let every_series = sequence
        .every_series(|_| async { Ok::<_, TestError>(false) })
        .await?;

    assert!(!some);
    assert!(!some_series);
    assert!(every);
    assert!(every_series);
    Ok(())
}

#[tokio::test]
async fn test_some_settles_without_waiting_for_pending_predicates() -> anyhow::Result<()> {
    // Arrange
    let sequence = Sequence::from(vec![0, 1, 2]);

    // Act
    let any = settle_within(sequence.some(|element| async move {
        if element.index == 1 {
            delayed_ok(true, 5).await
        } else {
            never().await
        }
    }))
    .await?;

    // Assert
    assert!(any);
    Ok(())
}

#[tokio::test]
async fn test_some_false_when_every_predicate_fails_to_match() -> anyhow::Result<()> {
    let roster = mixed_roster();

    let any_bird = roster
        .some(|element| async move { Ok::<_, TestError>(element.value.name() == "Bird") })
        .await?;
    let any_dog = roster
        .some_series(|element| async move { Ok::<_, TestError>(element.value == animal_dog()) })
        .await?;

    assert!(!any_bird);
    assert!(any_dog);
    Ok(())
}

#[tokio::test]
async fn test_some_series_stops_at_first_true() -> anyhow::Result<()> {
    let sequence = Sequence::from(vec![3, 4, 6, 8]);
    let recorder = CallRecorder::new();

    let any_even = sequence
        .some_series({
            let recorder = recorder.clone();
            move |element| {
                recorder.track(element.index, async move {
                    Ok::<_, TestError>(element.value % 2 == 0)
                })
            }
        })
        .await?;

    assert!(any_even);
    assert_eq!(recorder.indices(), vec![0, 1]);
    Ok(())
}

#[tokio::test]
async fn test_every_settles_false_without_waiting_for_pending_predicates() -> anyhow::Result<()> {
    let sequence = Sequence::from(vec![0, 1, 2]);

    let all = settle_within(sequence.every(|element| async move {
        if element.index == 2 {
            delayed_ok(false, 5).await
        } else {
            never().await
        }
    }))
    .await?;

    assert!(!all);
    Ok(())
}

#[tokio::test]
async fn test_every_true_when_all_hold() -> anyhow::Result<()> {
    let sequence = Sequence::from(vec![2, 4, 6]);

    let parallel = sequence
        .every(|element| {
            let delay = reversed_delay(element.index, 3, 3);
            delayed_ok(element.value % 2 == 0, delay)
        })
        .await?;
    let series = sequence
        .every_series(|element| async move { Ok::<_, TestError>(element.value % 2 == 0) })
        .await?;

    assert!(parallel);
    assert!(series);
    Ok(())
}

#[tokio::test]
async fn test_every_series_stops_at_first_false() -> anyhow::Result<()> {
    let sequence = Sequence::from(vec![2, 3, 4]);
    let recorder = CallRecorder::new();

    let all_even = sequence
        .every_series({
            let recorder = recorder.clone();
            move |element| {
                recorder.track(element.index, async move {
                    Ok::<_, TestError>(element.value % 2 == 0)
                })
            }
        })
        .await?;

    assert!(!all_even);
    assert_eq!(recorder.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_every_ignores_holes() -> anyhow::Result<()> {
    let sequence = Sequence::from_slots(vec![Some(2), None, Some(4), None]);

    let all_even = sequence
        .every(|element| async move { Ok::<_, TestError>(element.value % 2 == 0) })
        .await?;

    assert!(all_even);
    Ok(())
}

#[tokio::test]
async fn test_some_failure_rejects() {
    let sequence = Sequence::from(vec![1, 2, 3]);

    let result = sequence
        .some(|element| async move {
            if element.index == 0 {
                delayed_err("unreachable host", 1).await
            } else {
                delayed_ok(false, 10).await
            }
        })
        .await;

    assert_element_failure(&result.unwrap_err(), 0, "unreachable host");
}

#[tokio::test]
async fn test_every_failure_rejects_without_waiting_for_pending_predicates() {
    // Arrange
    let sequence = Sequence::from(vec![1, 2, 3]);

    // Act
    let result = settle_within(sequence.every(|element| async move {
        match element.index {
            1 => delayed_err("checksum mismatch", 5).await,
            _ => never::<bool>().await,
        }
    }))
    .await;

    // Assert
    assert_element_failure(&result.unwrap_err(), 1, "checksum mismatch");
}

#[tokio::test]
async fn test_find_index_failure_rejects_while_lower_slots_pending() {
    // Arrange
    let sequence = Sequence::from(vec![1, 2, 3, 4]);

    // Act
    let result = settle_within(sequence.find_index(|element| async move {
        match element.index {
            2 => delayed_err("index out of date", 5).await,
            _ => never::<bool>().await,
        }
    }))
    .await;

    // Assert
    assert_element_failure(&result.unwrap_err(), 2, "index out of date");
}

#[tokio::test]
async fn test_every_series_failure_stops_chain() {
    let sequence = Sequence::from(vec![1, 2, 3]);
    let recorder = CallRecorder::new();

    let result = sequence
        .every_series({
            let recorder = recorder.clone();
            move |element| {
                recorder.track(element.index, async move {
                    if element.index == 1 {
                        Err(TestError::new("middle"))
                    } else {
                        Ok(true)
                    }
                })
            }
        })
        .await;

    assert_element_failure(&result.unwrap_err(), 1, "middle");
    assert!(!recorder.was_called(2));
}

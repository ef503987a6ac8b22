use ordinal_core::OrdinalError;
use ordinal_test_utils::helpers::assert_element_failure;
use ordinal_test_utils::{delayed_err, delayed_ok, never, reversed_delay, settle_within, TestError};

#[tokio::test]
async fn test_delayed_ok_settles_with_value() {
    assert_eq!(delayed_ok("value", 5).await, Ok("value"));
}

#[tokio::test]
async fn test_delayed_err_settles_with_test_error() {
    let result = delayed_err::<u8>("boom", 5).await;

    assert_eq!(result, Err(TestError::new("boom")));
    assert_eq!(TestError::new("boom").to_string(), "Test error: boom");
}

#[test]
fn test_reversed_delay_is_decreasing() {
    let delays: Vec<u64> = (0..4).map(|index| reversed_delay(index, 4, 10)).collect();

    assert_eq!(delays, vec![40, 30, 20, 10]);
}

#[tokio::test]
#[should_panic = "did not settle"]
async fn test_settle_within_panics_on_pending_future() {
    tokio::time::pause();
    let _ = settle_within(never::<()>()).await;
}

#[test]
fn test_assert_element_failure_matches_index_and_message() {
    let error = OrdinalError::element(2, TestError::new("bad"));

    assert_element_failure(&error, 2, "bad");
}

#[test]
#[should_panic]
fn test_assert_element_failure_rejects_wrong_index() {
    let error = OrdinalError::element(2, TestError::new("bad"));

    assert_element_failure(&error, 1, "bad");
}

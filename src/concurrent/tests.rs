#![cfg(test)]

use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;

#[test]
fn test_constant_future() {
    let future = ConstantFuture::from(String::from("done"));
    assert!(future.is_done());
    assert!(!future.cancel(), "A constant future can never be cancelled.");
    assert!(!future.is_cancelled());
    assert_eq!(future.get(), "done");

    let mut cx = Context::from_waker(Waker::noop());
    let mut pinned = pin!(future.clone());
    assert_eq!(pinned.as_mut().poll(&mut cx), Poll::Ready("done".to_owned()));
    assert_eq!(
        pinned.as_mut().poll(&mut cx),
        Poll::Ready("done".to_owned()),
        "Polling again should yield the same value."
    );

    assert_eq!(future.into_inner(), "done");
}

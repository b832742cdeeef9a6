// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn background_context_is_active() {
    let ctx = Context::background();
    assert!(!ctx.is_done());
    assert_eq!(ctx.err(), None);
    assert_eq!(ctx.deadline(), None);
}

#[test]
fn cancel_marks_context_done() {
    let ctx = Context::background();
    ctx.cancel();
    assert!(ctx.is_done());
    assert_eq!(ctx.err(), Some(PublishError::Canceled));
}

#[test]
fn clones_share_cancellation() {
    let ctx = Context::background();
    let clone = ctx.clone();
    clone.cancel();
    assert!(ctx.is_done());
}

#[test]
fn cancelling_parent_cancels_child() {
    let parent = Context::background();
    let child = parent.child();
    parent.cancel();
    assert_eq!(child.err(), Some(PublishError::Canceled));
}

#[test]
fn cancelling_child_leaves_parent_active() {
    let parent = Context::background();
    let child = parent.child();
    child.cancel();
    assert!(child.is_done());
    assert!(!parent.is_done());
}

#[test]
fn from_token_observes_token() {
    let token = CancellationToken::new();
    let ctx = Context::from(token.clone());
    token.cancel();
    assert!(ctx.is_done());
}

#[tokio::test(start_paused = true)]
async fn deadline_expires() {
    let ctx = Context::with_timeout(Duration::from_millis(500));
    assert!(!ctx.is_done());

    tokio::time::advance(Duration::from_millis(600)).await;
    assert_eq!(ctx.err(), Some(PublishError::DeadlineExceeded));
}

#[tokio::test(start_paused = true)]
async fn cancel_wins_over_expired_deadline() {
    let ctx = Context::with_timeout(Duration::from_millis(10));
    tokio::time::advance(Duration::from_millis(20)).await;
    ctx.cancel();
    assert_eq!(ctx.err(), Some(PublishError::Canceled));
}

#[tokio::test(start_paused = true)]
async fn child_with_timeout_keeps_earlier_deadline() {
    let parent = Context::with_timeout(Duration::from_secs(1));
    let child = parent.child_with_timeout(Duration::from_secs(10));
    assert_eq!(child.deadline(), parent.deadline());

    let tighter = parent.child_with_timeout(Duration::from_millis(100));
    assert!(tighter.deadline() < parent.deadline());
}

#[tokio::test(start_paused = true)]
async fn done_resolves_on_deadline() {
    let ctx = Context::with_timeout(Duration::from_secs(5));
    let reason = ctx.cancelled().await;
    assert_eq!(reason, PublishError::DeadlineExceeded);
}

#[tokio::test]
async fn done_resolves_on_cancel() {
    let ctx = Context::background();
    let waiter = ctx.clone();
    let handle = tokio::spawn(async move { waiter.cancelled().await });

    ctx.cancel();
    assert_eq!(handle.await.unwrap(), PublishError::Canceled);
}

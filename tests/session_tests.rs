//! Behavioral tests for the simulation transcript core.
//!
//! The session is a plain state machine: `begin` records the user turn and
//! hands back the job, `finish` records the outcome. Everything here runs
//! without a UI and without network.

use bot_architect::ai::ChatError;
use bot_architect::session::{ChatSession, REPLY_ERROR, REPLY_FALLBACK, SEED_MESSAGE};
use bot_architect::types::Role;
use reqwest::StatusCode;

#[test]
fn transcript_opens_with_the_seed_greeting() {
    let session = ChatSession::new();

    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::Bot);
    assert_eq!(session.messages()[0].text, SEED_MESSAGE);
    assert!(!session.is_busy());
}

#[test]
fn successful_submit_appends_user_then_bot() {
    let mut session = ChatSession::new();

    let job = session.begin("hello").expect("submission accepted");
    assert!(session.is_busy());

    session.finish(Ok("Hi! Send /register to get started.".to_string()));
    assert!(!session.is_busy());

    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].text, "hello");
    assert_eq!(messages[2].role, Role::Bot);
    assert_eq!(messages[2].text, "Hi! Send /register to get started.");
    assert_eq!(job.input, "hello");
}

#[test]
fn user_text_is_preserved_verbatim() {
    let mut session = ChatSession::new();

    session
        .begin("  /start  ")
        .expect("non-blank input accepted");

    // Raw input lands in the transcript; trimming only gates acceptance.
    assert_eq!(session.messages()[1].text, "  /start  ");
}

#[test]
fn blank_input_changes_nothing() {
    let mut session = ChatSession::new();
    let before = session.messages().to_vec();

    assert!(session.begin("").is_none());
    assert!(session.begin("   ").is_none());
    assert!(session.begin("\n\t").is_none());

    assert_eq!(session.messages(), before.as_slice());
    assert!(!session.is_busy());
}

#[test]
fn second_submit_while_pending_is_dropped() {
    let mut session = ChatSession::new();

    session.begin("a").expect("first submission accepted");
    let before = session.messages().to_vec();

    // No message appended, no job handed out, so no second outbound call.
    assert!(session.begin("b").is_none());
    assert_eq!(session.messages(), before.as_slice());

    session.finish(Ok("reply to a".to_string()));
    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].text, "a");
    assert_eq!(messages[2].text, "reply to a");
}

#[test]
fn history_snapshot_excludes_the_pending_user_turn() {
    let mut session = ChatSession::new();

    session.begin("first").expect("accepted");
    session.finish(Ok("one".to_string()));

    let job = session.begin("second").expect("accepted");

    // The snapshot is the transcript before "second" was recorded.
    assert_eq!(job.history.len(), 3);
    assert!(job.history.iter().all(|msg| msg.text != "second"));
    assert_eq!(job.history.last().map(|msg| msg.text.as_str()), Some("one"));
}

#[test]
fn empty_reply_collapses_to_the_fallback_text() {
    for outcome in [
        Err(ChatError::EmptyReply),
        Ok(String::new()),
        Ok("   ".to_string()),
    ] {
        let mut session = ChatSession::new();
        session.begin("hours?").expect("accepted");
        session.finish(outcome);

        let last = session.messages().last().expect("bot reply recorded");
        assert_eq!(last.role, Role::Bot);
        assert_eq!(last.text, REPLY_FALLBACK);
        assert!(!last.text.is_empty());
    }
}

#[test]
fn client_failures_collapse_to_the_error_text() {
    for outcome in [
        Err(ChatError::MissingCredential),
        Err(ChatError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        }),
    ] {
        let mut session = ChatSession::new();
        session.begin("contact").expect("accepted");
        session.finish(outcome);

        let last = session.messages().last().expect("bot reply recorded");
        assert_eq!(last.role, Role::Bot);
        assert_eq!(last.text, REPLY_ERROR);
        assert!(!session.is_busy());
    }
}

#[test]
fn transcript_order_is_strictly_alternating() {
    let mut session = ChatSession::new();

    for turn in ["one", "two", "three"] {
        session.begin(turn).expect("accepted");
        session.finish(Ok(format!("reply to {turn}")));
    }

    let messages = session.messages();
    assert_eq!(messages.len(), 7);
    for (i, msg) in messages.iter().enumerate().skip(1) {
        let expected = if i % 2 == 1 { Role::User } else { Role::Bot };
        assert_eq!(msg.role, expected, "message {i} out of order");
    }
    assert_eq!(messages[1].text, "one");
    assert_eq!(messages[2].text, "reply to one");
    assert_eq!(messages[5].text, "three");
}

#[test]
fn session_accepts_a_new_submit_after_settling() {
    let mut session = ChatSession::new();

    session.begin("a").expect("accepted");
    session.finish(Err(ChatError::EmptyReply));

    assert!(session.begin("b").is_some());
}

#[test]
fn message_ids_are_unique() {
    let mut session = ChatSession::new();

    for turn in ["a", "b", "c"] {
        session.begin(turn).expect("accepted");
        session.finish(Ok("ok".to_string()));
    }

    let mut ids: Vec<u64> = session.messages().iter().map(|msg| msg.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), session.messages().len());
}

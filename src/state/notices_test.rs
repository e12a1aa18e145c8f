use super::*;

#[test]
fn publish_replaces_the_current_notice_and_bumps_seq() {
    let mut state = NoticesState::default();
    state.publish(Notice::login_errors(vec!["first".to_owned()]));
    let first_seq = state.seq;
    state.publish(Notice::login_errors(vec!["second".to_owned()]));
    assert!(state.seq > first_seq);
    assert_eq!(
        state.current.as_ref().map(|n| n.messages.clone()),
        Some(vec!["second".to_owned()])
    );
}

#[test]
fn dismiss_if_current_ignores_a_stale_seq() {
    let mut state = NoticesState::default();
    state.publish(Notice::login_errors(vec!["first".to_owned()]));
    let stale = state.seq;
    state.publish(Notice::login_errors(vec!["second".to_owned()]));
    state.dismiss_if_current(stale);
    assert!(state.current.is_some());
}

#[test]
fn dismiss_if_current_clears_a_matching_seq() {
    let mut state = NoticesState::default();
    state.publish(Notice::login_errors(vec!["only".to_owned()]));
    state.dismiss_if_current(state.seq);
    assert!(state.current.is_none());
}

#[test]
fn dismiss_clears_unconditionally() {
    let mut state = NoticesState::default();
    state.publish(Notice::login_errors(vec!["only".to_owned()]));
    state.dismiss();
    assert!(state.current.is_none());
}

#[test]
fn login_errors_keeps_every_message_in_order() {
    let notice = Notice::login_errors(vec!["bad credentials".to_owned(), "account locked".to_owned()]);
    assert_eq!(notice.title, "Sign-in error");
    assert_eq!(notice.messages, vec!["bad credentials".to_owned(), "account locked".to_owned()]);
}

#[test]
fn connection_error_carries_a_single_detail_line() {
    let notice = Notice::connection_error("request failed: 502".to_owned());
    assert_eq!(notice.title, "Connection error");
    assert_eq!(notice.messages, vec!["request failed: 502".to_owned()]);
}

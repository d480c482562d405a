use super::*;

#[test]
fn new_token_is_live() {
    assert!(MountToken::new().is_live());
}

#[test]
fn cancel_is_visible_through_clones() {
    let token = MountToken::new();
    let task_copy = token.clone();
    token.cancel();
    assert!(!task_copy.is_live());
}

#[test]
fn commit_applies_while_live() {
    let token = MountToken::default();
    let mut slot = None;
    assert!(token.commit(7, |v| slot = Some(v)));
    assert_eq!(slot, Some(7));
}

#[test]
fn commit_drops_value_after_cancel() {
    let token = MountToken::new();
    token.cancel();
    let mut slot = None;
    assert!(!token.commit(7, |v| slot = Some(v)));
    assert_eq!(slot, None);
}

#[test]
fn bound_token_is_cancelled_when_owner_cleans_up() {
    use leptos::prelude::Owner;

    let owner = Owner::new();
    let token = owner.with(|| MountToken::new().bind_to_owner());
    assert!(token.is_live());

    owner.cleanup();

    assert!(!token.is_live());
    let mut slot = None;
    assert!(!token.commit("late", |v| slot = Some(v)));
    assert_eq!(slot, None);
}

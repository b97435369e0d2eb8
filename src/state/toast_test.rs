use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("one", ToastKind::Info);
    let b = state.push("two", ToastKind::Success);
    assert!(b > a);
    assert_eq!(state.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push("one", ToastKind::Info);
    let b = state.push("two", ToastKind::Info);
    state.dismiss(a);
    let ids = state.iter().map(|t| t.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![b]);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push("one", ToastKind::Info);
    state.dismiss(99);
    assert_eq!(state.len(), 1);
}

#[test]
fn capacity_drops_oldest() {
    let mut state = ToastState::default();
    for i in 0..(TOAST_CAPACITY + 2) {
        state.push(format!("toast {i}"), ToastKind::Info);
    }
    assert_eq!(state.len(), TOAST_CAPACITY);
    assert_eq!(state.iter().next().map(|t| t.message.as_str()), Some("toast 2"));
}

#[test]
fn kind_classes_differ() {
    assert_ne!(ToastKind::Info.class(), ToastKind::Success.class());
    assert_eq!(ToastKind::default(), ToastKind::Info);
}

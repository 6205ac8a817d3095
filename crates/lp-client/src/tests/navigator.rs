use crate::{Navigator, RecordingNavigator};

#[test]
fn given_new_navigator_when_inspected_then_empty() {
    let navigator = RecordingNavigator::new();

    assert_eq!(navigator.current_path(), "");
    assert!(navigator.history().is_empty());
}

#[test]
fn given_navigations_when_recorded_then_current_and_history_track() {
    let navigator = RecordingNavigator::starting_at("/dashboard");

    navigator.navigate("/laudos");
    navigator.navigate("/login?error=session_expired");

    assert_eq!(navigator.current_path(), "/login?error=session_expired");
    assert_eq!(
        navigator.history(),
        vec!["/laudos", "/login?error=session_expired"]
    );
}

use super::*;

#[test]
fn default_is_loading() {
    let remote: Remote<u32> = Remote::default();
    assert_eq!(remote, Remote::Loading);
    assert_eq!(remote.ready(), None);
}

#[test]
fn from_ok_is_ready() {
    let remote: Remote<u32> = Ok::<_, String>(3).into();
    assert_eq!(remote.ready(), Some(&3));
}

#[test]
fn from_err_keeps_display_message() {
    let remote: Remote<u32> = Err::<u32, _>("incident not found").into();
    assert_eq!(remote, Remote::Failed("incident not found".to_owned()));
}

#[test]
fn refresh_failure_keeps_previous_value() {
    let current = Remote::Ready(vec![1, 2]);
    let next = current.refreshed(Err::<Vec<u32>, _>("network error: offline"));
    assert_eq!(next, Remote::Ready(vec![1, 2]));
}

#[test]
fn refresh_success_replaces_previous_value() {
    let current = Remote::Ready(vec![1, 2]);
    let next = current.refreshed(Ok::<_, String>(vec![3]));
    assert_eq!(next, Remote::Ready(vec![3]));
}

#[test]
fn first_load_failure_is_reported() {
    let next = Remote::<Vec<u32>>::Loading.refreshed(Err::<Vec<u32>, _>("backend down"));
    assert_eq!(next, Remote::Failed("backend down".to_owned()));

    let retry = next.refreshed(Err::<Vec<u32>, _>("still down"));
    assert_eq!(retry, Remote::Failed("still down".to_owned()));
}

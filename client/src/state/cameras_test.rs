use super::*;

#[test]
fn blank_term_keeps_all_cameras() {
    let cameras = fallback_cameras();
    assert_eq!(filter_cameras(&cameras, "  ").len(), 4);
}

#[test]
fn filter_matches_name_case_insensitively() {
    let cameras = fallback_cameras();
    let hits = filter_cameras(&cameras, "PARKING");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn filter_matches_location() {
    let cameras = fallback_cameras();
    let hits = filter_cameras(&cameras, "side door");
    assert_eq!(hits.iter().map(|c| c.id).collect::<Vec<_>>(), vec![4]);
}

#[test]
fn filter_skips_cameras_without_location() {
    let mut cameras = fallback_cameras();
    cameras[0].location = None;
    let hits = filter_cameras(&cameras, "front door");
    assert!(hits.is_empty());
}

#[test]
fn stats_count_active_and_inactive() {
    let stats = CameraStats::from_cameras(&fallback_cameras());
    assert_eq!(stats, CameraStats { total: 4, active: 3, inactive: 1 });
}

#[test]
fn stats_of_empty_list_are_zero() {
    assert_eq!(CameraStats::from_cameras(&[]), CameraStats::default());
}

#[test]
fn demo_cameras_are_all_active() {
    let cameras = demo_cameras();
    assert_eq!(cameras.len(), 3);
    assert!(cameras.iter().all(|c| c.is_active));
}

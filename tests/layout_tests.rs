use slidekit::geometry::{Placement, container_height, cover_fit};

fn placement_close(got: Placement, want: (f64, f64, f64, f64), eps: f64) {
    assert!(
        (got.width - want.0).abs() <= eps,
        "width mismatch: {got:?} vs {want:?}"
    );
    assert!(
        (got.height - want.1).abs() <= eps,
        "height mismatch: {got:?} vs {want:?}"
    );
    assert!(
        (got.left - want.2).abs() <= eps,
        "left mismatch: {got:?} vs {want:?}"
    );
    assert!(
        (got.top - want.3).abs() <= eps,
        "top mismatch: {got:?} vs {want:?}"
    );
}

#[test]
fn matching_ratios_fill_exactly() {
    // 400x200 into 200x100: same 2:1 aspect, so the fit is exact with no
    // offsets on either axis.
    let p = cover_fit(400.0, 200.0, 200.0, 100.0);
    placement_close(p, (200.0, 100.0, 0.0, 0.0), 0.001);
}

#[test]
fn square_image_in_wide_area_is_height_constrained() {
    // 100x100 into 300x100: scaling to the area height gives width
    // 100*100/100 = 100 <= 300, so the height is pinned and the image
    // centered horizontally: left = floor((300-100)/2) = 100.
    let p = cover_fit(100.0, 100.0, 300.0, 100.0);
    placement_close(p, (100.0, 100.0, 100.0, 0.0), 0.001);
}

#[test]
fn relatively_tall_photo_centers_horizontally() {
    // 400x300 into 200x100: 100*400/300 = 133.33 <= 200, height pinned.
    // width = 133.33, left = floor((200 - 133.33)/2) = 33.
    let p = cover_fit(400.0, 300.0, 200.0, 100.0);
    placement_close(p, (400.0 / 3.0, 100.0, 33.0, 0.0), 0.001);
}

#[test]
fn relatively_wide_photo_centers_vertically() {
    // 400x100 into 200x100: 100*400/100 = 400 > 200, width pinned.
    // height = 200*100/400 = 50, top = floor((100-50)/2) = 25.
    let p = cover_fit(400.0, 100.0, 200.0, 100.0);
    placement_close(p, (200.0, 50.0, 0.0, 25.0), 0.001);
}

#[test]
fn scaled_width_snaps_within_one_pixel() {
    // Scaling to the area height yields width 199.58; that is within one
    // pixel of the 200-wide area, so the width snaps to 200 exactly while
    // the offset still comes from the unsnapped value.
    let p = cover_fit(299.0, 200.0, 200.0, 133.5);
    assert_eq!(p.width, 200.0);
    assert_eq!(p.height, 133.5);
    assert_eq!(p.left, 0.0);
    assert_eq!(p.top, 0.0);
}

#[test]
fn scaled_height_snaps_within_one_pixel() {
    // 300x200 into 150x100.6: width pinned (100.6*300/200 = 150.9 > 150),
    // scaled height 150*200/300 = 100, within a pixel of 100.6.
    let p = cover_fit(300.0, 200.0, 150.0, 100.6);
    assert_eq!(p.height, 100.6);
    assert_eq!(p.width, 150.0);
    assert_eq!(p.top, 0.0);
}

#[test]
fn container_height_follows_ratio() {
    assert!((container_height(600.0, 2.0 / 3.0, None) - 400.0).abs() < 1e-9);
    assert!((container_height(600.0, 2.0 / 3.0, Some(40.0)) - 440.0).abs() < 1e-9);
}

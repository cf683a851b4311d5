use crate::event::ImageEvent;
use crate::reconcile::{ReconcileError, image_index, reconcile_image_paths};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn ts(s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 7, 22)
        .unwrap()
        .and_hms_opt(0, 0, s)
        .unwrap()
}

fn images(paths: &[&str]) -> Vec<ImageEvent> {
    paths
        .iter()
        .enumerate()
        .map(|(i, p)| ImageEvent {
            timestamp: ts(i as u32),
            file_path: p.to_string(),
        })
        .collect()
}

#[test]
fn pads_to_width_of_batch_size() {
    // Arrange
    let paths: Vec<String> = (0..12).map(|i| format!("/data/images/image_{i}.jpg")).collect();
    let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
    let mut events = images(&refs);

    // Act
    reconcile_image_paths(&mut events).unwrap();

    // Assert
    let fixed: Vec<_> = events.iter().map(|e| e.file_path.clone()).collect();
    let expected: Vec<_> = (0..12)
        .map(|i| format!("/data/images/image_{i:02}.jpg"))
        .collect();
    assert_eq!(fixed, expected);
}

#[test]
fn keeps_numeric_index_and_order() {
    // Arrange
    let mut events = images(&["/d/image_7.jpg", "/d/image_3.jpg", "/d/image_11.jpg"]);

    // Act
    reconcile_image_paths(&mut events).unwrap();

    // Assert
    let fixed: Vec<_> = events.iter().map(|e| e.file_path.as_str()).collect();
    assert_eq!(fixed, vec!["/d/image_7.jpg", "/d/image_3.jpg", "/d/image_11.jpg"]);
    assert_eq!(events[1].timestamp, ts(1));
}

#[test]
fn narrows_over_padded_names() {
    // Names wider than the batch width are re-padded, not kept.
    // Arrange
    let mut events = images(&["/d/image_0003.jpg", "/d/image_4.jpg"]);

    // Act
    reconcile_image_paths(&mut events).unwrap();

    // Assert
    assert_eq!(events[0].file_path, "/d/image_3.jpg");
}

#[test]
fn normalizes_extension_to_jpg() {
    // Arrange
    let mut events = images(&["/d/image_5.jpeg"]);

    // Act
    reconcile_image_paths(&mut events).unwrap();

    // Assert
    assert_eq!(events[0].file_path, "/d/image_5.jpg");
}

#[test]
fn relative_paths_stay_relative() {
    // Arrange
    let mut events = images(&["images/image_1.jpg"]);

    // Act
    reconcile_image_paths(&mut events).unwrap();

    // Assert
    assert_eq!(events[0].file_path, "images/image_1.jpg");
}

#[test]
fn empty_batch_is_a_no_op() {
    // Arrange
    let mut events: Vec<ImageEvent> = Vec::new();

    // Act / Assert
    reconcile_image_paths(&mut events).unwrap();
}

#[test]
fn unexpected_file_name_is_an_error() {
    // Arrange
    let mut events = images(&["/d/snapshot-4.jpg"]);

    // Act
    let err = reconcile_image_paths(&mut events).unwrap_err();

    // Assert
    match err {
        ReconcileError::MalformedImagePath { path } => assert_eq!(path, "/d/snapshot-4.jpg"),
    }
}

#[test]
fn image_index_reads_embedded_number() {
    assert_eq!(image_index("/d/image_042.jpg"), Some(42));
    assert_eq!(image_index("image_0.png"), Some(0));
    assert_eq!(image_index("/d/image_.jpg"), None);
    assert_eq!(image_index("/d/image_4a.jpg"), None);
    assert_eq!(image_index("/d/image_4"), None);
}

use crate::parse::{ParseError, parse_monitor_log};
use crate::window::TimeWindow;
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn ts(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 7, 22)
        .unwrap()
        .and_hms_milli_opt(h, m, s, ms)
        .unwrap()
}

const SAMPLE: &str = "\
22-Jul-2023 03:05:41.141 [INFO] Capturing /media/farm/images/image_10.jpg
22-Jul-2023 03:05:43.182 [INFO] CO2 is HIGH (1528.5 >= 1000), turning ON  OUTLET 6 (fan)
22-Jul-2023 03:05:43.183 [INFO] Setting register bits to 00000010
22-Jul-2023 03:05:57.989 [INFO] HUM is LOW  (94.8 <= 95), turning ON  outlet 7 (humidifier)
22-Jul-2023 03:05:57.990 [INFO] Setting register bits to 00000011
22-Jul-2023 03:06:43.638 [INFO] Capturing /media/farm/images/image_11.jpg
";

//-----------------------------------------------------------------------------
// Classification
//-----------------------------------------------------------------------------
#[test]
fn splits_captures_and_state_changes() {
    // Act
    let log = parse_monitor_log(SAMPLE, &TimeWindow::unbounded()).unwrap();

    // Assert
    assert_eq!(log.images.len(), 2);
    assert_eq!(log.actions.len(), 2);

    assert_eq!(log.images[0].timestamp, ts(3, 5, 41, 141));
    assert_eq!(log.images[0].file_path, "/media/farm/images/image_10.jpg");
    assert_eq!(log.images[1].file_path, "/media/farm/images/image_11.jpg");
}

#[test]
fn extracts_state_change_fields() {
    // Act
    let log = parse_monitor_log(SAMPLE, &TimeWindow::unbounded()).unwrap();

    // Assert
    let fan = &log.actions[0];
    assert_eq!(fan.timestamp, ts(3, 5, 43, 182));
    assert_eq!(fan.measure, "CO2");
    assert!(fan.state);
    assert_eq!(fan.device, "fan");

    let hum = &log.actions[1];
    assert_eq!(hum.measure, "HUM");
    assert!(hum.state);
    assert_eq!(hum.device, "humidifier");
}

#[test]
fn off_lines_produce_false_state() {
    // Arrange
    let text =
        "22-Jul-2023 04:00:00.000 [INFO] CO2 is LOW (800.1 <= 900), turning OFF OUTLET 6 (fan)";

    // Act
    let log = parse_monitor_log(text, &TimeWindow::unbounded()).unwrap();

    // Assert
    assert_eq!(log.actions.len(), 1);
    assert!(!log.actions[0].state);
}

#[test]
fn device_is_lowercased_and_unwrapped() {
    // Arrange
    let text =
        "22-Jul-2023 04:00:00.000 [INFO] TEMP is LOW (18.2 <= 20), turning ON  outlet 3 (Heater)";

    // Act
    let log = parse_monitor_log(text, &TimeWindow::unbounded()).unwrap();

    // Assert
    assert_eq!(log.actions[0].device, "heater");
}

#[test]
fn night_on_is_corrected_to_off() {
    // Arrange
    let text = "01-Jan-2024 00:00:00.000 [INFO] LIGHT is NIGHT (0 <= 10), turning ON  lights (8)";

    // Act
    let log = parse_monitor_log(text, &TimeWindow::unbounded()).unwrap();

    // Assert
    assert_eq!(log.actions.len(), 1);
    assert_eq!(log.actions[0].measure, "LIGHT");
    assert!(!log.actions[0].state);
}

#[test]
fn day_on_is_left_alone() {
    // Arrange
    let text = "01-Jan-2024 08:00:00.000 [INFO] LIGHT is DAY (9 >= 8), turning ON  outlet 8 (lights)";

    // Act
    let log = parse_monitor_log(text, &TimeWindow::unbounded()).unwrap();

    // Assert
    assert!(log.actions[0].state);
    assert_eq!(log.actions[0].device, "lights");
}

#[test]
fn short_lines_with_keywords_are_ignored() {
    // Arrange
    let text = "22-Jul-2023 04:00:00.000 [INFO] fan is turning";

    // Act
    let log = parse_monitor_log(text, &TimeWindow::unbounded()).unwrap();

    // Assert
    assert!(log.images.is_empty());
    assert!(log.actions.is_empty());
}

#[test]
fn unrecognized_lines_are_not_errors() {
    // Arrange
    let text = "\
22-Jul-2023 04:00:00.000 [INFO] Setting register bits to 00000011
22-Jul-2023 04:00:01.000 [DEBUG] poll
";

    // Act
    let log = parse_monitor_log(text, &TimeWindow::unbounded()).unwrap();

    // Assert
    assert_eq!(log, Default::default());
}

#[test]
fn collapses_repeated_whitespace() {
    // Arrange
    let text = "22-Jul-2023  03:05:41.141  [INFO]   Capturing   /tmp/image_1.jpg";

    // Act
    let log = parse_monitor_log(text, &TimeWindow::unbounded()).unwrap();

    // Assert
    assert_eq!(log.images[0].file_path, "/tmp/image_1.jpg");
}

//-----------------------------------------------------------------------------
// Ordering / window
//-----------------------------------------------------------------------------
#[test]
fn both_lists_are_sorted() {
    // Arrange
    let text = "\
22-Jul-2023 05:00:00.000 [INFO] Capturing /tmp/image_2.jpg
22-Jul-2023 04:00:00.000 [INFO] Capturing /tmp/image_1.jpg
22-Jul-2023 05:00:00.000 [INFO] CO2 is LOW (800.1 <= 900), turning OFF OUTLET 6 (fan)
22-Jul-2023 04:00:00.000 [INFO] CO2 is HIGH (1528.5 >= 1000), turning ON  OUTLET 6 (fan)
";

    // Act
    let log = parse_monitor_log(text, &TimeWindow::unbounded()).unwrap();

    // Assert
    assert_eq!(log.images[0].file_path, "/tmp/image_1.jpg");
    assert!(log.actions[0].state);
    assert!(!log.actions[1].state);
}

#[test]
fn window_is_inclusive_at_millisecond_resolution() {
    // Arrange
    let text = "\
22-Jul-2023 03:59:59.999 [INFO] Capturing /tmp/image_0.jpg
22-Jul-2023 04:00:00.000 [INFO] Capturing /tmp/image_1.jpg
22-Jul-2023 05:00:00.000 [INFO] Capturing /tmp/image_2.jpg
22-Jul-2023 05:00:00.001 [INFO] Capturing /tmp/image_3.jpg
";
    let window = TimeWindow::new(Some(ts(4, 0, 0, 0)), Some(ts(5, 0, 0, 0)));

    // Act
    let log = parse_monitor_log(text, &window).unwrap();

    // Assert
    let paths: Vec<_> = log.images.iter().map(|e| e.file_path.as_str()).collect();
    assert_eq!(paths, vec!["/tmp/image_1.jpg", "/tmp/image_2.jpg"]);
}

//-----------------------------------------------------------------------------
// Errors
//-----------------------------------------------------------------------------
#[test]
fn malformed_timestamp_aborts_parse() {
    // Arrange
    let text = "\
22-Jul-2023 03:05:41.141 [INFO] Capturing /tmp/image_1.jpg
not a timestamp at all
";

    // Act
    let err = parse_monitor_log(text, &TimeWindow::unbounded()).unwrap_err();

    // Assert
    match err {
        ParseError::MalformedTimestamp { line_no, .. } => assert_eq!(line_no, 2),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn capture_without_path_is_an_error() {
    // Arrange
    let text = "22-Jul-2023 03:05:41.141 [INFO] Capturing";

    // Act
    let err = parse_monitor_log(text, &TimeWindow::unbounded()).unwrap_err();

    // Assert
    assert!(matches!(err, ParseError::MissingImagePath { line_no: 1, .. }));
}

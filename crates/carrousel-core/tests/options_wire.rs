//! Integration tests for the options wire format and movement signals.

use std::sync::Arc;

use carrousel_core::{CarrouselError, CarrouselOptions, Signal};
use parking_lot::Mutex;

#[test]
fn test_reference_page_options() {
    let paged =
        CarrouselOptions::from_json(r#"{"slidesVisible": 3, "slidesToScroll": 2}"#).unwrap();
    assert_eq!(paged.slides_visible(), 3);
    assert_eq!(paged.slides_to_scroll(), 2);
    assert!(!paged.is_loop());

    let looping =
        CarrouselOptions::from_json(r#"{"slidesVisible": 3, "slidesToScroll": 2, "loop": true}"#)
            .unwrap();
    assert_eq!(looping, paged.with_loop(true));
}

#[test]
fn test_options_round_trip_through_json() {
    let options = CarrouselOptions::new()
        .with_slides_visible(4)
        .with_slides_to_scroll(4)
        .with_loop(true);
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(CarrouselOptions::from_json(&json).unwrap(), options);
}

#[test]
fn test_malformed_options_error() {
    let err = CarrouselOptions::from_json(r#"{"slidesVisible": "three"}"#).unwrap_err();
    assert!(matches!(err, CarrouselError::InvalidOptions { .. }));
    assert!(err.to_string().starts_with("Invalid carrousel options"));
}

#[test]
fn test_signal_shared_across_threads() {
    let signal = Arc::new(Signal::<usize>::new());
    let received = Arc::new(Mutex::new(Vec::new()));

    let received_clone = received.clone();
    signal.connect(move |&index| received_clone.lock().push(index));

    let signal_clone = signal.clone();
    std::thread::spawn(move || signal_clone.emit(4))
        .join()
        .unwrap();
    signal.emit(0);

    assert_eq!(*received.lock(), vec![4, 0]);
}

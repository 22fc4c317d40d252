use super::*;

fn cfg(side: u32) -> SinkConfig {
    SinkConfig {
        canvas: Canvas::square(side),
        frame_count: 2,
    }
}

#[test]
fn in_memory_sink_captures_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(4)).unwrap();
    let frame = FrameRgb::blank(Canvas::square(4));
    sink.push_frame(FrameIndex(0), &frame).unwrap();
    sink.push_frame(FrameIndex(1), &frame).unwrap();
    sink.end().unwrap();

    assert!(sink.is_ended());
    assert_eq!(sink.config(), Some(cfg(4)));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
}

#[test]
fn push_before_begin_fails() {
    let mut sink = InMemorySink::new();
    let frame = FrameRgb::blank(Canvas::square(4));
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
}

#[test]
fn size_mismatch_and_reordering_are_rejected() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(4)).unwrap();

    let wrong = FrameRgb::blank(Canvas::square(5));
    let err = sink.push_frame(FrameIndex(0), &wrong).unwrap_err();
    assert!(err.to_string().contains("frame size mismatch"));

    let frame = FrameRgb::blank(Canvas::square(4));
    sink.push_frame(FrameIndex(3), &frame).unwrap();
    assert!(sink.push_frame(FrameIndex(3), &frame).is_err());
    assert!(sink.push_frame(FrameIndex(1), &frame).is_err());
}

#[test]
fn truncated_data_is_rejected() {
    let mut frame = FrameRgb::blank(Canvas::square(4));
    frame.data.pop();
    assert!(check_frame(&cfg(4), None, FrameIndex(0), &frame).is_err());
}

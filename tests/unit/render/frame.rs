use super::*;

fn seq_of(n: usize) -> ColorSequence {
    ColorSequence::new(
        (0..n)
            .map(|i| Rgb8::new((i % 251) as u8, 7, 200))
            .collect(),
    )
}

#[test]
fn frame_is_always_canvas_sized() {
    let canvas = Canvas::square(16);
    for n in [0usize, 1, 255, 256, 257, 10_000] {
        let (frame, _) = build_frame(&seq_of(n), canvas);
        assert_eq!(frame.canvas(), canvas);
        assert_eq!(frame.data.len(), 16 * 16 * 3);
    }
}

#[test]
fn short_sequence_fills_prefix_and_leaves_black() {
    let canvas = Canvas {
        width: 4,
        height: 3,
    };
    let seq = seq_of(5);
    let (frame, fill) = build_frame(&seq, canvas);
    assert_eq!(fill, Fill::Underfilled { written: 5 });

    for i in 0..12u32 {
        let px = frame.pixel(i % 4, i / 4).unwrap();
        if (i as usize) < seq.len() {
            assert_eq!(px, seq.as_slice()[i as usize]);
        } else {
            assert_eq!(px, Rgb8::black());
        }
    }
}

#[test]
fn long_sequence_is_truncated_row_major() {
    let canvas = Canvas::square(2);
    let seq = seq_of(7);
    let (frame, fill) = build_frame(&seq, canvas);
    assert_eq!(fill, Fill::Truncated { dropped: 3 });
    assert_eq!(frame.pixel(1, 0), Some(seq.as_slice()[1]));
    assert_eq!(frame.pixel(0, 1), Some(seq.as_slice()[2]));
    assert_eq!(frame.pixel(1, 1), Some(seq.as_slice()[3]));
    assert_eq!(frame.pixel(2, 0), None);
}

#[test]
fn exact_sequence_at_default_size() {
    let canvas = Canvas::default();
    let (frame, fill) = build_frame(&seq_of(262_144), canvas);
    assert_eq!(fill, Fill::Exact);
    assert_eq!((frame.width, frame.height), (512, 512));
}

#[test]
fn rgba_copy_is_opaque() {
    let (frame, _) = build_frame(&seq_of(1), Canvas::square(2));
    let rgba = frame.to_rgba_image().unwrap();
    assert_eq!(rgba.dimensions(), (2, 2));
    assert_eq!(rgba.get_pixel(0, 0).0, [0, 7, 200, 255]);
    assert_eq!(rgba.get_pixel(1, 1).0, [0, 0, 0, 255]);
}

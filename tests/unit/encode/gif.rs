use super::*;
use crate::foundation::core::{Canvas, Rgb8};
use image::AnimationDecoder as _;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_gif").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn solid(canvas: Canvas, c: Rgb8) -> FrameRgb {
    let mut f = FrameRgb::blank(canvas);
    for px in f.data.chunks_exact_mut(3) {
        px.copy_from_slice(&c.to_array());
    }
    f
}

fn decode(path: &Path) -> Vec<image::Frame> {
    let r = std::io::BufReader::new(File::open(path).unwrap());
    image::codecs::gif::GifDecoder::new(r)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

#[test]
fn opts_validation_catches_bad_values() {
    assert!(GifSinkOpts::new("out.gif").validate().is_ok());
    assert!(
        GifSinkOpts {
            speed: 0,
            ..GifSinkOpts::new("out.gif")
        }
        .validate()
        .is_err()
    );
    assert!(
        GifSinkOpts {
            speed: 31,
            ..GifSinkOpts::new("out.gif")
        }
        .validate()
        .is_err()
    );
    assert!(GifSinkOpts::new("..").validate().is_err());
}

#[test]
fn partial_path_is_a_sibling() {
    assert_eq!(
        partial_path(Path::new("out/result.gif")),
        PathBuf::from("out/result.gif.partial")
    );
}

#[test]
fn writes_looping_animation_with_all_frames() {
    let dir = scratch_dir("loop");
    let out = dir.join("anim.gif");
    let canvas = Canvas::square(8);

    let mut sink = GifSink::new(GifSinkOpts::new(&out));
    sink.begin(SinkConfig {
        canvas,
        frame_count: 3,
    })
    .unwrap();
    let colors = [
        Rgb8::new(168, 168, 120),
        Rgb8::new(240, 128, 48),
        Rgb8::new(104, 144, 240),
    ];
    for (i, c) in colors.iter().enumerate() {
        sink.push_frame(FrameIndex(i as u64), &solid(canvas, *c))
            .unwrap();
    }
    sink.end().unwrap();

    assert_eq!(sink.frames_written(), 3);
    assert!(!partial_path(&out).exists());

    let frames = decode(&out);
    assert_eq!(frames.len(), 3);
    for (frame, c) in frames.iter().zip(colors) {
        assert_eq!(frame.buffer().dimensions(), (8, 8));
        assert_eq!(frame.buffer().get_pixel(0, 0).0, [c.r, c.g, c.b, 255]);
    }

    // NETSCAPE2.0 application extension with loop count 0 (forever).
    let bytes = std::fs::read(&out).unwrap();
    let pos = bytes
        .windows(11)
        .position(|w| w == b"NETSCAPE2.0")
        .expect("loop extension present");
    assert_eq!(&bytes[pos + 11..pos + 15], &[3, 1, 0, 0]);
}

#[test]
fn existing_output_is_replaced() {
    let dir = scratch_dir("overwrite");
    let out = dir.join("anim.gif");
    std::fs::write(&out, b"not a gif").unwrap();

    let canvas = Canvas::square(4);
    let mut sink = GifSink::new(GifSinkOpts::new(&out));
    sink.begin(SinkConfig {
        canvas,
        frame_count: 1,
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &FrameRgb::blank(canvas))
        .unwrap();
    sink.end().unwrap();

    assert!(std::fs::read(&out).unwrap().starts_with(b"GIF89a"));
}

#[test]
fn end_without_frames_fails_and_leaves_nothing() {
    let dir = scratch_dir("empty");
    let out = dir.join("anim.gif");

    let mut sink = GifSink::new(GifSinkOpts::new(&out));
    sink.begin(SinkConfig {
        canvas: Canvas::square(4),
        frame_count: 0,
    })
    .unwrap();
    assert!(matches!(sink.end(), Err(BattleGifError::Validation(_))));
    drop(sink);

    assert!(!out.exists());
    assert!(!partial_path(&out).exists());
}

#[test]
fn dropped_sink_removes_partial_output() {
    let dir = scratch_dir("dropped");
    let out = dir.join("anim.gif");
    let canvas = Canvas::square(4);

    let mut sink = GifSink::new(GifSinkOpts::new(&out));
    sink.begin(SinkConfig {
        canvas,
        frame_count: 2,
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &FrameRgb::blank(canvas))
        .unwrap();
    assert!(partial_path(&out).exists());
    drop(sink);

    assert!(!partial_path(&out).exists());
    assert!(!out.exists());
}

#[test]
fn mismatched_frame_is_rejected() {
    let dir = scratch_dir("mismatch");
    let mut sink = GifSink::new(GifSinkOpts::new(dir.join("anim.gif")));
    sink.begin(SinkConfig {
        canvas: Canvas::square(4),
        frame_count: 1,
    })
    .unwrap();
    let err = sink
        .push_frame(FrameIndex(0), &FrameRgb::blank(Canvas::square(5)))
        .unwrap_err();
    assert!(err.to_string().contains("frame size mismatch"));
}

#[derive(Debug)]
struct Switchable(std::rc::Rc<std::cell::Cell<bool>>);

impl Write for Switchable {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.0.get() {
            Ok(buf.len())
        } else {
            Err(std::io::Error::other("device full"))
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if self.0.get() {
            Ok(())
        } else {
            Err(std::io::Error::other("device full"))
        }
    }
}

fn one_frame_encoder<W: Write>(w: W) -> ::gif::Encoder<BufWriter<W>> {
    let mut enc = ::gif::Encoder::new(BufWriter::new(w), 2, 2, &[]).unwrap();
    let mut px = vec![255u8; 16];
    enc.write_frame(&::gif::Frame::from_rgba_speed(2, 2, &mut px, 10))
        .unwrap();
    enc
}

#[test]
fn finish_writes_trailer() {
    let bytes = finish(one_frame_encoder(Vec::new())).unwrap();
    assert!(bytes.starts_with(b"GIF89a"));
    assert_eq!(bytes.last(), Some(&0x3b));
}

#[test]
fn finish_reports_failed_final_write() {
    let ok = std::rc::Rc::new(std::cell::Cell::new(true));
    let enc = one_frame_encoder(Switchable(ok.clone()));
    ok.set(false);

    let err = finish(enc).unwrap_err();
    assert!(matches!(err, BattleGifError::Encode(_)));
    assert!(err.to_string().contains("device full"));
}

#[test]
fn delay_is_rounded_up_to_centiseconds() {
    assert_eq!(delay_centis(0), 0);
    assert_eq!(delay_centis(40), 4);
    assert_eq!(delay_centis(45), 5);
    assert_eq!(delay_centis(u32::MAX), u16::MAX);
}

use image::{Rgba, RgbaImage};
use yuv_frames::{
    Argb, DecodeOptions, PixelFormat, YuvImage, decode, decode_i420, decode_nv21, encode,
    encode_i420, encode_nv21, repack, repack_i420_to_nv21,
};

fn make_argb_image(width: usize, height: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(width * height);

    for y in 0..height {
        let g = (y * 255 / height) as u8;

        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let b = ((x + y) * 255 / (width + height)) as u8;

            out.push(u32::from_rgba(r, g, b, 0xff));
        }
    }

    out
}

#[test]
fn gray_ramp_survives_round_trip() {
    let (width, height) = (256, 2);

    let pixels: Vec<u32> = (0..height)
        .flat_map(|_| (0..width).map(|v| u32::from_rgba(v as u8, v as u8, v as u8, 0xff)))
        .collect();

    let mut i420 = vec![0u8; PixelFormat::I420.buffer_size(width, height)];
    encode_i420(&mut i420, &pixels, width, height).unwrap();

    let mut decoded = vec![0u32; width * height];
    decode_i420(&mut decoded, &i420, width, height, DecodeOptions::plain()).unwrap();

    for (src, dst) in pixels.iter().zip(&decoded) {
        assert!(src.red().abs_diff(dst.red()) <= 2, "{src:08x} {dst:08x}");
        assert_eq!(dst.red(), dst.green());
        assert_eq!(dst.green(), dst.blue());
        assert_eq!(dst.alpha(), 0xff);
    }
}

#[test]
fn white_decodes_to_inverted_white() {
    let mut i420 = [0u8; 6];
    encode_i420(&mut i420, &[0xff_ff_ff_ff; 4], 2, 2).unwrap();

    let mut pixels = [0u32; 4];
    decode_i420(&mut pixels, &i420, 2, 2, DecodeOptions::default()).unwrap();

    assert_eq!(pixels, [0xfe_fa_fa_fb; 4]);
}

#[test]
fn buffer_sizes() {
    for (width, height) in [(2, 2), (4, 2), (16, 10), (640, 480), (1920, 1080)] {
        let expected = width * height * 3 / 2;

        assert_eq!(PixelFormat::I420.buffer_size(width, height), expected);
        assert_eq!(PixelFormat::NV21.buffer_size(width, height), expected);
    }
}

#[test]
fn repacked_i420_equals_nv21() {
    for (width, height) in [(2, 2), (6, 4), (32, 18)] {
        let pixels = make_argb_image(width, height);

        let mut i420 = vec![0u8; PixelFormat::I420.buffer_size(width, height)];
        let mut nv21 = vec![0u8; PixelFormat::NV21.buffer_size(width, height)];
        let mut repacked = vec![0u8; nv21.len()];

        encode_i420(&mut i420, &pixels, width, height).unwrap();
        encode_nv21(&mut nv21, &pixels, width, height).unwrap();
        repack_i420_to_nv21(&i420, &mut repacked, width, height, width, width / 2, width / 2)
            .unwrap();

        assert_eq!(repacked, nv21, "{width}x{height}");
    }
}

#[test]
fn repack_padded_camera_frame() {
    let (width, height) = (30, 20);
    let pixels = make_argb_image(width, height);

    let mut i420 = YuvImage::from_buffer(
        PixelFormat::I420,
        vec![0u8; 32 * 20 + 16 * 10 + 24 * 10],
        Some(vec![32, 16, 24]),
        width,
        height,
    )
    .unwrap();
    encode(&pixels, &mut i420).unwrap();

    let mut nv21 = YuvImage::from_buffer(
        PixelFormat::NV21,
        vec![0u8; 32 * 30],
        Some(vec![32, 32]),
        width,
        height,
    )
    .unwrap();
    repack(&i420, &mut nv21).unwrap();

    let mut from_i420 = vec![0u32; width * height];
    let mut from_nv21 = vec![0u32; width * height];

    decode(&i420, &mut from_i420, DecodeOptions::default()).unwrap();
    decode(&nv21, &mut from_nv21, DecodeOptions::default()).unwrap();

    assert_eq!(from_i420, from_nv21);
}

#[test]
fn nv21_round_trip_keeps_luma_structure() {
    let (width, height) = (64, 48);
    let pixels = make_argb_image(width, height);

    let mut nv21 = vec![0u8; PixelFormat::NV21.buffer_size(width, height)];
    encode_nv21(&mut nv21, &pixels, width, height).unwrap();

    let mut decoded = vec![0u32; width * height];
    decode_nv21(&mut decoded, &nv21, width, height, DecodeOptions::plain()).unwrap();

    let luma = |px: u32| {
        0.299 * px.red() as f32 + 0.587 * px.green() as f32 + 0.114 * px.blue() as f32
    };

    for (src, dst) in pixels.iter().zip(&decoded) {
        assert!((luma(*src) - luma(*dst)).abs() < 12.0, "{src:08x} {dst:08x}");
    }
}

#[cfg(feature = "multi-thread")]
#[test]
fn multi_thread_is_bit_identical() {
    use yuv_frames::{decode_multi_thread, encode_multi_thread};

    let (width, height) = (1280, 720);
    let pixels = make_argb_image(width, height);

    for format in PixelFormat::variants() {
        let mut single = YuvImage::blank(format, width, height);
        let mut multi = YuvImage::blank(format, width, height);

        encode(&pixels, &mut single).unwrap();
        encode_multi_thread(&pixels, &mut multi).unwrap();

        assert_eq!(single.buffer(), multi.buffer());

        let mut single_argb = vec![0u32; width * height];
        let mut multi_argb = vec![0u32; width * height];

        decode(&single, &mut single_argb, DecodeOptions::default()).unwrap();
        decode_multi_thread(&multi, &mut multi_argb, DecodeOptions::default()).unwrap();

        assert_eq!(single_argb, multi_argb);
    }
}

#[test]
fn nv21_to_png() {
    let (width, height) = (320, 240);
    let pixels = make_argb_image(width, height);

    let mut nv21 = vec![0u8; PixelFormat::NV21.buffer_size(width, height)];
    encode_nv21(&mut nv21, &pixels, width, height).unwrap();

    let mut decoded = vec![0u32; width * height];
    decode_nv21(&mut decoded, &nv21, width, height, DecodeOptions::plain()).unwrap();

    let buffer = RgbaImage::from_fn(width as u32, height as u32, |x, y| {
        let px = decoded[y as usize * width + x as usize];
        Rgba([px.red(), px.green(), px.blue(), px.alpha()])
    });

    buffer
        .save(concat!(env!("CARGO_TARGET_TMPDIR"), "/NV21_TO_ARGB.png"))
        .unwrap();
}

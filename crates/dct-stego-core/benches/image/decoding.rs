use criterion::{criterion_group, criterion_main, Criterion};
use dct_stego_core::Codec;
use image::{ImageBuffer, Rgb, RgbImage};

fn carrier() -> RgbImage {
    ImageBuffer::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, 70 + ((x + y) % 120) as u8]))
}

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let codec = Codec::default();
        let secret = codec
            .embed(&carrier(), "Hello World!")
            .expect("Cannot hide secret message");

        b.iter(|| {
            codec
                .extract(&secret)
                .expect("Cannot unveil secret message")
        })
    });

    c.bench_function("Image Decoding without message", |b| {
        let codec = Codec::default();
        let plain = carrier();

        b.iter(|| codec.extract(&plain).expect("Cannot scan image"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use dct_stego_core::Codec;
use image::{ImageBuffer, Rgb};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let plain_image =
            ImageBuffer::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, 70 + ((x + y) % 120) as u8]));
        let codec = Codec::default();
        let secret_message = "Hello World!";

        b.iter(|| {
            codec
                .embed(&plain_image, secret_message)
                .expect("Cannot write secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use geogrid::{BoundingBox, Geohash, GeohashIdentifier, Latitude, Longitude, Point};

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let nyc = Point::new(
        Longitude::from_degrees(-74.0060).unwrap(),
        Latitude::from_degrees(40.7128).unwrap(),
    );

    group.bench_function("encode_resolution_10", |b| {
        b.iter(|| Geohash::for_point(black_box(&nyc), black_box(10)))
    });

    group.bench_function("decode_resolution_10", |b| {
        b.iter(|| {
            // Fresh instance each round so the bounds cache never hits.
            Geohash::new(black_box("dr5regw3pp")).unwrap().bounds().width()
        })
    });

    group.finish();
}

fn benchmark_covering(c: &mut Criterion) {
    let mut group = c.benchmark_group("covering");

    let viewport = BoundingBox::builder()
        .north(Latitude::from_degrees(41.5).unwrap())
        .south(Latitude::from_degrees(40.0).unwrap())
        .east(Longitude::from_degrees(-73.0).unwrap())
        .west(Longitude::from_degrees(-75.0).unwrap())
        .build()
        .unwrap();
    let identifier = GeohashIdentifier::new();

    group.bench_function("cover_city_viewport", |b| {
        b.iter(|| identifier.get(black_box(&viewport)))
    });

    group.bench_function("cover_world", |b| {
        b.iter(|| identifier.get(black_box(&BoundingBox::WORLD)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_codec, benchmark_covering);
criterion_main!(benches);

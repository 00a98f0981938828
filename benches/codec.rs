use criterion::{criterion_group, criterion_main, Criterion};
use wkbkit::geo_traits::Dimension;
use wkbkit::geometry::{Coord, Geometry, LineString, Polygon};
use wkbkit::twkb::{self, TwkbWriteOptions};
use wkbkit::wkb::{self, WkbWriteOptions};

/// A polygon with a dense exterior and a handful of holes, large enough
/// that per-coordinate costs dominate over header handling.
fn dense_polygon() -> Geometry {
    let n = 10_000;
    let exterior = LineString::new(
        (0..=n)
            .map(|i| {
                let angle = i as f64 / n as f64 * std::f64::consts::TAU;
                Coord::xy(1000.0 * angle.cos(), 1000.0 * angle.sin())
            })
            .collect(),
        Dimension::XY,
    );
    let mut rings = vec![exterior];
    for hole in 0..8 {
        let cx = (hole as f64 - 4.0) * 100.0;
        rings.push(LineString::new(
            (0..=100)
                .map(|i| {
                    let angle = i as f64 / 100.0 * std::f64::consts::TAU;
                    Coord::xy(cx + 10.0 * angle.cos(), 10.0 * angle.sin())
                })
                .collect(),
            Dimension::XY,
        ));
    }
    Polygon::new(rings, Dimension::XY).into()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let geometry = dense_polygon();

    let wkb_options = WkbWriteOptions::default();
    let wkb_buf = wkb::to_wkb(&geometry, &wkb_options).unwrap();
    c.bench_function("encode dense polygon as WKB", |b| {
        b.iter(|| wkb::to_wkb(&geometry, &wkb_options).unwrap())
    });
    c.bench_function("decode dense polygon from WKB", |b| {
        b.iter(|| wkb::read_geometry(&wkb_buf).unwrap())
    });

    let twkb_options = TwkbWriteOptions::new().with_xy_precision(3);
    let twkb_buf = twkb::to_twkb(&geometry, &twkb_options).unwrap();
    c.bench_function("encode dense polygon as TWKB", |b| {
        b.iter(|| twkb::to_twkb(&geometry, &twkb_options).unwrap())
    });
    c.bench_function("decode dense polygon from TWKB", |b| {
        b.iter(|| twkb::read_geometry(&twkb_buf).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use shotzone::heatmap;
use shotzone::pitch::{CoordinateConverter, Convention, Point};
use shotzone::shot::{ShotRecord, ShotResult};
use shotzone::zone::{ZoneClassifier, ZoneId};
use tinyrand::{Rand, StdRand};

fn random_unit(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}

fn criterion_benchmark(c: &mut Criterion) {
    let converter = CoordinateConverter::statsbomb();
    let classifier = ZoneClassifier::default();

    // sanity check
    assert_eq!(Some(ZoneId::Zone7), classifier.classify(40.0, 108.0));

    c.bench_function("cri_classify_goalmouth", |b| {
        b.iter(|| classifier.classify(40.0, 117.0));
    });
    c.bench_function("cri_classify_unassigned", |b| {
        b.iter(|| classifier.classify(40.0, 10.0));
    });
    {
        let mut rand = StdRand::default();
        let points: Vec<_> = (0..1_000)
            .map(|_| converter.convert(random_unit(&mut rand), random_unit(&mut rand)))
            .collect();
        c.bench_function("cri_classify_1k_random", |b| {
            b.iter(|| {
                points
                    .iter()
                    .filter(|point| classifier.classify_point(point).is_some())
                    .count()
            });
        });
    }
    {
        let mut rand = StdRand::default();
        let shots: Vec<_> = (0..1_000)
            .map(|index| ShotRecord {
                id: index.to_string(),
                player: "Bench".into(),
                season: "2021".into(),
                minute: 1,
                situation: "OpenPlay".into(),
                date: None,
                location: Point::new(random_unit(&mut rand), random_unit(&mut rand)),
                convention: Convention::Understat,
                xg: 0.1,
                result: ShotResult::MissedShot,
            })
            .collect();
        c.bench_function("cri_convert_classify_aggregate_1k", |b| {
            b.iter(|| {
                let converted = converter.convert_shots(&shots).unwrap();
                let classified = classifier.classify_shots(converted).unwrap();
                heatmap::aggregate(&classified)
            });
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use amethyst_execution::{compute_shares, draw_winner, generate_segments, RandomDraws, WheelGeometry};
use amethyst_types::{Color, Item, Participant, Rarity};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn setup_roster(size: usize) -> Vec<Participant> {
    let mut participants: Vec<Participant> = (0..size)
        .map(|i| {
            Participant::new(format!("p{i}"), format!("Player {i}"), Color::rgb(i as u8, 0, 0))
                .with_item(Item {
                    id: format!("item{i}"),
                    name: "Knife".to_string(),
                    value: (i % 17 + 1) as f64 * 12.5,
                    rarity: Rarity::Godly,
                })
        })
        .collect();
    compute_shares(&mut participants).expect("roster has value");
    participants
}

fn wheel_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel_layout");
    let geometry = WheelGeometry::default();
    for size in [3usize, 30, 300] {
        let participants = setup_roster(size);
        let segments = generate_segments(&participants, &geometry);

        group.bench_function(BenchmarkId::new("generate_segments", size), |b| {
            b.iter(|| black_box(generate_segments(&participants, &geometry)))
        });

        group.bench_function(BenchmarkId::new("sector_paths", size), |b| {
            b.iter(|| {
                for segment in &segments {
                    black_box(segment.sector_path());
                }
            })
        });

        group.bench_function(BenchmarkId::new("draw_winner", size), |b| {
            let mut draws = RandomDraws::seeded(size as u64);
            b.iter(|| black_box(draw_winner(&participants, &segments, &mut draws)))
        });
    }
    group.finish();
}

criterion_group!(benches, wheel_layout);
criterion_main!(benches);

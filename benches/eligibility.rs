use camel_ring::core::BoardRng;
use camel_ring::rules::{eligible_fields, PlacementEligibility};
use camel_ring::setup::random_board;
use camel_ring::view::BoardView;
use camel_ring::{PlayerId, SelectedTile, TileKind};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_eligibility(c: &mut Criterion) {
    let board = random_board(&mut BoardRng::new(42), 4, 5);
    let rules = PlacementEligibility::standard();

    c.bench_function("eligible_fields", |b| {
        b.iter(|| eligible_fields(black_box(&board.tiles), black_box(&board.tokens)))
    });
    c.bench_function("eligibility_standard", |b| {
        b.iter(|| rules.eligible_fields(black_box(&board)))
    });
}

fn bench_render(c: &mut Criterion) {
    let board = random_board(&mut BoardRng::new(7), 4, 5);
    let view = BoardView::default();
    let selected = SelectedTile::new(TileKind::Oasis, PlayerId::new(0));

    c.bench_function("render_selecting", |b| {
        b.iter(|| view.render(black_box(&board), Some(&selected)))
    });
}

criterion_group!(benches, bench_eligibility, bench_render);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::{
    ALL_VARGAS, AyanamshaSystem, Graha, SAPTA_GRAHAS, ShadbalaInputs, all_shadbalas,
    ayanamsha_deg, current_dasha, kp_lords, nakshatra_from_longitude, rank_karakas,
    resolve_sidereal, vimshottari_hierarchy,
};

fn ayanamsha_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::Lahiri, black_box(jd)))
    });
    group.bench_function("true_lahiri", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::TrueLahiri, black_box(jd)))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let tropical_lon = 123.456;
    let aya = 24.1;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("resolve_sidereal", |b| {
        b.iter(|| resolve_sidereal(black_box(tropical_lon), black_box(aya), 2))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(tropical_lon - aya)))
    });
    group.bench_function("kp_lords", |b| {
        b.iter(|| kp_lords(black_box(tropical_lon - aya)))
    });
    group.finish();
}

fn varga_bench(c: &mut Criterion) {
    let pos = match resolve_sidereal(201.37, 24.1, 2) {
        Ok(p) => p,
        Err(e) => panic!("bench input: {e}"),
    };

    c.bench_function("all_vargas_one_position", |b| {
        b.iter(|| {
            for v in ALL_VARGAS {
                black_box(v.apply(black_box(pos)));
            }
        })
    });
}

fn karaka_bench(c: &mut Criterion) {
    let candidates: Vec<(Graha, f64)> = SAPTA_GRAHAS
        .iter()
        .enumerate()
        .map(|(i, g)| (*g, (i as f64 * 7.3) % 30.0))
        .collect();

    c.bench_function("rank_karakas", |b| {
        b.iter(|| rank_karakas(black_box(&candidates)))
    });
}

fn shadbala_bench(c: &mut Criterion) {
    let inputs = ShadbalaInputs {
        sidereal_lons: [15.0, 45.5, 100.0, 12.0, 250.0, 330.0, 200.0, 70.0, 250.0],
        ascendant_lon: 5.0,
    };

    c.bench_function("all_shadbalas", |b| {
        b.iter(|| all_shadbalas(black_box(&inputs)))
    });
}

fn dasha_bench(c: &mut Criterion) {
    let birth_jd = 2_447_893.5;
    let moon = 211.0;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("hierarchy_depth3", |b| {
        b.iter(|| vimshottari_hierarchy(black_box(birth_jd), black_box(moon), 3, 120.0))
    });
    group.bench_function("current_dasha", |b| {
        b.iter(|| current_dasha(black_box(moon), black_box(birth_jd), birth_jd + 15_000.0))
    });
    group.finish();
}

criterion_group!(
    benches,
    ayanamsha_bench,
    zodiac_bench,
    varga_bench,
    karaka_bench,
    shadbala_bench,
    dasha_bench
);
criterion_main!(benches);

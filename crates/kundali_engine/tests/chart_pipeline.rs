//! End-to-end chart generation through the table provider.

use approx::assert_abs_diff_eq;
use kundali_base::{
    ALL_GRAHAS, AyanamshaSystem, ChartPoint, Graha, Rashi, Relationship, sign_relationship,
    whole_sign_house,
};
use kundali_engine::{
    Chart, Engine, EngineConfig, EngineError, PositionRow, PositionTable, TableProvider,
    all_vargas, dasha_hierarchy, dasha_snapshot, generate_chart, kp_data,
};
use kundali_time::{BirthDetails, Instant};

fn birth() -> Instant {
    BirthDetails {
        year: 1990,
        month: 5,
        day: 15,
        hour: 10,
        minute: 30,
        second: 0.0,
        utc_offset_minutes: 330,
        latitude_deg: 28.6139,
        longitude_deg: 77.2090,
    }
    .to_instant()
    .unwrap()
}

fn table(jd: f64) -> PositionTable {
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = (110.0 + 29.5 * i as f64) % 360.0;
    }
    PositionTable {
        rows: vec![PositionRow {
            jd_ut: jd,
            sun: 54.31,
            moon: 318.92,
            mars: 349.05,
            mercury: 65.77,
            jupiter: 96.40,
            venus: 14.62,
            saturn: 294.18,
            true_node: 307.55,
            ascendant: 110.0,
            cusps: Some(cusps),
        }],
    }
}

fn engine() -> (Engine, Instant) {
    let instant = birth();
    let provider = TableProvider::new(table(instant.jd_ut));
    (Engine::new(provider, EngineConfig::default()).unwrap(), instant)
}

fn chart() -> Chart {
    let (engine, instant) = engine();
    generate_chart(&engine, instant).unwrap()
}

#[test]
fn every_degree_in_sign_is_below_thirty() {
    let c = chart();
    for r in c.records() {
        assert!(r.position.degree_in_sign >= 0.0 && r.position.degree_in_sign < 30.0);
        assert!((1..=12).contains(&r.house));
        assert!((1..=4).contains(&r.nakshatra.pada));
    }
}

#[test]
fn records_share_instant_and_ayanamsa() {
    let c = chart();
    assert_eq!(c.instant, birth());
    assert_eq!(c.metadata.ayanamsa, AyanamshaSystem::Lahiri);
    // Lahiri in 1990 is about 23.7 deg
    assert!(c.metadata.ayanamsa_deg > 23.5 && c.metadata.ayanamsa_deg < 23.9);
    let asc = c.record(ChartPoint::Ascendant).unwrap();
    assert_eq!(asc.position.sign, Rashi::Mithuna);
}

#[test]
fn json_round_trip_preserves_derived_fields() {
    let c = chart();
    let json = serde_json::to_string(&c).unwrap();
    let back: Chart = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);

    let asc = back.ascendant().sign;
    let placements = ALL_GRAHAS.map(|g| back.graha(g).unwrap().position.sign);
    for g in ALL_GRAHAS {
        let r = back.graha(g).unwrap();
        assert_eq!(whole_sign_house(r.position.sign, asc), c.graha(g).unwrap().house);
        assert_eq!(
            sign_relationship(g, r.position.sign, &placements),
            c.graha(g).unwrap().relationship
        );
    }
}

#[test]
fn nodes_are_opposite() {
    let c = chart();
    let rahu = c.graha(Graha::Rahu).unwrap().longitude;
    let ketu = c.graha(Graha::Ketu).unwrap().longitude;
    assert_abs_diff_eq!((ketu - rahu).rem_euclid(360.0), 180.0, epsilon = 1e-9);
}

#[test]
fn ascendant_has_no_relationship() {
    let c = chart();
    assert_eq!(
        c.record(ChartPoint::Ascendant).unwrap().relationship,
        Relationship::NotApplicable
    );
}

#[test]
fn vargas_are_complete() {
    let vargas = all_vargas(&chart()).unwrap();
    assert_eq!(vargas.len(), 23);
    assert!(vargas.iter().all(|v| v.placements.len() == 10));
}

#[test]
fn kp_data_uses_kp_ayanamsa() {
    let (engine, instant) = engine();
    let kp = kp_data(&engine, instant, None).unwrap();
    assert_eq!(kp.ayanamsa, AyanamshaSystem::KP);
    assert_eq!(kp.cusps.len(), 12);
    for (i, c) in kp.cusps.iter().enumerate() {
        assert_eq!(c.house as usize, i + 1);
        assert!(c.degree_in_sign < 30.0);
    }
    assert!(kp.birth_balance.balance_years <= kp.birth_balance.period_years);
}

#[test]
fn dasha_hierarchy_sums_to_cycle() {
    let (engine, instant) = engine();
    let h = dasha_hierarchy(&engine, &instant).unwrap();
    assert_eq!(h.levels.len(), 2);
    let mahas = &h.levels[0];
    // Nominal lengths of the first nine mahas cover one full 120-year cycle
    let nominal: f64 = mahas.iter().take(9).map(|p| p.nominal_days).sum();
    assert_abs_diff_eq!(nominal / 365.25, 120.0, epsilon = 1e-9);

    let q = instant.jd_ut + 3_000.0;
    let snap = dasha_snapshot(&engine, &instant, q).unwrap();
    assert_eq!(snap.periods.len(), 2);
    assert!(snap.periods.iter().all(|p| p.contains(q)));
}

#[test]
fn missing_row_surfaces_provider_error() {
    let (engine, instant) = engine();
    let later = Instant::from_jd(instant.jd_ut + 1.0, instant.location).unwrap();
    assert!(matches!(
        generate_chart(&engine, later),
        Err(EngineError::Provider { .. })
    ));
}

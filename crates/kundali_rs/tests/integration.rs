//! Integration tests for kundali_rs through the global engine.

use std::sync::Once;

use approx::assert_abs_diff_eq;
use kundali_rs::*;

static INIT: Once = Once::new();

fn birth() -> BirthDetails {
    BirthDetails {
        year: 1985,
        month: 11,
        day: 2,
        hour: 6,
        minute: 45,
        second: 0.0,
        utc_offset_minutes: 330,
        latitude_deg: 19.076,
        longitude_deg: 72.8777,
    }
}

fn ensure_init() {
    INIT.call_once(|| {
        let jd = birth().to_instant().expect("valid birth").jd_ut;
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = (205.0 + 30.0 * i as f64) % 360.0;
        }
        let table = PositionTable {
            rows: vec![PositionRow {
                jd_ut: jd,
                sun: 219.4,
                moon: 147.8,
                mars: 173.2,
                mercury: 231.6,
                jupiter: 306.1,
                venus: 197.3,
                saturn: 233.9,
                true_node: 42.7,
                ascendant: 205.0,
                cusps: Some(cusps),
            }],
        };
        init(EngineConfig::default(), TableProvider::new(table)).expect("engine init");
    });
}

#[test]
fn is_initialized_after_init() {
    ensure_init();
    assert!(is_initialized());
}

#[test]
fn second_init_is_rejected() {
    ensure_init();
    let again = init(EngineConfig::default(), TableProvider::new(PositionTable::default()));
    assert!(matches!(again, Err(KundaliError::AlreadyInitialized)));
}

#[test]
fn chart_has_ten_records() {
    ensure_init();
    let c = chart(&birth()).unwrap();
    assert_eq!(c.records().len(), 10);
    // 205 - ~23.66 = ~181.3: Libra rising
    assert_eq!(c.ascendant().sign, Rashi::Tula);
    assert_eq!(c.metadata.zodiac, "Sidereal (Lahiri)");
}

#[test]
fn chart_json_round_trips() {
    ensure_init();
    let json = chart_json(&birth()).unwrap();
    let back: Chart = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chart(&birth()).unwrap());
}

#[test]
fn navamsa_and_all_vargas() {
    ensure_init();
    let d9 = varga(&birth(), Varga::D9).unwrap();
    assert_eq!(d9.placements.len(), 10);
    assert_eq!(vargas(&birth()).unwrap().len(), 23);
}

#[test]
fn kp_and_dasha_agree_on_birth_lord() {
    ensure_init();
    let k = kp(&birth(), None).unwrap();
    let h = dasha(&birth()).unwrap();
    assert_eq!(h.levels[0][0].lord, k.birth_balance.lord);
    assert_abs_diff_eq!(
        h.levels[0][0].duration_years(),
        k.birth_balance.balance_years,
        epsilon = 1e-9
    );
}

#[test]
fn current_dasha_matches_snapshot() {
    ensure_init();
    let b = birth();
    let q = b.to_instant().unwrap().jd_ut + 10_000.0;
    let current = current_dasha_at(&b, q).unwrap();
    let snap = dasha_at(&b, q).unwrap();
    assert_eq!(current.levels[0].lord, snap.periods[0].lord);
    assert_eq!(current.levels[1].lord, snap.periods[1].lord);
}

#[test]
fn ai_payload_serializes() {
    ensure_init();
    let p = ai_payload(&birth(), None).unwrap();
    let json = p.to_json().unwrap();
    assert!(json.contains("\"Asc\""));
    assert!(json.contains("\"houses\""));
}

#[test]
fn invalid_birth_is_reported() {
    ensure_init();
    let mut b = birth();
    b.month = 13;
    assert!(matches!(chart(&b), Err(KundaliError::Engine(_))));
}

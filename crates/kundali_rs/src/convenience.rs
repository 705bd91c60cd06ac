use kundali_base::{
    ArudhaResult, CurrentDasha, DashaHierarchy, DashaSnapshot, Varga, VargaRule, current_dasha,
};
use kundali_engine::{
    Chart, KpData, VargaChart, all_vargas, custom_varga_chart, dasha_hierarchy, dasha_snapshot,
    generate_chart, kp_data, moon_seed, varga_chart,
};
use kundali_time::{BirthDetails, Instant};

use crate::error::KundaliError;
use crate::global::engine;
use crate::payload::AiPayload;

fn instant(birth: &BirthDetails) -> Result<Instant, KundaliError> {
    Ok(birth.to_instant()?)
}

/// Natal chart for a birth event.
pub fn chart(birth: &BirthDetails) -> Result<Chart, KundaliError> {
    Ok(generate_chart(engine()?, instant(birth)?)?)
}

/// One named divisional chart.
pub fn varga(birth: &BirthDetails, varga: Varga) -> Result<VargaChart, KundaliError> {
    Ok(varga_chart(&chart(birth)?, varga)?)
}

/// A divisional chart from a caller-defined rule.
pub fn custom_varga(birth: &BirthDetails, rule: &VargaRule) -> Result<VargaChart, KundaliError> {
    Ok(custom_varga_chart(&chart(birth)?, rule)?)
}

/// Every named divisional chart plus the Moon, Sun and Arudha lagna charts.
pub fn vargas(birth: &BirthDetails) -> Result<Vec<VargaChart>, KundaliError> {
    Ok(all_vargas(&chart(birth)?)?)
}

/// Arudha padas A1..A12.
pub fn arudha_padas(birth: &BirthDetails) -> Result<[ArudhaResult; 12], KundaliError> {
    Ok(chart(birth)?.arudha_padas())
}

/// KP cusps, sub-lords, significators and dasha. `target_jd` defaults to birth.
pub fn kp(birth: &BirthDetails, target_jd: Option<f64>) -> Result<KpData, KundaliError> {
    Ok(kp_data(engine()?, instant(birth)?, target_jd)?)
}

/// Vimshottari hierarchy down to the configured depth.
pub fn dasha(birth: &BirthDetails) -> Result<DashaHierarchy, KundaliError> {
    Ok(dasha_hierarchy(engine()?, &instant(birth)?)?)
}

/// Running periods at `query_jd`, down to the configured depth.
pub fn dasha_at(birth: &BirthDetails, query_jd: f64) -> Result<DashaSnapshot, KundaliError> {
    Ok(dasha_snapshot(engine()?, &instant(birth)?, query_jd)?)
}

/// Five-level drill-down with remaining balances at `target_jd`.
pub fn current_dasha_at(
    birth: &BirthDetails,
    target_jd: f64,
) -> Result<CurrentDasha, KundaliError> {
    let instant = instant(birth)?;
    let moon = moon_seed(engine()?, &instant)?;
    Ok(current_dasha(moon, instant.jd_ut, target_jd)?)
}

/// Natal chart as pretty JSON.
pub fn chart_json(birth: &BirthDetails) -> Result<String, KundaliError> {
    Ok(serde_json::to_string_pretty(&chart(birth)?)?)
}

/// Compact payload for a language-model prompt, with KP data attached.
pub fn ai_payload(birth: &BirthDetails, target_jd: Option<f64>) -> Result<AiPayload, KundaliError> {
    let natal = chart(birth)?;
    let kp = kp(birth, target_jd)?;
    Ok(AiPayload::new(&natal, Some(&kp)))
}

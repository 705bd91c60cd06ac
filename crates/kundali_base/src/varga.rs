//! Divisional chart (varga) rule engine.
//!
//! Every named scheme is one [`VargaRule`]: a divisor N plus a start-sign
//! rule keyed by a sign categorization (whole zodiac, odd/even,
//! movable/fixed/dual, or element). A planet at `deg` inside `sign` lands in
//!
//! ```text
//! div_index    = floor(deg * N / 30)
//! derived_sign = start(sign) + div_index * step   (mod 12)
//! ```
//!
//! Hora (D2) and Trimsamsa (D30) divide the sign unequally and are written
//! as per-parity segment tables instead.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::Rashi;
use crate::sidereal::SiderealPosition;
use crate::util::round_to;

/// Highest degree a varga position may carry.
pub const MAX_VARGA_DEGREE: f64 = 29.9999;

// ---------------------------------------------------------------------------
// Start-sign rules
// ---------------------------------------------------------------------------

/// One entry of a start-sign table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartSign {
    /// Count forward this many signs from the natal sign (0 = same sign).
    Offset(u8),
    /// Always start from this sign index.
    Fixed(u8),
}

impl StartSign {
    pub const fn resolve(self, natal: Rashi) -> Rashi {
        match self {
            Self::Offset(n) => natal.add(n),
            Self::Fixed(i) => Rashi::from_index(i),
        }
    }
}

/// Start sign as a function of the natal sign's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartRule {
    /// Start from the natal sign itself.
    Same,
    /// `[odd, even]`
    Parity([StartSign; 2]),
    /// `[movable, fixed, dual]`
    Modality([StartSign; 3]),
    /// `[fire, earth, air, water]`
    Element([StartSign; 4]),
}

impl StartRule {
    pub const fn start_sign(self, natal: Rashi) -> Rashi {
        let entry = match self {
            Self::Same => StartSign::Offset(0),
            Self::Parity(t) => t[if natal.is_odd() { 0 } else { 1 }],
            Self::Modality(t) => t[natal.modality() as usize],
            Self::Element(t) => t[natal.element() as usize],
        };
        entry.resolve(natal)
    }
}

/// Upper bound (exclusive, degrees) of one unequal segment and its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub upto: f64,
    pub sign: u8,
}

const fn seg(upto: f64, sign: u8) -> Segment {
    Segment { upto, sign }
}

/// How a rule carves up a sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Partition {
    /// N equal parts, advancing `step` signs per part from the start sign.
    Equal { start: StartRule, step: u8 },
    /// Unequal segments, one table for odd signs and one for even signs.
    Segments {
        odd: &'static [Segment],
        even: &'static [Segment],
    },
}

/// A divisional scheme: divisor plus partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VargaRule {
    divisor: u16,
    partition: Partition,
}

impl VargaRule {
    /// Equal-part rule advancing one sign per division.
    pub fn new(divisor: i32, start: StartRule) -> Result<Self, VedicError> {
        Self::with_step(divisor, start, 1)
    }

    /// Equal-part rule advancing `step` signs per division.
    pub fn with_step(divisor: i32, start: StartRule, step: u8) -> Result<Self, VedicError> {
        if divisor <= 0 || divisor > u16::MAX as i32 {
            return Err(VedicError::InvalidDivisor(divisor));
        }
        Ok(Self::equal(divisor as u16, start, step))
    }

    const fn equal(divisor: u16, start: StartRule, step: u8) -> Self {
        Self {
            divisor,
            partition: Partition::Equal { start, step },
        }
    }

    const fn segments(divisor: u16, odd: &'static [Segment], even: &'static [Segment]) -> Self {
        Self {
            divisor,
            partition: Partition::Segments { odd, even },
        }
    }

    pub const fn divisor(&self) -> u16 {
        self.divisor
    }

    pub const fn partition(&self) -> Partition {
        self.partition
    }

    /// Map a natal position into this divisional chart.
    pub fn apply(&self, pos: SiderealPosition) -> SiderealPosition {
        let deg = pos.degree_in_sign.clamp(0.0, MAX_VARGA_DEGREE);
        let (sign, lower, width) = match self.partition {
            Partition::Equal { start, step } => {
                let n = self.divisor as f64;
                let span = 30.0 / n;
                let div_idx = ((deg * n / 30.0).floor() as u16).min(self.divisor - 1);
                let advance = (div_idx as u32 * step as u32 % 12) as u8;
                let sign = start.start_sign(pos.sign).add(advance);
                (sign, div_idx as f64 * span, span)
            }
            Partition::Segments { odd, even } => {
                let table = if pos.sign.is_odd() { odd } else { even };
                let i = table
                    .iter()
                    .position(|s| deg < s.upto)
                    .unwrap_or(table.len() - 1);
                let lower = if i == 0 { 0.0 } else { table[i - 1].upto };
                let segment = table[i];
                (Rashi::from_index(segment.sign), lower, segment.upto - lower)
            }
        };
        let scaled = ((deg - lower) / width * 30.0).clamp(0.0, MAX_VARGA_DEGREE);
        SiderealPosition {
            sign,
            degree_in_sign: round_to(scaled, 4).min(MAX_VARGA_DEGREE),
        }
    }
}

// ---------------------------------------------------------------------------
// Named schemes
// ---------------------------------------------------------------------------

// Sun's hora (Leo) then Moon's (Cancer) for odd signs; reversed for even.
const HORA_ODD: &[Segment] = &[seg(15.0, 4), seg(30.0, 3)];
const HORA_EVEN: &[Segment] = &[seg(15.0, 3), seg(30.0, 4)];

// Parashara trimsamsa: Mars, Saturn, Jupiter, Mercury, Venus signs.
const TRIMSAMSA_ODD: &[Segment] = &[
    seg(5.0, 0),
    seg(10.0, 10),
    seg(18.0, 8),
    seg(25.0, 2),
    seg(30.0, 6),
];
const TRIMSAMSA_EVEN: &[Segment] = &[
    seg(5.0, 1),
    seg(12.0, 5),
    seg(20.0, 11),
    seg(25.0, 9),
    seg(30.0, 7),
];

use StartSign::{Fixed, Offset};

/// The named divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    D10,
    D11,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// All named schemes in ascending divisor order.
pub const ALL_VARGAS: [Varga; 20] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D5,
    Varga::D6,
    Varga::D7,
    Varga::D8,
    Varga::D9,
    Varga::D10,
    Varga::D11,
    Varga::D12,
    Varga::D16,
    Varga::D20,
    Varga::D24,
    Varga::D27,
    Varga::D30,
    Varga::D40,
    Varga::D45,
    Varga::D60,
];

impl Varga {
    /// The rule table. One line per scheme.
    pub const fn rule(self) -> VargaRule {
        use StartRule::*;
        match self {
            Self::D1 => VargaRule::equal(1, Same, 1),
            Self::D2 => VargaRule::segments(2, HORA_ODD, HORA_EVEN),
            Self::D3 => VargaRule::equal(3, Same, 4),
            Self::D4 => VargaRule::equal(4, Same, 3),
            Self::D5 => VargaRule::equal(5, Parity([Offset(0), Offset(8)]), 1),
            Self::D6 => VargaRule::equal(6, Parity([Offset(0), Offset(8)]), 1),
            Self::D7 => VargaRule::equal(7, Parity([Offset(0), Offset(6)]), 1),
            Self::D8 => VargaRule::equal(8, Modality([Fixed(0), Fixed(8), Fixed(4)]), 1),
            Self::D9 => VargaRule::equal(9, Modality([Offset(0), Offset(8), Offset(4)]), 1),
            Self::D10 => VargaRule::equal(10, Parity([Offset(0), Offset(8)]), 1),
            Self::D11 => VargaRule::equal(11, Same, 1),
            Self::D12 => VargaRule::equal(12, Same, 1),
            Self::D16 => VargaRule::equal(16, Modality([Fixed(0), Fixed(4), Fixed(8)]), 1),
            Self::D20 => VargaRule::equal(20, Modality([Fixed(0), Fixed(8), Fixed(4)]), 1),
            Self::D24 => VargaRule::equal(24, Parity([Fixed(4), Fixed(3)]), 1),
            Self::D27 => {
                VargaRule::equal(27, Element([Fixed(0), Fixed(9), Fixed(6), Fixed(3)]), 1)
            }
            Self::D30 => VargaRule::segments(30, TRIMSAMSA_ODD, TRIMSAMSA_EVEN),
            Self::D40 => VargaRule::equal(40, Parity([Fixed(0), Fixed(6)]), 1),
            Self::D45 => VargaRule::equal(45, Modality([Fixed(0), Fixed(4), Fixed(8)]), 1),
            Self::D60 => VargaRule::equal(60, Same, 1),
        }
    }

    pub const fn divisor(self) -> u16 {
        self.rule().divisor
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsa",
            Self::D5 => "Panchamsa",
            Self::D6 => "Shashtamsa",
            Self::D7 => "Saptamsa",
            Self::D8 => "Ashtamsa",
            Self::D9 => "Navamsa",
            Self::D10 => "Dasamsa",
            Self::D11 => "Rudramsa",
            Self::D12 => "Dwadasamsa",
            Self::D16 => "Shodasamsa",
            Self::D20 => "Vimsamsa",
            Self::D24 => "Siddhamsa",
            Self::D27 => "Nakshatramsa",
            Self::D30 => "Trimsamsa",
            Self::D40 => "Khavedamsa",
            Self::D45 => "Akshavedamsa",
            Self::D60 => "Shashtyamsa",
        }
    }

    /// Reverse lookup from the D-number.
    pub fn from_code(code: u16) -> Option<Varga> {
        ALL_VARGAS.into_iter().find(|v| v.divisor() == code)
    }

    /// Parse `"D9"`, `"d9"`, `"9"` or a scheme name (`"navamsa"`).
    pub fn from_name(s: &str) -> Option<Varga> {
        let s = s.trim();
        let digits = s.strip_prefix(['D', 'd']).unwrap_or(s);
        if let Ok(code) = digits.parse::<u16>() {
            return Self::from_code(code);
        }
        ALL_VARGAS
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
    }

    pub fn apply(self, pos: SiderealPosition) -> SiderealPosition {
        self.rule().apply(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    fn at(sign: Rashi, degree_in_sign: f64) -> SiderealPosition {
        SiderealPosition {
            sign,
            degree_in_sign,
        }
    }

    #[test]
    fn divisor_one_is_identity() {
        let rule = VargaRule::new(1, StartRule::Same).unwrap();
        for sign in ALL_RASHIS {
            for deg in [0.0, 7.3, 15.0, 29.99] {
                assert_eq!(rule.apply(at(sign, deg)).sign, sign);
                assert_eq!(Varga::D1.apply(at(sign, deg)).sign, sign);
            }
        }
    }

    #[test]
    fn navamsa_aries_fifteen_is_leo() {
        // div_idx = floor(15 * 9 / 30) = 4; movable start = Aries; 0 + 4 = Leo
        let p = Varga::D9.apply(at(Rashi::Mesha, 15.0));
        assert_eq!(p.sign, Rashi::Simha);
        // 15 sits halfway through [13.33, 16.67]
        assert!((p.degree_in_sign - 15.0).abs() < 1e-3);
    }

    #[test]
    fn navamsa_fixed_and_dual_starts() {
        // Taurus (fixed) starts from 9th = Capricorn
        assert_eq!(Varga::D9.apply(at(Rashi::Vrishabha, 1.0)).sign, Rashi::Makara);
        // Gemini (dual) starts from 5th = Libra
        assert_eq!(Varga::D9.apply(at(Rashi::Mithuna, 1.0)).sign, Rashi::Tula);
    }

    #[test]
    fn hora_halves() {
        assert_eq!(Varga::D2.apply(at(Rashi::Mesha, 10.0)).sign, Rashi::Simha);
        assert_eq!(Varga::D2.apply(at(Rashi::Mesha, 20.0)).sign, Rashi::Karka);
        assert_eq!(Varga::D2.apply(at(Rashi::Vrishabha, 10.0)).sign, Rashi::Karka);
        assert_eq!(Varga::D2.apply(at(Rashi::Vrishabha, 20.0)).sign, Rashi::Simha);
        // (20 - 15) * 2 = 10
        assert!((Varga::D2.apply(at(Rashi::Mesha, 20.0)).degree_in_sign - 10.0).abs() < 1e-9);
    }

    #[test]
    fn drekkana_steps_by_trines() {
        assert_eq!(Varga::D3.apply(at(Rashi::Mesha, 5.0)).sign, Rashi::Mesha);
        assert_eq!(Varga::D3.apply(at(Rashi::Mesha, 15.0)).sign, Rashi::Simha);
        assert_eq!(Varga::D3.apply(at(Rashi::Mesha, 25.0)).sign, Rashi::Dhanu);
    }

    #[test]
    fn chaturthamsa_steps_by_kendras() {
        assert_eq!(Varga::D4.apply(at(Rashi::Karka, 8.0)).sign, Rashi::Tula);
        assert_eq!(Varga::D4.apply(at(Rashi::Karka, 29.0)).sign, Rashi::Mesha);
    }

    #[test]
    fn saptamsa_even_from_seventh() {
        // Taurus even: starts Scorpio; 0..4.28 stays there
        assert_eq!(Varga::D7.apply(at(Rashi::Vrishabha, 1.0)).sign, Rashi::Vrischika);
    }

    #[test]
    fn trimsamsa_segments() {
        assert_eq!(Varga::D30.apply(at(Rashi::Mesha, 3.0)).sign, Rashi::Mesha);
        assert_eq!(Varga::D30.apply(at(Rashi::Mesha, 7.0)).sign, Rashi::Kumbha);
        assert_eq!(Varga::D30.apply(at(Rashi::Mesha, 12.0)).sign, Rashi::Dhanu);
        assert_eq!(Varga::D30.apply(at(Rashi::Mesha, 20.0)).sign, Rashi::Mithuna);
        assert_eq!(Varga::D30.apply(at(Rashi::Mesha, 29.0)).sign, Rashi::Tula);
        assert_eq!(Varga::D30.apply(at(Rashi::Vrishabha, 11.0)).sign, Rashi::Kanya);
        assert_eq!(Varga::D30.apply(at(Rashi::Vrishabha, 29.99)).sign, Rashi::Vrischika);
        // 7 deg inside [5, 12) -> (7 - 5) / 7 * 30
        let p = Varga::D30.apply(at(Rashi::Vrishabha, 7.0));
        assert!((p.degree_in_sign - 60.0 / 7.0).abs() < 1e-3);
    }

    #[test]
    fn nakshatramsa_element_starts() {
        assert_eq!(Varga::D27.apply(at(Rashi::Simha, 0.1)).sign, Rashi::Mesha);
        assert_eq!(Varga::D27.apply(at(Rashi::Kanya, 0.1)).sign, Rashi::Makara);
        assert_eq!(Varga::D27.apply(at(Rashi::Kumbha, 0.1)).sign, Rashi::Tula);
        assert_eq!(Varga::D27.apply(at(Rashi::Meena, 0.1)).sign, Rashi::Karka);
    }

    #[test]
    fn invalid_divisor() {
        assert_eq!(
            VargaRule::new(0, StartRule::Same),
            Err(VedicError::InvalidDivisor(0))
        );
        assert_eq!(
            VargaRule::new(-9, StartRule::Same),
            Err(VedicError::InvalidDivisor(-9))
        );
    }

    #[test]
    fn custom_rule_matches_named_rule() {
        let custom = VargaRule::new(
            10,
            StartRule::Parity([StartSign::Offset(0), StartSign::Offset(8)]),
        )
        .unwrap();
        for sign in ALL_RASHIS {
            let p = at(sign, 17.2);
            assert_eq!(custom.apply(p), Varga::D10.apply(p));
        }
    }

    #[test]
    fn degrees_stay_inside_sign_for_every_scheme() {
        for v in ALL_VARGAS {
            for sign in ALL_RASHIS {
                let mut deg = 0.0;
                while deg < 30.0 {
                    let p = v.apply(at(sign, deg));
                    assert!(
                        (0.0..30.0).contains(&p.degree_in_sign),
                        "{v:?} {sign:?} {deg}"
                    );
                    deg += 0.37;
                }
                let top = v.apply(at(sign, 29.99999));
                assert!(top.degree_in_sign <= MAX_VARGA_DEGREE);
            }
        }
    }

    #[test]
    fn lookup_by_code_and_name() {
        assert_eq!(Varga::from_name("D9"), Some(Varga::D9));
        assert_eq!(Varga::from_name("d60"), Some(Varga::D60));
        assert_eq!(Varga::from_name("navamsa"), Some(Varga::D9));
        assert_eq!(Varga::from_name("D13"), None);
        for v in ALL_VARGAS {
            assert_eq!(Varga::from_code(v.divisor()), Some(v));
        }
    }
}

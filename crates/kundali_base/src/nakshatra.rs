//! Nakshatra (lunar mansion) resolver.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, with 4 padas of 3 deg 20'. Each nakshatra has a
//! ruling graha (the Vimshottari sequence repeated three times), an element,
//! a symbol, and a presiding deity.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::rashi::Element;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

struct NakshatraData {
    name: &'static str,
    lord: Graha,
    element: Element,
    symbol: &'static str,
    deity: &'static str,
}

const fn row(
    name: &'static str,
    lord: Graha,
    element: Element,
    symbol: &'static str,
    deity: &'static str,
) -> NakshatraData {
    NakshatraData {
        name,
        lord,
        element,
        symbol,
        deity,
    }
}

#[rustfmt::skip]
const TABLE: [NakshatraData; 27] = {
    use Element::*;
    use Graha::*;
    [
        row("Ashwini",           Ketu,    Fire,  "Horse",        "Ashwini Kumars"),
        row("Bharani",           Shukra,  Water, "Triangle",     "Yama"),
        row("Krittika",          Surya,   Fire,  "Flame",        "Agni"),
        row("Rohini",            Chandra, Earth, "Chariot",      "Brahma"),
        row("Mrigashira",        Mangal,  Air,   "Deer Head",    "Soma (Moon god)"),
        row("Ardra",             Rahu,    Air,   "Teardrop",     "Rudra (Shiva)"),
        row("Punarvasu",         Guru,    Air,   "Bow & Arrow",  "Aditi"),
        row("Pushya",            Shani,   Water, "Udder",        "Brihaspati"),
        row("Ashlesha",          Buddh,   Water, "Serpent",      "Sarpas (serpents)"),
        row("Magha",             Ketu,    Fire,  "Throne",       "Pitris (Ancestors)"),
        row("Purva Phalguni",    Shukra,  Fire,  "Swing",        "Aryaman"),
        row("Uttara Phalguni",   Surya,   Earth, "Bed",          "Aryaman"),
        row("Hasta",             Chandra, Earth, "Hand",         "Savitar"),
        row("Chitra",            Mangal,  Fire,  "Jewel",        "Twashtar"),
        row("Swati",             Rahu,    Air,   "Sword",        "Vayu"),
        row("Vishakha",          Guru,    Fire,  "Trident",      "Indra & Agni"),
        row("Anuradha",          Shani,   Air,   "Garland",      "Mitra"),
        row("Jyeshtha",          Buddh,   Air,   "Thunderbolt",  "Indra"),
        row("Mula",              Ketu,    Earth, "Whip",         "Nirrti"),
        row("Purva Ashadha",     Shukra,  Fire,  "Fan",          "Apas"),
        row("Uttara Ashadha",    Surya,   Earth, "Elephant Tusk","Vishvadevas"),
        row("Shravana",          Chandra, Air,   "Ear",          "Vishnu"),
        row("Dhanishta",         Mangal,  Air,   "Drum",         "Vasus"),
        row("Shatabhisha",       Rahu,    Air,   "100 Flowers",  "Varuna"),
        row("Purva Bhadrapada",  Guru,    Water, "Two-faced",    "Aja Ekapad"),
        row("Uttara Bhadrapada", Shani,   Water, "Twin Stars",   "Ahir Budhnya"),
        row("Revati",            Buddh,   Earth, "Fish",         "Pushan"),
    ]
};

impl Nakshatra {
    fn data(self) -> &'static NakshatraData {
        &TABLE[self as usize]
    }

    /// Display name ("Purva Phalguni").
    pub fn name(self) -> &'static str {
        self.data().name
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling graha (star lord).
    pub fn lord(self) -> Graha {
        self.data().lord
    }

    pub fn element(self) -> Element {
        self.data().element
    }

    pub fn symbol(self) -> &'static str {
        self.data().symbol
    }

    pub fn deity(self) -> &'static str {
        self.data().deity
    }

    /// Start of this nakshatra in sidereal degrees.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN_27
    }
}

/// Full nakshatra position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (1-4).
    pub pada: u8,
    /// Decimal degrees elapsed within the nakshatra.
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees elapsed within the pada.
    pub degrees_in_pada: f64,
}

impl NakshatraInfo {
    /// Fraction of the nakshatra already traversed, in [0, 1).
    pub fn elapsed_fraction(&self) -> f64 {
        (self.degrees_in_nakshatra / NAKSHATRA_SPAN_27).clamp(0.0, 1.0)
    }
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> Result<NakshatraInfo, VedicError> {
    if !sidereal_lon_deg.is_finite() {
        return Err(VedicError::InvalidLongitude(sidereal_lon_deg));
    }
    let lon = normalize_360(sidereal_lon_deg);
    // 359.99999999 / span can floor to 27 in floating point
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN_27;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let degrees_in_pada = degrees_in_nakshatra - (pada_idx as f64) * PADA_SPAN;

    Ok(NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
        assert_eq!(Nakshatra::PurvaPhalguni.name(), "Purva Phalguni");
        assert_eq!(Nakshatra::Revati.deity(), "Pushan");
    }

    #[test]
    fn lords_repeat_vimshottari_sequence() {
        for i in 0..9 {
            let lord = ALL_NAKSHATRAS[i].lord();
            assert_eq!(ALL_NAKSHATRAS[i + 9].lord(), lord);
            assert_eq!(ALL_NAKSHATRAS[i + 18].lord(), lord);
        }
    }

    #[test]
    fn ashwini_start() {
        let info = nakshatra_from_longitude(0.0).unwrap();
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn rohini_second_pada() {
        // Rohini starts at 40.0; 40 + 3.5 = 43.5 is in pada 2
        let info = nakshatra_from_longitude(43.5).unwrap();
        assert_eq!(info.nakshatra, Nakshatra::Rohini);
        assert_eq!(info.pada, 2);
        assert!((info.degrees_in_nakshatra - 3.5).abs() < 1e-9);
    }

    #[test]
    fn revati_last_pada_at_circle_end() {
        let info = nakshatra_from_longitude(359.9999).unwrap();
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn spans_tile_the_circle() {
        for n in ALL_NAKSHATRAS {
            let start = nakshatra_from_longitude(n.start_deg() + 1e-9).unwrap();
            assert_eq!(start.nakshatra, n);
            let end = n.start_deg() + NAKSHATRA_SPAN_27 - 1e-9;
            assert_eq!(nakshatra_from_longitude(end).unwrap().nakshatra, n);
        }
        assert!((27.0 * NAKSHATRA_SPAN_27 - 360.0).abs() < 1e-9);
    }

    #[test]
    fn index_and_pada_always_in_range() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let info = nakshatra_from_longitude(lon).unwrap();
            assert!(info.nakshatra_index <= 26);
            assert!((1..=4).contains(&info.pada));
            lon += 0.071;
        }
    }

    #[test]
    fn elapsed_fraction_midpoint() {
        let info = nakshatra_from_longitude(NAKSHATRA_SPAN_27 * 5.5).unwrap();
        assert!((info.elapsed_fraction() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn non_finite_rejected() {
        assert!(nakshatra_from_longitude(f64::NAN).is_err());
    }
}

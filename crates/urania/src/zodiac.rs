//! Zodiac mapping: absolute ecliptic degrees into sign, element, and
//! quality buckets.
//!
//! The circle is divided into 12 fixed 30-degree signs. Each sign carries a
//! fixed element and quality; both cycle through the zodiacal order.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// The four classical elements, repeating Fire→Earth→Air→Water around the
/// zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// The three modalities, repeating Cardinal→Fixed→Mutable around the
/// zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

/// The twelve signs in zodiacal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in zodiacal order, indexable by [`ZodiacSign::index`].
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Zodiacal position, 0 (Aries) through 11 (Pisces).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Three-letter abbreviation.
    pub const fn short_name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Ari",
            ZodiacSign::Taurus => "Tau",
            ZodiacSign::Gemini => "Gem",
            ZodiacSign::Cancer => "Can",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Vir",
            ZodiacSign::Libra => "Lib",
            ZodiacSign::Scorpio => "Sco",
            ZodiacSign::Sagittarius => "Sag",
            ZodiacSign::Capricorn => "Cap",
            ZodiacSign::Aquarius => "Aqu",
            ZodiacSign::Pisces => "Pis",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    pub const fn quality(self) -> Quality {
        match self {
            ZodiacSign::Aries | ZodiacSign::Cancer | ZodiacSign::Libra | ZodiacSign::Capricorn => {
                Quality::Cardinal
            }
            ZodiacSign::Taurus | ZodiacSign::Leo | ZodiacSign::Scorpio | ZodiacSign::Aquarius => {
                Quality::Fixed
            }
            ZodiacSign::Gemini
            | ZodiacSign::Virgo
            | ZodiacSign::Sagittarius
            | ZodiacSign::Pisces => Quality::Mutable,
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈️",
            ZodiacSign::Taurus => "♉️",
            ZodiacSign::Gemini => "♊️",
            ZodiacSign::Cancer => "♋️",
            ZodiacSign::Leo => "♌️",
            ZodiacSign::Virgo => "♍️",
            ZodiacSign::Libra => "♎️",
            ZodiacSign::Scorpio => "♏️",
            ZodiacSign::Sagittarius => "♐️",
            ZodiacSign::Capricorn => "♑️",
            ZodiacSign::Aquarius => "♒️",
            ZodiacSign::Pisces => "♓️",
        }
    }
}

/// One mapped degree: the sign bucket and its fixed attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignPlacement {
    pub sign: ZodiacSign,
    pub sign_index: u8,
    pub element: Element,
    pub quality: Quality,
    /// Degree inside the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Absolute ecliptic degree, [0, 360).
    pub absolute_degree: f64,
    pub glyph: String,
}

/// Maps an absolute ecliptic degree to its sign placement.
///
/// The input must already be in [0, 360). Out-of-range values (including
/// NaN) are reported as [`ChartError::DegreeOutOfRange`], never wrapped.
pub fn sign_placement(degree: f64) -> Result<SignPlacement, ChartError> {
    if !(0.0..360.0).contains(&degree) {
        return Err(ChartError::DegreeOutOfRange { degree });
    }
    let sign = ZodiacSign::ALL[(degree / 30.0) as usize];
    Ok(SignPlacement {
        sign,
        sign_index: sign.index(),
        element: sign.element(),
        quality: sign.quality(),
        degree_in_sign: degree - f64::from(sign.index()) * 30.0,
        absolute_degree: degree,
        glyph: sign.glyph().to_string(),
    })
}

/// Wraps any angle into [0, 360).
///
/// `rem_euclid` can round up to exactly 360.0 for tiny negative inputs;
/// that edge folds to 0.0 so the result stays inside the half-open range.
pub fn normalize_degrees(value: f64) -> f64 {
    let wrapped = value.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_index_matches_thirty_degree_buckets() {
        let mut degree = 0.0;
        while degree < 360.0 {
            let placement = sign_placement(degree).unwrap();
            assert_eq!(placement.sign_index, (degree / 30.0) as u8, "at {}", degree);
            assert!(placement.degree_in_sign >= 0.0 && placement.degree_in_sign < 30.0);
            assert_eq!(placement.absolute_degree, degree);
            degree += 0.25;
        }
    }

    #[test]
    fn attribute_table_is_fixed() {
        let expected = [
            (ZodiacSign::Aries, Quality::Cardinal, Element::Fire, "Ari"),
            (ZodiacSign::Taurus, Quality::Fixed, Element::Earth, "Tau"),
            (ZodiacSign::Gemini, Quality::Mutable, Element::Air, "Gem"),
            (ZodiacSign::Cancer, Quality::Cardinal, Element::Water, "Can"),
            (ZodiacSign::Leo, Quality::Fixed, Element::Fire, "Leo"),
            (ZodiacSign::Virgo, Quality::Mutable, Element::Earth, "Vir"),
            (ZodiacSign::Libra, Quality::Cardinal, Element::Air, "Lib"),
            (ZodiacSign::Scorpio, Quality::Fixed, Element::Water, "Sco"),
            (ZodiacSign::Sagittarius, Quality::Mutable, Element::Fire, "Sag"),
            (ZodiacSign::Capricorn, Quality::Cardinal, Element::Earth, "Cap"),
            (ZodiacSign::Aquarius, Quality::Fixed, Element::Air, "Aqu"),
            (ZodiacSign::Pisces, Quality::Mutable, Element::Water, "Pis"),
        ];
        for (i, (sign, quality, element, short)) in expected.iter().enumerate() {
            assert_eq!(ZodiacSign::ALL[i], *sign);
            assert_eq!(sign.index() as usize, i);
            assert_eq!(sign.quality(), *quality);
            assert_eq!(sign.element(), *element);
            assert_eq!(sign.short_name(), *short);
        }
    }

    #[test]
    fn maps_ninety_five_to_cancer() {
        let placement = sign_placement(95.0).unwrap();
        assert_eq!(placement.sign, ZodiacSign::Cancer);
        assert_eq!(placement.quality, Quality::Cardinal);
        assert_eq!(placement.element, Element::Water);
        assert_eq!(placement.degree_in_sign, 5.0);
        assert_eq!(placement.glyph, "♋️");
    }

    #[test]
    fn sign_boundaries_open_at_the_top() {
        assert_eq!(sign_placement(29.999).unwrap().sign, ZodiacSign::Aries);
        assert_eq!(sign_placement(30.0).unwrap().sign, ZodiacSign::Taurus);
        assert_eq!(sign_placement(330.0).unwrap().sign, ZodiacSign::Pisces);
        assert_eq!(sign_placement(359.999).unwrap().sign, ZodiacSign::Pisces);
    }

    #[test]
    fn out_of_range_degrees_are_rejected() {
        for bad in [-0.001, -30.0, 360.0, 360.001, 720.0, f64::NAN] {
            match sign_placement(bad) {
                Err(ChartError::DegreeOutOfRange { .. }) => {}
                other => panic!("expected DegreeOutOfRange for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        // rem_euclid rounds up to exactly 360.0 here; the fold keeps the
        // result in range.
        let folded = normalize_degrees(-1e-18);
        assert!(folded < 360.0);
        assert_eq!(folded, 0.0);
    }

    #[test]
    fn sign_serializes_lowercase() {
        let json = serde_json::to_string(&ZodiacSign::Sagittarius).unwrap();
        assert_eq!(json, "\"sagittarius\"");
    }
}

//! Moon phase from a calendar date, using the mean synodic month.

use core::f64::consts::PI;

/// Mean length of a lunation in days.
const SYNODIC_MONTH: f64 = 29.530_588_853;
/// Julian day of the new moon on 2000-01-06 18:14 UTC.
const REFERENCE_NEW_MOON: f64 = 2_451_550.26;

pub const PHASE_NAMES: [&str; 8] = [
    "New Moon",
    "Waxing Crescent",
    "First Quarter",
    "Waxing Gibbous",
    "Full Moon",
    "Waning Gibbous",
    "Last Quarter",
    "Waning Crescent",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonPhase {
    /// 0 = new, 4 = full.
    pub index: u8,
    pub illumination: u8,
}

impl MoonPhase {
    pub fn name(&self) -> &'static str {
        PHASE_NAMES[self.index as usize % PHASE_NAMES.len()]
    }
}

fn julian_day(year: i32, month: u32, day: u32, hour: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = libm::floor(y as f64 / 100.0);
    let b = 2.0 - a + libm::floor(a / 4.0);
    libm::floor(365.25 * (y as f64 + 4716.0))
        + libm::floor(30.6001 * (m as f64 + 1.0))
        + day as f64
        + b
        - 1524.5
        + hour as f64 / 24.0
}

pub fn moon_phase(year: i32, month: u32, day: u32, hour: u32) -> MoonPhase {
    let age = (julian_day(year, month, day, hour) - REFERENCE_NEW_MOON) / SYNODIC_MONTH;
    let mut fraction = libm::fmod(age, 1.0);
    if fraction < 0.0 {
        fraction += 1.0;
    }

    let index = (libm::floor(fraction * 8.0 + 0.5) as i32).rem_euclid(8) as u8;
    let lit = (1.0 - libm::cos(2.0 * PI * fraction)) / 2.0;
    let illumination = libm::round(lit * 100.0).clamp(0.0, 100.0) as u8;

    MoonPhase {
        index,
        illumination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_new_moon() {
        let phase = moon_phase(2000, 1, 6, 18);
        assert_eq!(phase, MoonPhase { index: 0, illumination: 0 });
        assert_eq!(phase.name(), "New Moon");
    }

    #[test]
    fn known_2024_phases() {
        assert_eq!(moon_phase(2024, 4, 8, 18).index, 0);
        assert_eq!(moon_phase(2024, 4, 15, 19).index, 2);
        let full = moon_phase(2024, 4, 23, 23);
        assert_eq!(full, MoonPhase { index: 4, illumination: 100 });
        assert_eq!(full.name(), "Full Moon");
        assert_eq!(moon_phase(2024, 5, 1, 11).name(), "Last Quarter");
    }

    #[test]
    fn pure_and_bounded() {
        for day in 1..=28 {
            for hour in [0, 6, 12, 23] {
                let first = moon_phase(2026, 2, day, hour);
                assert_eq!(first, moon_phase(2026, 2, day, hour));
                assert!(first.index <= 7);
                assert!(first.illumination <= 100);
            }
        }
    }

    #[test]
    fn dates_before_reference_wrap_forward() {
        let phase = moon_phase(1999, 12, 22, 18);
        assert!(phase.index <= 7);
        assert!(phase.illumination > 90);
    }
}

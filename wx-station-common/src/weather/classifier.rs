//! Weather-code lookups. Codes follow the WMO interpretation table used by
//! Open-Meteo. The icon table and the condition-word table cut the code
//! space at different places and are kept apart on purpose.

use crate::types::{Compass, IconId};

/// Added to clear/partly-cloudy codes when the current panel is drawn at night.
pub const NIGHT_OFFSET: u16 = 1000;

pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Half-open `[start, end)` ranges, first match wins.
const ICON_TABLE: [(u16, u16, IconId); 11] = [
    (0, 1, IconId::ClearDay),
    (1, 4, IconId::PartlyCloudyDay),
    (45, 49, IconId::Fog),
    (51, 58, IconId::Drizzle),
    (61, 68, IconId::Rain),
    (80, 83, IconId::Rain),
    (71, 78, IconId::Snow),
    (85, 87, IconId::Snow),
    (95, 100, IconId::Thunderstorm),
    (NIGHT_OFFSET, NIGHT_OFFSET + 1, IconId::ClearNight),
    (NIGHT_OFFSET + 1, NIGHT_OFFSET + 4, IconId::PartlyCloudyNight),
];

const CONDITION_TABLE: [(u16, u16, &str); 4] = [
    (0, 2, "Clear"),
    (2, 50, "Cloudy"),
    (50, 95, "Rain"),
    (95, 100, "Storm"),
];

pub fn icon_for_code(code: u16) -> IconId {
    ICON_TABLE
        .iter()
        .find(|(start, end, _)| (*start..*end).contains(&code))
        .map(|(_, _, icon)| *icon)
        .unwrap_or(IconId::Unknown)
}

/// Icon for a weather code. Night variants are only used for the current
/// conditions; forecast days have no sunrise/sunset of their own.
pub fn classify(code: u16, is_current: bool, now: i64, sunrise: i64, sunset: i64) -> IconId {
    let is_night = now < sunrise || now > sunset;
    let code = if is_current && code <= 3 && is_night {
        code + NIGHT_OFFSET
    } else {
        code
    };
    icon_for_code(code)
}

pub fn condition_word(code: u16) -> &'static str {
    CONDITION_TABLE
        .iter()
        .find(|(start, end, _)| (*start..*end).contains(&code))
        .map(|(_, _, word)| *word)
        .unwrap_or(UNKNOWN_CONDITION)
}

/// Eight 45° sectors centred on N, NE, E, ..., NW. Bearings outside
/// [0, 360) and non-finite input read as North.
pub fn compass_sector(bearing: f32) -> Compass {
    if !(0.0..360.0).contains(&bearing) {
        return Compass::North;
    }
    let sector = libm::floorf((bearing + 22.5) / 45.0);
    let index = (sector as i32).rem_euclid(8) as usize;
    Compass::SECTORS
        .get(index)
        .copied()
        .unwrap_or(Compass::North)
}

//! Screen regions for the 320x240 dashboard. All coordinates are pixels
//! from the top-left corner.

use embedded_graphics::prelude::Point;

pub const SCREEN_WIDTH: i32 = 320;
pub const SCREEN_HEIGHT: i32 = 240;
pub const MARGIN: i32 = 4;

// Header: location left, date right.
pub const HEADER_Y: i32 = 4;
/// Wider locations drop to the small font.
pub const LOCATION_MAX_WIDTH: u32 = 200;

// Clock, colon pinned to one column.
pub const CLOCK_Y: i32 = 24;
pub const CLOCK_COLON_X: i32 = 276;

// Current conditions, left column.
pub const CURRENT_ICON: Point = Point::new(8, 48);
pub const CURRENT_TEMP: Point = Point::new(48, 50);
pub const CONDITION_WORD: Point = Point::new(48, 74);
pub const SUN_TIMES: Point = Point::new(8, 96);

// Current conditions, right column.
pub const DETAIL_X: i32 = 172;
pub const DETAIL_Y: i32 = 52;
pub const DETAIL_LINE_HEIGHT: i32 = 14;
pub const TREND_GAP: i32 = 4;

// Forecast strip.
pub const FORECAST_Y: i32 = 120;
pub const FORECAST_PANEL_WIDTH: i32 = SCREEN_WIDTH / 4;
pub const FORECAST_ICON_Y: i32 = FORECAST_Y + 18;
pub const FORECAST_TEMP_Y: i32 = FORECAST_Y + 54;

// Astronomy panel.
pub const ASTRONOMY_Y: i32 = 194;
pub const MOON_ICON: Point = Point::new(8, ASTRONOMY_Y);
pub const PHASE_TEXT_X: i32 = 40;
pub const PHASE_MAX_WIDTH: u32 = 80;
pub const ILLUMINATION_Y: i32 = ASTRONOMY_Y + 24;
pub const UPDATED_Y: i32 = ILLUMINATION_Y;

pub const NOTICE: Point = Point::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);

/// Left edge of forecast panel `index`.
pub fn forecast_panel_x(index: usize) -> i32 {
    index as i32 * FORECAST_PANEL_WIDTH
}

pub fn detail_line_y(line: usize) -> i32 {
    DETAIL_Y + line as i32 * DETAIL_LINE_HEIGHT
}

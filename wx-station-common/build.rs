//! Forwards station settings from a `.env` file into compile-time environment
//! variables read by `StationConfig::default()`.

const KEYS: [&str; 9] = [
    "WX_LATITUDE",
    "WX_LONGITUDE",
    "WX_TIMEZONE",
    "WX_UNITS",
    "WX_REFRESH_MINUTES",
    "WX_FETCH_TIMEOUT_SECS",
    "WX_GEOCODE_TIMEOUT_SECS",
    "WX_DEFAULT_LOCATION",
    "WX_WEATHER_HOST",
];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=../.env");

    // A missing .env is normal; built-in defaults apply.
    let _ = dotenvy::dotenv();

    for key in KEYS {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}

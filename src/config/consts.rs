// src/config/consts.rs

// Source
pub const DEFAULT_BASE: &str = ".";
pub const DEFAULT_PAGES: &[&str] = &[
    "trips/oresund-szoros-kortura.html",
    "trips/vadkaland-belgiumban.html",
    "trips/japan-korut.html",
    "trips/afrikai-szafari.html",
    "trips/fjordok-es-eszaki-feny.html",
];
pub const TRIP_DATA_TAG: &str = "script";
pub const TRIP_DATA_ID: &str = "trip-data";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "trip_finder/0.3";

// Local files
pub const CONFIG_FILE: &str = "trip_finder.toml";
pub const LOG_FILE: &str = ".store/debug.log";

// Sliders (visual maxima: 14+ days, 500k+ Ft)
pub const DAYS_MIN: u64 = 1;
pub const DAYS_MAX: u64 = 14;
pub const DAYS_STEP: u64 = 1;
pub const BUDGET_MIN: u64 = 1_000;
pub const BUDGET_MAX: u64 = 500_000;
pub const BUDGET_STEP: u64 = 1_000;
pub const OPEN_END_MARKER: &str = "+";

// Autocomplete
pub const SUGGESTION_LIMIT: usize = 8;

// Concurrency
pub const WORKERS: usize = 4;

// Colours (slider fill / track)
pub const ACTIVE_RGB: [u8; 3] = [0xD9, 0x77, 0x5B];
pub const INACTIVE_RGB: [u8; 3] = [0xD1, 0xD5, 0xDB];

/// Fixed UI label set.
pub mod labels {
    pub const WINDOW_TITLE: &str = "Utazások";
    pub const CONTINENT: &str = "Kontinens";
    pub const COUNTRY: &str = "Ország";
    pub const COUNTRY_PLACEHOLDER: &str = "pl. Magyarország, Japán";
    pub const DAYS: &str = "Napok";
    pub const BUDGET: &str = "Költség (Ft/fő)";
    pub const CLEAR_FILTERS: &str = "Szűrők törlése";
    pub const CURRENCY: &str = "Ft";
    pub const DAY_UNIT: &str = "nap";
    pub const NO_TRIPS: &str = "Nincs a szűrőknek megfelelő utazás.";
}

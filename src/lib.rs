//! HueStep - walk, collect colors, build a daily marble
//!
//! The daily color recommendation, the walk session that gates collected
//! colors by similarity, per-user persistence, the weekly report and the
//! palette card share flow. Color math lives in `huestep_color` and all
//! rasterization in `huestep_canvas`.

pub mod config;
pub mod model;
pub mod recommend;
pub mod report;
pub mod session;
pub mod share;
pub mod steps;
pub mod store;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use model::{upsert_marble, CollectedColor, DayMarble, TodayColor, UserData, UserId};
pub use recommend::{
    ColorRecommendation, Recommendation, RecommendationEngine, RecommendationSource, Season,
    TimeOfDay, Weather,
};
pub use report::{CalendarMonth, WeeklyReport};
pub use session::{CollectError, WalkSession};
pub use share::ShareSession;
pub use store::{JsonFileStore, MemoryStore, StoreError, UserStore};

//! Static color tables the recommender draws from.
//!
//! Tables are built once into a [`Catalog`] and handed to the engine, so tests
//! can swap in their own pools.

use std::collections::HashMap;
use std::sync::LazyLock;

use huestep_color::Color;

use super::{ColorRecommendation, Season, TimeOfDay, Weather};

const fn rec(rgb: u32, name: &'static str, desc: &'static str) -> ColorRecommendation {
    ColorRecommendation {
        color: Color::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        name,
        desc,
    }
}

/// Returned on November 11 regardless of anything else.
pub const NOVEMBER_ELEVENTH: ColorRecommendation = rec(0x0077B6, "Ocean", "바다");

const SPRING: [ColorRecommendation; 6] = [
    rec(0xFFB3D9, "Cherry Blossom", "벚꽃"),
    rec(0xB5E550, "Fresh Green", "새싹"),
    rec(0xFFE4E1, "Peach", "복숭아"),
    rec(0xB4D455, "Spring Green", "봄"),
    rec(0x87CEEB, "Sky Blue", "봄 하늘"),
    rec(0xFFB6C1, "Pink", "핑크"),
];

const SUMMER: [ColorRecommendation; 6] = [
    rec(0x4CC9F0, "Ocean", "오션"),
    rec(0x06A77D, "Emerald", "에메랄드"),
    rec(0xFFD60A, "Sunshine", "선샤인"),
    rec(0xFF9F1C, "Sunset", "석양"),
    rec(0x0077B6, "Deep Blue", "바다"),
    rec(0x40916C, "Tropical", "열대"),
];

const AUTUMN: [ColorRecommendation; 6] = [
    rec(0xF77F00, "Maple", "단풍"),
    rec(0xDC143C, "Crimson", "진홍"),
    rec(0xFF8C42, "Pumpkin", "호박"),
    rec(0xB57EDC, "Lavender", "라벤더"),
    rec(0x8D99AE, "Gray", "회색"),
    rec(0x2D6A4F, "Forest", "숲"),
];

const WINTER: [ColorRecommendation; 6] = [
    rec(0xEDF2F4, "Snow", "눈"),
    rec(0x457B9D, "Winter Sky", "겨울 하늘"),
    rec(0x2B2D42, "Midnight", "미드나이트"),
    rec(0x6FBADC, "Ice Blue", "아이스 블루"),
    rec(0x1D3557, "Navy", "네이비"),
    rec(0xB57EDC, "Purple", "퍼플"),
];

const SUNNY: [ColorRecommendation; 3] = [
    rec(0xFFD60A, "Sunshine", "선샤인"),
    rec(0xFFC947, "Golden", "골든"),
    rec(0xFF9F1C, "Amber", "앰버"),
];

const CLOUDY: [ColorRecommendation; 3] = [
    rec(0x8D99AE, "Gray", "구름"),
    rec(0xEDF2F4, "Pearl", "펄"),
    rec(0xB57EDC, "Lavender", "라벤더"),
];

const RAINY: [ColorRecommendation; 3] = [
    rec(0x457B9D, "Rain", "빗방울"),
    rec(0x6FBADC, "Aqua", "아쿠아"),
    rec(0x2B2D42, "Stormy", "먹구름"),
];

const SNOWY: [ColorRecommendation; 3] = [
    rec(0xEDF2F4, "Snow", "눈"),
    rec(0x87CEEB, "Winter Sky", "겨울 하늘"),
    rec(0x6FBADC, "Frost", "서리"),
];

const MORNING: [ColorRecommendation; 3] = [
    rec(0xFFE4E1, "Dawn", "새벽"),
    rec(0xFFB6C1, "Morning Pink", "아침"),
    rec(0x87CEEB, "Morning Sky", "아침 하늘"),
];

const AFTERNOON: [ColorRecommendation; 3] = [
    rec(0xFFD60A, "Noon", "정오"),
    rec(0x4CC9F0, "Bright Sky", "맑은 하늘"),
    rec(0x06A77D, "Emerald", "에메랄드"),
];

const EVENING: [ColorRecommendation; 3] = [
    rec(0xFF8C42, "Sunset", "석양"),
    rec(0xF77F00, "Orange Dusk", "노을"),
    rec(0xE63946, "Twilight", "황혼"),
];

const NIGHT: [ColorRecommendation; 3] = [
    rec(0x1D3557, "Night Sky", "밤하늘"),
    rec(0x2B2D42, "Midnight", "자정"),
    rec(0x7209B7, "Night Purple", "밤"),
];

/// The full 30-color palette, grouped by hue family.
pub const ALL_COLORS: [ColorRecommendation; 30] = [
    // red
    rec(0xE63946, "Cherry Red", "체리"),
    rec(0xDC143C, "Crimson", "진홍"),
    rec(0xFF6B6B, "Coral Red", "코랄 레드"),
    // orange
    rec(0xFF8C42, "Orange Burst", "오렌지"),
    rec(0xF77F00, "Tangerine", "탠저린"),
    rec(0xFF9F1C, "Amber", "앰버"),
    // yellow
    rec(0xFFD60A, "Sunshine", "선샤인"),
    rec(0xFFC947, "Golden", "골든"),
    rec(0xFFEA00, "Lemon", "레몬"),
    // yellow green
    rec(0xB5E550, "Lime", "라임"),
    rec(0x9ACD32, "Yellow Green", "연두"),
    rec(0xB4D455, "Spring Green", "봄"),
    // green
    rec(0x06A77D, "Emerald", "에메랄드"),
    rec(0x2D6A4F, "Forest", "숲"),
    rec(0x40916C, "Jade", "제이드"),
    // sky
    rec(0x87CEEB, "Sky Blue", "하늘"),
    rec(0x6FBADC, "Ocean", "오션"),
    rec(0x4CC9F0, "Aqua", "아쿠아"),
    // blue
    rec(0x457B9D, "Steel Blue", "스틸 블루"),
    rec(0x1D3557, "Navy", "네이비"),
    rec(0x0077B6, "Cobalt", "코발트"),
    // purple
    rec(0xB57EDC, "Lavender", "라벤더"),
    rec(0x9D4EDD, "Purple", "퍼플"),
    rec(0x7209B7, "Violet", "바이올렛"),
    // pink
    rec(0xF72585, "Magenta", "마젠타"),
    rec(0xFFB3D9, "Pink", "핑크"),
    rec(0xFF85B3, "Rose", "로즈"),
    // neutral
    rec(0x2B2D42, "Charcoal", "차콜"),
    rec(0x8D99AE, "Gray", "그레이"),
    rec(0xEDF2F4, "Pearl", "펄"),
];

static STANDARD: LazyLock<Catalog> = LazyLock::new(Catalog::build_standard);

/// Candidate pools keyed by season, weather and time of day.
///
/// A key with no entry behaves as an empty pool.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub seasonal: HashMap<Season, Vec<ColorRecommendation>>,
    pub weather: HashMap<Weather, Vec<ColorRecommendation>>,
    pub time_of_day: HashMap<TimeOfDay, Vec<ColorRecommendation>>,
    pub all_colors: Vec<ColorRecommendation>,
}

impl Catalog {
    /// The shipped tables, built on first use.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    fn build_standard() -> Self {
        log::debug!("Building standard color catalog");
        Self {
            seasonal: HashMap::from([
                (Season::Spring, SPRING.to_vec()),
                (Season::Summer, SUMMER.to_vec()),
                (Season::Autumn, AUTUMN.to_vec()),
                (Season::Winter, WINTER.to_vec()),
            ]),
            weather: HashMap::from([
                (Weather::Sunny, SUNNY.to_vec()),
                (Weather::Cloudy, CLOUDY.to_vec()),
                (Weather::Rainy, RAINY.to_vec()),
                (Weather::Snowy, SNOWY.to_vec()),
            ]),
            time_of_day: HashMap::from([
                (TimeOfDay::Morning, MORNING.to_vec()),
                (TimeOfDay::Afternoon, AFTERNOON.to_vec()),
                (TimeOfDay::Evening, EVENING.to_vec()),
                (TimeOfDay::Night, NIGHT.to_vec()),
            ]),
            all_colors: ALL_COLORS.to_vec(),
        }
    }

    pub fn seasonal_pool(&self, season: Season) -> &[ColorRecommendation] {
        self.seasonal.get(&season).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn weather_pool(&self, weather: Weather) -> &[ColorRecommendation] {
        self.weather.get(&weather).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn time_pool(&self, time: TimeOfDay) -> &[ColorRecommendation] {
        self.time_of_day.get(&time).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a color's catalog name, first match in the full palette.
    pub fn name_of(&self, color: Color) -> Option<&ColorRecommendation> {
        self.all_colors.iter().find(|rec| rec.color == color)
    }
}

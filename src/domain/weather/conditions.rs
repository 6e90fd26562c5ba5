use crate::cli::IconMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Fog,
    Thunder,
    Unknown,
}

/// Buckets a WeatherAPI condition code.
#[must_use]
pub fn condition_category(code: u16) -> WeatherCategory {
    match code {
        1000 => WeatherCategory::Clear,
        1003 | 1006 | 1009 => WeatherCategory::Cloudy,
        1030 | 1135 | 1147 => WeatherCategory::Fog,
        1063 | 1072 | 1150 | 1153 | 1168 | 1171 | 1180..=1201 | 1240..=1246 => {
            WeatherCategory::Rain
        }
        1066 | 1069 | 1114 | 1117 | 1204..=1237 | 1249..=1264 => WeatherCategory::Snow,
        1087 | 1273..=1282 => WeatherCategory::Thunder,
        _ => WeatherCategory::Unknown,
    }
}

#[must_use]
pub fn condition_glyph(code: u16, mode: IconMode, is_day: bool) -> &'static str {
    let (ascii, emoji, unicode) = icon_tokens(condition_category(code), is_day);
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}

/// Provider icons arrive as `//cdn.weatherapi.com/...`.
#[must_use]
pub fn normalize_icon_url(icon: &str) -> String {
    if icon.starts_with("//") {
        format!("https:{icon}")
    } else {
        icon.to_string()
    }
}

fn icon_tokens(
    category: WeatherCategory,
    is_day: bool,
) -> (&'static str, &'static str, &'static str) {
    match category {
        WeatherCategory::Clear if is_day => ("SUN", "☀️", "☀"),
        WeatherCategory::Clear => ("MON", "🌙", "☾"),
        WeatherCategory::Cloudy => ("CLD", "☁️", "☁"),
        WeatherCategory::Rain => ("RAN", "🌧️", "☂"),
        WeatherCategory::Snow => ("SNW", "🌨️", "❄"),
        WeatherCategory::Fog => ("FOG", "🌫️", "░"),
        WeatherCategory::Thunder => ("THN", "⛈️", "⚡"),
        WeatherCategory::Unknown => ("---", "☁️", "☁"),
    }
}

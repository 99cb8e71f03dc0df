//! Maps a weather condition to the visual tokens a front-end renders.

use chrono::{Local, Timelike};
use serde::Serialize;

/// Condition families the front-end knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    Rain,
    Thunderstorm,
    Snow,
    Clouds,
    Clear,
    Fog,
    Other,
}

impl ConditionKind {
    /// Classify a provider condition string such as "Rain" or "Mist".
    pub fn from_condition(condition: &str) -> Self {
        match condition.trim().to_lowercase().as_str() {
            "rain" | "drizzle" => Self::Rain,
            "thunderstorm" => Self::Thunderstorm,
            "snow" => Self::Snow,
            "clouds" => Self::Clouds,
            "clear" => Self::Clear,
            "mist" | "fog" => Self::Fog,
            _ => Self::Other,
        }
    }
}

/// Ordered colour stops of the background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Gradient(pub &'static [&'static str]);

impl std::fmt::Display for Gradient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" → "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lighting {
    /// Main light intensity, between 0.2 and 1.2.
    pub intensity: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneFog {
    pub near: f32,
    pub far: f32,
    pub density: f32,
}

/// Overlay effect drawn on top of the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectVariant {
    Rain,
    Storm,
    Snow,
    Clouds,
    Sunshine,
    Fog,
    None,
}

impl EffectVariant {
    /// Number of animated particles (or cloud groups) the effect uses.
    pub fn particle_count(self) -> usize {
        match self {
            Self::Rain | Self::Storm => 1200,
            Self::Snow => 600,
            Self::Fog => 200,
            Self::Clouds => 5,
            Self::Sunshine | Self::None => 0,
        }
    }

    pub fn has_lightning(self) -> bool {
        self == Self::Storm
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub condition: ConditionKind,
    pub gradient: Gradient,
    pub lighting: Lighting,
    pub effect: EffectVariant,
    pub fog: Option<SceneFog>,
    pub emoji: &'static str,
    pub label: &'static str,
}

const STORM: Gradient = Gradient(&["gray-900", "purple-900", "black"]);
const NIGHT_SKY: Gradient = Gradient(&["indigo-900", "purple-900", "black"]);

/// Pure and deterministic: same inputs, same output.
pub fn map_weather_to_presentation(condition_main: &str, is_night: bool) -> Presentation {
    let condition = ConditionKind::from_condition(condition_main);

    // (day, night) pairs; thunderstorm has no split.
    let (gradient, intensity) = match condition {
        ConditionKind::Rain => pick(
            is_night,
            (Gradient(&["gray-500", "gray-600", "gray-700"]), 0.3),
            (Gradient(&["gray-800", "gray-700", "slate-900"]), 0.2),
        ),
        ConditionKind::Thunderstorm => (STORM, 0.2),
        ConditionKind::Snow => pick(
            is_night,
            (Gradient(&["blue-100", "blue-200", "blue-300"]), 0.9),
            (Gradient(&["blue-900", "indigo-800", "slate-800"]), 0.5),
        ),
        ConditionKind::Clouds => pick(
            is_night,
            (Gradient(&["gray-300", "gray-400", "gray-500"]), 0.5),
            (Gradient(&["gray-700", "gray-600", "gray-800"]), 0.3),
        ),
        ConditionKind::Clear => pick(
            is_night,
            (Gradient(&["blue-400", "sky-500", "cyan-400"]), 1.2),
            (NIGHT_SKY, 0.4),
        ),
        ConditionKind::Fog => pick(
            is_night,
            (Gradient(&["gray-400", "gray-300", "gray-400"]), 0.4),
            (Gradient(&["gray-800", "gray-700", "gray-900"]), 0.25),
        ),
        ConditionKind::Other => pick(
            is_night,
            (Gradient(&["blue-400", "blue-500", "blue-600"]), 1.0),
            (NIGHT_SKY, 0.4),
        ),
    };

    let (effect, color, fog, emoji, label) = match condition {
        ConditionKind::Rain => {
            (EffectVariant::Rain, "#708090", Some(scene_fog(10.0, 40.0, 0.02)), "🌧️", "Rainy")
        }
        ConditionKind::Thunderstorm => {
            (EffectVariant::Storm, "#4B0082", Some(scene_fog(5.0, 30.0, 0.05)), "⛈️", "Stormy")
        }
        ConditionKind::Snow => {
            (EffectVariant::Snow, "#F0F8FF", Some(scene_fog(15.0, 50.0, 0.01)), "❄️", "Snowy")
        }
        ConditionKind::Clouds => (EffectVariant::Clouds, "#D3D3D3", None, "☁️", "Cloudy"),
        ConditionKind::Clear if is_night => {
            (EffectVariant::Sunshine, "#FFD700", None, "🌙", "Clear night")
        }
        ConditionKind::Clear => (EffectVariant::Sunshine, "#FFD700", None, "☀️", "Sunny"),
        ConditionKind::Fog => {
            (EffectVariant::Fog, "#C0C0C0", Some(scene_fog(5.0, 25.0, 0.08)), "🌫️", "Foggy")
        }
        ConditionKind::Other => (EffectVariant::None, "#FFFFFF", None, "🌤️", "Fair"),
    };

    Presentation {
        condition,
        gradient,
        lighting: Lighting { intensity, color },
        effect,
        fog,
        emoji,
        label,
    }
}

fn pick<T>(is_night: bool, day: T, night: T) -> T {
    if is_night { night } else { day }
}

const fn scene_fog(near: f32, far: f32, density: f32) -> SceneFog {
    SceneFog { near, far, density }
}

/// Night is 18:00 through 06:59.
pub fn is_night(hour: u32) -> bool {
    hour >= 18 || hour <= 6
}

pub fn is_night_now() -> bool {
    is_night(Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[&str] =
        &["Rain", "Drizzle", "Thunderstorm", "Snow", "Clouds", "Clear", "Mist", "Fog", "Haze", ""];

    #[test]
    fn mapping_is_deterministic() {
        for condition in ALL {
            for night in [false, true] {
                assert_eq!(
                    map_weather_to_presentation(condition, night),
                    map_weather_to_presentation(condition, night)
                );
            }
        }
    }

    #[test]
    fn thunderstorm_has_no_day_night_split() {
        let day = map_weather_to_presentation("Thunderstorm", false);
        let night = map_weather_to_presentation("Thunderstorm", true);
        assert_eq!(day.gradient, night.gradient);
        assert_eq!(day.gradient, STORM);
        assert_eq!(day.lighting, night.lighting);
    }

    #[test]
    fn thunderstorm_is_darkest() {
        let storm = map_weather_to_presentation("Thunderstorm", false).lighting.intensity;
        for condition in ALL {
            for night in [false, true] {
                let p = map_weather_to_presentation(condition, night);
                assert!(p.lighting.intensity >= storm, "{condition} night={night}");
            }
        }
    }

    #[test]
    fn intensity_and_stops_stay_bounded() {
        for condition in ALL {
            for night in [false, true] {
                let p = map_weather_to_presentation(condition, night);
                assert!((0.2..=1.2).contains(&p.lighting.intensity));
                assert!((2..=3).contains(&p.gradient.0.len()));
            }
        }
    }

    #[test]
    fn aliases_share_a_presentation() {
        assert_eq!(
            map_weather_to_presentation("Rain", false),
            map_weather_to_presentation("drizzle", false)
        );
        assert_eq!(
            map_weather_to_presentation("MIST", true),
            map_weather_to_presentation("fog", true)
        );
    }

    #[test]
    fn clear_sky_changes_at_night() {
        let day = map_weather_to_presentation("Clear", false);
        let night = map_weather_to_presentation("Clear", true);
        assert_ne!(day.gradient, night.gradient);
        assert_eq!(day.emoji, "☀️");
        assert_eq!(night.emoji, "🌙");
        assert_eq!(day.lighting.intensity, 1.2);
    }

    #[test]
    fn unknown_condition_uses_default() {
        let p = map_weather_to_presentation("Haze", false);
        assert_eq!(p.condition, ConditionKind::Other);
        assert_eq!(p.effect, EffectVariant::None);
        assert_eq!(p.gradient, Gradient(&["blue-400", "blue-500", "blue-600"]));
    }

    #[test]
    fn effects_carry_particles_and_fog() {
        let rain = map_weather_to_presentation("Rain", false);
        assert_eq!(rain.effect.particle_count(), 1200);
        assert_eq!(rain.fog, Some(SceneFog { near: 10.0, far: 40.0, density: 0.02 }));

        let storm = map_weather_to_presentation("Thunderstorm", true);
        assert!(storm.effect.has_lightning());

        assert_eq!(map_weather_to_presentation("Snow", false).effect.particle_count(), 600);
        assert!(map_weather_to_presentation("Clear", false).fog.is_none());
    }

    #[test]
    fn night_hours() {
        assert!(is_night(0));
        assert!(is_night(6));
        assert!(!is_night(7));
        assert!(!is_night(17));
        assert!(is_night(18));
        assert!(is_night(23));
    }

    #[test]
    fn gradient_display_joins_stops() {
        assert_eq!(STORM.to_string(), "gray-900 → purple-900 → black");
    }
}

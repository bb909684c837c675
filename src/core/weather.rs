//! Mock weather conditions.
//!
//! SmartFit has no weather provider. These fixed conditions stand in for one,
//! both for the `/today` card and for tagging generated outfits.

use crate::models::Weather;
use rand::{Rng, seq::IndexedRandom};

/// A displayable weather reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCondition {
    /// Temperature label, e.g. "22°C"
    pub temp: &'static str,
    /// Emoji and description, e.g. "☀️ Sunny"
    pub label: &'static str,
    /// Weather tag this reading maps to
    pub kind: Weather,
}

/// The fixed set of mock readings, one per weather tag.
pub const CONDITIONS: [WeatherCondition; 4] = [
    WeatherCondition {
        temp: "22°C",
        label: "☀️ Sunny",
        kind: Weather::Sunny,
    },
    WeatherCondition {
        temp: "18°C",
        label: "☁️ Cloudy",
        kind: Weather::Cloudy,
    },
    WeatherCondition {
        temp: "15°C",
        label: "🌧️ Rainy",
        kind: Weather::Rainy,
    },
    WeatherCondition {
        temp: "8°C",
        label: "❄️ Cold",
        kind: Weather::Cold,
    },
];

/// Picks a uniformly random mock reading.
pub fn random_condition<R: Rng + ?Sized>(rng: &mut R) -> WeatherCondition {
    *CONDITIONS.choose(rng).unwrap_or(&CONDITIONS[0])
}

/// The mock reading for a weather tag.
#[must_use]
pub fn condition_for(kind: Weather) -> WeatherCondition {
    CONDITIONS
        .into_iter()
        .find(|c| c.kind == kind)
        .unwrap_or(CONDITIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_every_weather_has_a_condition() {
        for kind in Weather::ALL {
            assert_eq!(condition_for(kind).kind, kind);
        }
    }

    #[test]
    fn test_random_condition_covers_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(random_condition(&mut rng).kind);
        }
        assert_eq!(seen.len(), CONDITIONS.len());
    }
}

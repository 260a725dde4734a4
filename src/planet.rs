use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::imager;

#[derive(Clone, Debug, Display, Serialize, Deserialize)]
#[display("{name}")]
pub struct Planet {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl Planet {
    pub fn new(name: &str, seed: &str, description: &str) -> Self {
        Planet {
            name: name.to_string(),
            description: description.to_string(),
            image_url: imager::placeholder_url(seed),
        }
    }

    /// The catalog shown on the Explore and Life tabs.
    pub fn catalog() -> Vec<Planet> {
        vec![
            Planet::new(
                "Mars",
                "mars",
                "The red planet, with a thin atmosphere and potential for future human colonies.",
            ),
            Planet::new(
                "Europa (Moon of Jupiter)",
                "europa",
                "An icy moon whose subsurface ocean may harbor life.",
            ),
            Planet::new(
                "Kepler-186f",
                "kepler",
                "An exoplanet in the habitable zone that may offer Earth-like conditions.",
            ),
            Planet::new(
                "Venus",
                "venus",
                "A hot, toxic world with a crushing atmosphere of thick cloud.",
            ),
            Planet::new(
                "Titan (Moon of Saturn)",
                "titan",
                "Saturn's largest moon, wrapped in dense haze with lakes of liquid methane.",
            ),
            Planet::new(
                "Enceladus (Moon of Saturn)",
                "enceladus",
                "A small icy moon whose geysers betray a hidden subsurface ocean.",
            ),
            Planet::new(
                "Proxima Centauri b",
                "proxima",
                "An exoplanet in the habitable zone of the star nearest to the Sun.",
            ),
            Planet::new(
                "TRAPPIST-1e",
                "trappist",
                "An Earth-sized exoplanet in a system of seven rocky worlds.",
            ),
        ]
    }

    /// Synthetic planet backing the astronaut chat, which is not tied to any
    /// settlement.
    pub fn deep_space() -> Planet {
        Planet {
            name: "Space".to_string(),
            description: "Interstellar travel".to_string(),
            image_url: String::new(),
        }
    }

    /// Synthetic planet backing the luminary chats.
    pub fn history_of_science() -> Planet {
        Planet {
            name: "History of Science".to_string(),
            description: "Conversations with the greatest minds of history".to_string(),
            image_url: String::new(),
        }
    }
}

/// Fields of the custom planet creation form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustomPlanetParams {
    pub name: String,
    pub planet_type: String,
    pub atmosphere: String,
    pub gravity: String,
    pub life_form: String,
    pub resources: String,
    pub description: String,
}

impl CustomPlanetParams {
    pub fn to_planet(&self) -> Planet {
        let description = if self.description.is_empty() {
            "A planet of your own invention.".to_string()
        } else {
            self.description.clone()
        };
        Planet {
            name: self.name.clone(),
            description,
            image_url: imager::placeholder_url(&self.name),
        }
    }

    /// The briefing handed to the simulator in place of a known planet name.
    pub fn briefing(&self) -> String {
        format!(
            "Planet name: {}\n\
             Planet type: {}\n\
             Atmosphere: {}\n\
             Gravity: {}\n\
             Dominant life: {}\n\
             Key resources: {}\n\
             Additional notes: {}",
            self.name,
            self.planet_type,
            self.atmosphere,
            self.gravity,
            self.life_form,
            self.resources,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_the_eight_known_worlds() {
        let catalog = Planet::catalog();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.iter().any(|p| p.name == "Mars"));
        assert!(catalog.iter().all(|p| !p.image_url.is_empty()));
    }

    #[test]
    fn briefing_lists_every_form_field() {
        let params = CustomPlanetParams {
            name: "New Eden".to_string(),
            planet_type: "Ocean world".to_string(),
            atmosphere: "Dense nitrogen".to_string(),
            gravity: "0.9g".to_string(),
            life_form: "Coral analogues".to_string(),
            resources: "Deuterium".to_string(),
            description: "Warm shallow seas.".to_string(),
        };
        let briefing = params.briefing();
        for field in [
            "New Eden",
            "Ocean world",
            "Dense nitrogen",
            "0.9g",
            "Coral analogues",
            "Deuterium",
            "Warm shallow seas.",
        ] {
            assert!(briefing.contains(field), "missing {field}");
        }
    }
}

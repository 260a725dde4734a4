// src/simulation.rs
//
// Structured payloads returned by the gateway. The schema functions mirror
// the serde structs field for field; the completion endpoint enforces them
// through its JSON-schema response format.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The settlement report generated for a selected or invented planet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationData {
    pub city_name: String,
    pub city_overview: String,
    pub lifestyle: String,
    pub technology: String,
    pub city_image_prompt: String,
}

impl SimulationData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Backing report for the astronaut chat, which has no settlement.
    pub fn deep_space() -> Self {
        SimulationData {
            city_name: "The Milky Way".to_string(),
            city_overview: "Exploring space".to_string(),
            lifestyle: String::new(),
            technology: String::new(),
            city_image_prompt: String::new(),
        }
    }

    /// Backing report for the luminary chats.
    pub fn arena_of_knowledge() -> Self {
        SimulationData {
            city_name: "The Arena of Knowledge".to_string(),
            city_overview: "Exploring ideas".to_string(),
            lifestyle: String::new(),
            technology: String::new(),
            city_image_prompt: String::new(),
        }
    }

    pub fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "city_name": {
                    "type": "string",
                    "description": "A creative, fitting name for the settlement"
                },
                "city_overview": {
                    "type": "string",
                    "description": "General description of the city, its architecture and appearance"
                },
                "lifestyle": {
                    "type": "string",
                    "description": "The inhabitants' way of life, culture and daily activities"
                },
                "technology": {
                    "type": "string",
                    "description": "The level of technology, innovations and tools in use"
                },
                "city_image_prompt": {
                    "type": "string",
                    "description": "A detailed, artistic English prompt for a text-to-image model, e.g. \"futuristic martian city, red dust, glass domes, cyberpunk, hyperrealistic, octane render, 8k\""
                }
            },
            "required": ["city_name", "city_overview", "lifestyle", "technology", "city_image_prompt"],
            "additionalProperties": false
        })
    }
}

/// The astrobiology assessment generated on the Life tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeAnalysisData {
    pub life_possibility: String,
    pub dominant_life_form: String,
    pub reasoning: String,
    pub adaptation_features: String,
    pub life_form_image_prompt: String,
}

impl LifeAnalysisData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "life_possibility": {
                    "type": "string",
                    "description": "Likelihood of life (e.g. high, moderate, low, very unlikely)"
                },
                "dominant_life_form": {
                    "type": "string",
                    "description": "Description of the most plausible dominant life form (e.g. chemotrophic microbes, silicon-based life)"
                },
                "reasoning": {
                    "type": "string",
                    "description": "Careful scientific reasoning for the prediction, based on the planet's characteristics"
                },
                "adaptation_features": {
                    "type": "string",
                    "description": "Key adaptations this form of life would need to survive"
                },
                "life_form_image_prompt": {
                    "type": "string",
                    "description": "A detailed, artistic English prompt for a text-to-image model, e.g. \"bioluminescent silicon-based creature, Europa's deep ocean, dark, cinematic lighting, detailed, macro shot\""
                }
            },
            "required": ["life_possibility", "dominant_life_form", "reasoning", "adaptation_features", "life_form_image_prompt"],
            "additionalProperties": false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_schema_requires_every_struct_field() {
        let schema = SimulationData::schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        for field in [
            "city_name",
            "city_overview",
            "lifestyle",
            "technology",
            "city_image_prompt",
        ] {
            assert!(required.contains(&field));
            assert!(schema["properties"][field].is_object());
        }
    }

    #[test]
    fn life_analysis_roundtrips_through_json() {
        let data = LifeAnalysisData {
            life_possibility: "moderate".to_string(),
            dominant_life_form: "chemotrophic microbes".to_string(),
            reasoning: "Subsurface ocean kept liquid by tidal heating.".to_string(),
            adaptation_features: "Pressure tolerance, chemosynthesis.".to_string(),
            life_form_image_prompt: "bioluminescent microbial mats".to_string(),
        };
        let parsed = LifeAnalysisData::from_json(&serde_json::to_string(&data).unwrap()).unwrap();
        assert_eq!(parsed.dominant_life_form, "chemotrophic microbes");
    }
}

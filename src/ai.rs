// src/ai.rs
//
// The gateway to the generative backend. Everything the rest of the app
// knows about the AI goes through `SimulationAI`: structured settlement and
// life-analysis reports, free-text image prompts, and persona chat turns.
// Conversation history lives client-side in `ChatSession`; a session is
// replaced wholesale when the user picks a new chat target, and its id tags
// in-flight replies so a superseded session's answers can be dropped.

use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat, ResponseFormatJsonSchema,
    },
};
use tokio::time::{Duration, timeout};
use uuid::Uuid;

use crate::error::AIError;
use crate::message::{Message, MessageType};
use crate::persona::ChatTarget;
use crate::simulation::{LifeAnalysisData, SimulationData};

const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

const IMAGE_PROMPT_INSTRUCTION: &str = "You are an expert prompt engineer for a \
text-to-image AI model. Your task is to create a detailed, visually rich, and \
artistic prompt in English based on the user's subject. The prompt should be a \
single continuous string of descriptive keywords and phrases, separated by \
commas. Focus on style, lighting, composition, and specific details. Do not add \
any conversational text or explanations. Only output the prompt itself.";

/// A persona conversation. History is kept here, not server-side, so every
/// turn resends the instruction plus the transcript.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    pub system_instruction: String,
    pub transcript: Vec<Message>,
}

impl ChatSession {
    pub fn new(target: &ChatTarget, planet_name: &str, city_name: &str) -> Self {
        ChatSession {
            id: Uuid::new_v4(),
            system_instruction: target.system_instruction(planet_name, city_name),
            transcript: Vec::new(),
        }
    }

    pub fn push_user(&mut self, content: String) {
        self.transcript.push(Message::new(content, MessageType::User));
    }

    pub fn push_model(&mut self, content: String) {
        self.transcript.push(Message::new(content, MessageType::Model));
    }
}

#[derive(Clone)]
pub struct SimulationAI {
    client: Client<OpenAIConfig>,
    model: String,
}

impl SimulationAI {
    pub fn new(api_key: String, model: String) -> Self {
        let openai_config = OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(openai_config);

        Self { client, model }
    }

    /// Generates the settlement report for a planet name or briefing.
    pub async fn generate_simulation(
        &self,
        planet_briefing: &str,
    ) -> Result<SimulationData, AIError> {
        let prompt = format!(
            "You are an intelligent life simulator. Based on known scientific data, or on \
             the description provided for the planet or moon below, design a plausible \
             futuristic city. The descriptions should be creative, science-fictional and \
             engaging.\n\nPlanet/moon: \"{planet_briefing}\"\n\nProvide precise, creative \
             and engaging descriptions for every section."
        );
        let payload = self
            .structured_completion(&prompt, 0.8, "settlement_report", SimulationData::schema())
            .await?;
        Ok(SimulationData::from_json(&payload)?)
    }

    /// Generates the astrobiology assessment for the Life tab.
    pub async fn generate_life_analysis(
        &self,
        planet_briefing: &str,
    ) -> Result<LifeAnalysisData, AIError> {
        let prompt = format!(
            "You are an expert astrobiologist. Analyze the potential for life on the planet \
             or moon below. Based on its known characteristics, offer a reasonable, \
             well-argued scientific hypothesis.\n\nPlanet/moon: \"{planet_briefing}\"\n\n\
             Provide precise, creative and scientific descriptions for every section."
        );
        let payload = self
            .structured_completion(&prompt, 0.7, "life_analysis", LifeAnalysisData::schema())
            .await?;
        Ok(LifeAnalysisData::from_json(&payload)?)
    }

    /// Turns a plain subject into a polished text-to-image prompt.
    pub async fn create_image_prompt(&self, subject: &str) -> Result<String, AIError> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(IMAGE_PROMPT_INSTRUCTION)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(format!("Subject: \"{subject}\""))
                .build()?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .build()?;

        let content = self.complete(request).await?;
        Ok(content.trim().to_string())
    }

    /// Runs one turn of a persona conversation. The transcript must already
    /// contain the user's latest message.
    pub async fn chat_turn(&self, session: &ChatSession) -> Result<String, AIError> {
        let mut messages: Vec<ChatCompletionRequestMessage> =
            vec![
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(session.system_instruction.as_str())
                    .build()?
                    .into(),
            ];
        for message in &session.transcript {
            match message.message_type {
                MessageType::User => messages.push(
                    ChatCompletionRequestUserMessageArgs::default()
                        .content(message.content.as_str())
                        .build()?
                        .into(),
                ),
                MessageType::Model => messages.push(
                    ChatCompletionRequestAssistantMessageArgs::default()
                        .content(message.content.as_str())
                        .build()?
                        .into(),
                ),
                // Console notices never reach the model.
                MessageType::System => {}
            }
        }

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .temperature(0.75)
            .messages(messages)
            .build()?;

        self.complete(request).await
    }

    async fn structured_completion(
        &self,
        prompt: &str,
        temperature: f32,
        schema_name: &str,
        schema: serde_json::Value,
    ) -> Result<String, AIError> {
        let messages: Vec<ChatCompletionRequestMessage> =
            vec![
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .temperature(temperature)
            .messages(messages)
            .response_format(ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    description: None,
                    name: schema_name.to_string(),
                    schema: Some(schema),
                    strict: Some(true),
                },
            })
            .build()?;

        self.complete(request).await
    }

    async fn complete(
        &self,
        request: async_openai::types::CreateChatCompletionRequest,
    ) -> Result<String, AIError> {
        let response = match timeout(GENERATION_TIMEOUT, self.client.chat().create(request)).await
        {
            Ok(response) => response?,
            Err(_) => return Err(AIError::Timeout),
        };

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AIError::NoMessageFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::CityRole;

    #[test]
    fn new_sessions_get_fresh_ids() {
        let target = ChatTarget::Resident(CityRole::TourGuide);
        let a = ChatSession::new(&target, "Mars", "Dome One");
        let b = ChatSession::new(&target, "Mars", "Dome One");
        assert_ne!(a.id, b.id);
        assert!(a.system_instruction.contains("Dome One"));
        assert!(a.transcript.is_empty());
    }

    #[test]
    fn transcript_alternates_speakers() {
        let mut session = ChatSession::new(&ChatTarget::Astronaut, "Space", "Milky Way");
        session.push_user("What does re-entry feel like?".to_string());
        session.push_model("Like riding a meteor with opinions.".to_string());
        assert_eq!(session.transcript[0].message_type, MessageType::User);
        assert_eq!(session.transcript[1].message_type, MessageType::Model);
    }
}

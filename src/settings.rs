use async_openai::error::OpenAIError;
// Import necessary libraries and modules for API interaction, file I/O, and serialization.
use async_openai::{Client, config::OpenAIConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

// Define a structure to hold application settings with serialization and deserialization capabilities.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    pub language: String, // Preferred language setting for the application.
    pub openai_api_key: Option<String>, // Optional API key for OpenAI services.
    pub model: String,
    pub debug_mode: bool, // Flag to enable or disable debug mode.
}

// Implement the Default trait for Settings to provide a method to create default settings.
impl Default for Settings {
    fn default() -> Self {
        Settings {
            language: "English".to_string(), // Default language setting.
            openai_api_key: None,            // No API key by default.
            model: "gpt-4o-mini".to_string(),
            debug_mode: false, // Debug mode disabled by default.
        }
    }
}

pub fn data_dir() -> PathBuf {
    dir::home_dir()
        .expect("Failed to get home directory")
        .join("planetfall")
        .join("data")
}

// Additional implementation block for Settings.
impl Settings {
    // Load settings from the default file path.
    pub fn load() -> io::Result<Self> {
        Self::load_settings_from_file(data_dir().join("settings.json"))
    }

    // Save current settings to the default file path.
    pub fn save(&self) -> io::Result<()> {
        self.save_to_file(data_dir().join("settings.json"))
    }

    // Load settings from a specified file path.
    pub fn load_settings_from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let data = fs::read_to_string(path)?; // Read settings from file.
        let settings = serde_json::from_str(&data)?; // Deserialize JSON data into settings.
        Ok(settings)
    }

    // Save current settings to a specified file path.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let data = serde_json::to_string_pretty(self)?; // Serialize settings into pretty JSON format.
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?; // Create the directory if it doesn't exist.
        }
        let mut file = fs::File::create(path)?; // Create or overwrite the file.
        file.write_all(data.as_bytes())?; // Write the serialized data to the file.
        Ok(())
    }

    // Asynchronously validate an API key against the models endpoint.
    pub async fn validate_api_key(api_key: &str) -> bool {
        let client = Client::with_config(OpenAIConfig::new().with_api_key(api_key));
        match client.models().list().await {
            Ok(_) => true,
            Err(OpenAIError::Reqwest(e)) => {
                log::error!("API key validation failed, network problem: {e}");
                false
            }
            Err(e) => {
                log::error!("API key validation failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.openai_api_key = Some("sk-test".to_string());
        settings.debug_mode = true;
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_settings_from_file(&path).unwrap();
        assert_eq!(loaded.openai_api_key.as_deref(), Some("sk-test"));
        assert!(loaded.debug_mode);
        assert_eq!(loaded.model, "gpt-4o-mini");
    }

    #[test]
    fn missing_file_is_an_error_not_a_panic() {
        assert!(Settings::load_settings_from_file("/nonexistent/settings.json").is_err());
    }
}

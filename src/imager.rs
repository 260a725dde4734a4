use crate::error::{AppError, Result};
use crate::settings::{Settings, data_dir};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{CreateImageRequestArgs, ImageModel, ImageResponseFormat, ImageSize},
};
use std::path::PathBuf;
use std::process::Command;
use tokio::time::{Duration, timeout};

/// Builds the seeded placeholder URL used for catalog art. No processing
/// happens locally; the seed just keeps the picture stable per planet.
pub fn placeholder_url(seed: &str) -> String {
    let slug: String = seed.split_whitespace().collect::<Vec<_>>().join("-");
    format!("https://picsum.photos/seed/{slug}/800/600")
}

/// Downloads a placeholder image and opens it with the OS image viewer.
pub async fn fetch_and_open_placeholder(url: &str, name: &str) -> Result<PathBuf> {
    let path = download_placeholder(url, name).await?;
    open_with_viewer(&path)?;
    Ok(path)
}

async fn download_placeholder(url: &str, name: &str) -> Result<PathBuf> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| AppError::Image(format!("Failed to fetch placeholder: {e}")))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Image(format!("Failed to read placeholder: {e}")))?;

    let dir = data_dir().join("images");
    std::fs::create_dir_all(&dir)?;
    let slug: String = name.split_whitespace().collect::<Vec<_>>().join("-");
    let path = dir.join(format!("{slug}.jpg"));
    std::fs::write(&path, &bytes)?;
    Ok(path)
}

/// Generates an image from a prompt, saves it under the data directory, and
/// opens it with the OS image viewer.
pub async fn generate_and_save_image(prompt: &str) -> Result<PathBuf> {
    let settings = Settings::load().unwrap_or_default();
    let api_key = match settings.openai_api_key {
        Some(key) => key,
        None => return Err(AppError::AIClientNotInitialized),
    };

    let openai_config = OpenAIConfig::new().with_api_key(api_key);
    let client = Client::with_config(openai_config);
    let request = CreateImageRequestArgs::default()
        .prompt(prompt)
        .model(ImageModel::DallE3)
        .n(1)
        .response_format(ImageResponseFormat::Url)
        .size(ImageSize::S1792x1024)
        .build()?;

    let response = match timeout(Duration::from_secs(120), client.images().create(request)).await {
        Ok(res) => res?,
        Err(_) => return Err(AppError::Image("Image request timed out.".to_string())),
    };

    if response.data.is_empty() {
        return Err(AppError::Image("No image URLs received.".to_string()));
    }

    let path = data_dir().join("images");
    let paths = response
        .save(path)
        .await
        .map_err(|e| AppError::Image(e.to_string()))?;
    if let Some(path) = paths.first() {
        open_with_viewer(path)?;
        Ok(path.clone())
    } else {
        Err(AppError::Image("No image file path received.".to_string()))
    }
}

fn open_with_viewer(path: &PathBuf) -> Result<()> {
    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::Image("Invalid path".to_string()))?;

    // Open the image using the default image viewer based on the OS
    #[cfg(target_os = "macos")]
    Command::new("open").arg(path_str).spawn()?;

    #[cfg(target_os = "windows")]
    Command::new("cmd")
        .args(["/C", "start", "", path_str])
        .spawn()?;

    #[cfg(target_os = "linux")]
    Command::new("xdg-open").arg(path_str).spawn()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_urls_are_seeded_and_slugged() {
        assert_eq!(
            placeholder_url("mars"),
            "https://picsum.photos/seed/mars/800/600"
        );
        assert_eq!(
            placeholder_url("New  Eden Prime"),
            "https://picsum.photos/seed/New-Eden-Prime/800/600"
        );
    }
}

use serde::Deserialize;
use std::fs;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub api_url: String,
}

pub fn load_config_from_file(file_path: &str) -> Result<Config, String> {
    match fs::read_to_string(file_path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(loaded_config) => {
                if loaded_config.api_url.trim().is_empty() {
                    Err(format!(
                        "Error: api_url specified in {} is empty.",
                        file_path
                    ))
                } else {
                    Ok(loaded_config)
                }
            }
            Err(e) => Err(format!("Failed to parse {}: {}", file_path, e)),
        },
        Err(e) => Err(format!(
            "Failed to read {}: {}. Please ensure it exists.",
            file_path, e
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let result = load_config_from_file("definitely-not-here.toml");
        assert!(result.is_err());
    }
}

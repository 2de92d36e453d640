//! `taleweaver models` -- list what the Ollama server has installed.

use anyhow::Result;
use console::style;
use serde_json::Value;

use crate::state::AppState;

pub async fn list_models(state: &AppState, json: bool) -> Result<()> {
    let base_url = &state.config.backend.base_url;
    let models = match state.game_master.list_models().await {
        Ok(models) => models,
        Err(err) => {
            if json {
                let body = serde_json::json!({
                    "error": "Cannot connect to Ollama",
                    "details": err.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                eprintln!(
                    "  {} Cannot connect to Ollama at {}",
                    style("✗").red(),
                    style(base_url).cyan()
                );
                eprintln!("  {}", style(&err).dim());
                eprintln!(
                    "  {}",
                    style("Make sure Ollama is running with: ollama serve").yellow()
                );
            }
            return Err(err.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    let configured = &state.config.backend.model;
    println!();
    println!(
        "  {} {} model(s) on {}",
        style("⚡").bold(),
        style(models.len()).bold(),
        style(base_url).cyan()
    );
    println!();
    for model in &models {
        let name = model_name(model);
        if name == configured {
            println!("  {} {}", style("●").green(), style(name).bold());
        } else {
            println!("  {} {}", style("○").dim(), name);
        }
    }
    if !models.iter().any(|m| model_name(m) == configured) {
        println!();
        println!(
            "  {} configured model '{}' is not installed. Run: ollama pull {}",
            style("!").yellow().bold(),
            configured,
            configured
        );
    }
    println!();
    Ok(())
}

fn model_name(model: &Value) -> &str {
    model
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_name() {
        assert_eq!(model_name(&json!({"name": "llama3.1:8b"})), "llama3.1:8b");
        assert_eq!(model_name(&json!({"size": 1})), "<unnamed>");
    }
}

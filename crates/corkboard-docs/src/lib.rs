//! Corkboard Docs
//!
//! Renders the component documentation cards (prop tables, examples and
//! option grids) to a standalone HTML page or to JSON.

mod config;

pub use config::{Component, DocsConfig, Format};

use std::io::Write;

use corkboard_core::docs::{self, ComponentDoc};
use thiserror::Error;

/// Docs rendering errors.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for docs operations.
pub type DocsResult<T> = Result<T, DocsError>;

const STYLESHEET: &str = "\
body { font-family: sans-serif; margin: 2rem; color: #333; }
.card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; margin-bottom: 2rem; }
.props { border-collapse: collapse; }
.props td, .props th { border-bottom: 1px solid #eee; padding: 4px 8px; text-align: left; }
.combinations { display: flex; flex-wrap: wrap; gap: 8px; }";

/// Component docs selected by `config`.
pub fn selected_docs(config: &DocsConfig) -> Vec<ComponentDoc> {
    match config.component {
        None => docs::all_docs(),
        Some(Component::Touchable) => vec![docs::touchable_doc()],
        Some(Component::Label) => vec![docs::label_doc()],
        Some(Component::Checkbox) => vec![docs::checkbox_doc()],
    }
}

/// Render a full HTML page for `cards`.
pub fn render_html(cards: &[ComponentDoc]) -> String {
    let body: String = cards.iter().map(|card| card.render().to_html()).collect();
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Corkboard</title>\
         <style>{STYLESHEET}</style></head><body>{body}</body></html>\n"
    )
}

pub fn render_json(cards: &[ComponentDoc]) -> DocsResult<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}

/// Render according to `config` and write to its destination.
pub fn run(config: &DocsConfig, stdout: &mut impl Write) -> DocsResult<()> {
    let cards = selected_docs(config);
    log::debug!("rendering {} card(s) as {:?}", cards.len(), config.format);

    let output = match config.format {
        Format::Html => render_html(&cards),
        Format::Json => render_json(&cards)?,
    };

    match &config.out {
        Some(path) => {
            std::fs::write(path, &output)?;
            log::info!("Wrote docs to: {:?}", path);
        }
        None => stdout.write_all(output.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_docs() {
        assert_eq!(selected_docs(&DocsConfig::default()).len(), 3);
        let config = DocsConfig {
            component: Some(Component::Checkbox),
            ..Default::default()
        };
        let docs = selected_docs(&config);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "Checkbox");
    }

    #[test]
    fn test_html_page() {
        let mut out = Vec::new();
        run(&DocsConfig::default(), &mut out).unwrap();
        let html = String::from_utf8(out).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<section class="card" id="touchable">"#));
        assert!(html.contains(r#"<section class="card" id="checkbox">"#));
        assert!(html.contains(r#"id="example-15""#));
    }

    #[test]
    fn test_json_output() {
        let config = DocsConfig {
            format: Format::Json,
            component: Some(Component::Label),
            out: None,
        };
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["name"], "Label");
        assert_eq!(value[0]["props"][1]["name"], "html_for");
        assert_eq!(value[0]["props"][1]["required"], true);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.html");
        let config = DocsConfig {
            out: Some(path.clone()),
            ..Default::default()
        };
        let mut stdout = Vec::new();
        run(&config, &mut stdout).unwrap();

        assert!(stdout.is_empty());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<h2>Label</h2>"));
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = DocsConfig {
            out: Some(dir.path().join("missing").join("docs.html")),
            ..Default::default()
        };
        let result = run(&config, &mut Vec::new());
        assert!(matches!(result, Err(DocsError::Io(_))));
    }
}

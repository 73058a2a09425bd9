use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::DeckError;
use crate::models::{Deck, DeckData};

/// 内置的欢迎幻灯片，未指定文件时使用
const WELCOME_DECK: &str = include_str!("../decks/welcome.toml");

/// 从TOML文件加载幻灯片
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let content = fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let deck = parse_deck(&content, &path.display().to_string())?;
    info!(path = %path.display(), slides = deck.len().get(), "幻灯片已加载");
    Ok(deck)
}

/// 解析TOML文本
pub fn parse_deck(content: &str, origin: &str) -> Result<Deck, DeckError> {
    let data: DeckData = toml::from_str(content).map_err(|source| DeckError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    Deck::from_data(data, origin)
}

pub fn welcome_deck() -> Result<Deck, DeckError> {
    parse_deck(WELCOME_DECK, "<内置欢迎页>")
}

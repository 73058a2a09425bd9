use std::num::NonZeroUsize;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::Error};

use crate::error::DeckError;

/// 幻灯片文件的元信息
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeckMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,
}

/// 日期既可以写成 TOML 日期 `2026-10-15`，也可以写成字符串 `"2026-10-15"`
fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<toml::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(toml::Value::Datetime(datetime)) => {
            let date = datetime
                .date
                .ok_or_else(|| D::Error::custom(format!("{datetime} 缺少日期部分")))?;
            NaiveDate::from_ymd_opt(
                i32::from(date.year),
                u32::from(date.month),
                u32::from(date.day),
            )
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("无效日期 {datetime}")))
        }
        Some(toml::Value::String(text)) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .map(Some)
            .map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!("日期格式错误: {other}"))),
    }
}

impl DeckMeta {
    /// 标题栏文字，例如 `标题 · 作者 · 2026-10-15`
    pub fn heading(&self) -> String {
        let mut parts = Vec::new();
        if !self.title.is_empty() {
            parts.push(self.title.clone());
        }
        if !self.author.is_empty() {
            parts.push(self.author.clone());
        }
        if let Some(date) = self.date {
            parts.push(date.format("%Y-%m-%d").to_string());
        }
        parts.join(" · ")
    }
}

/// 单张幻灯片
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Slide {
    pub fn line_count(&self) -> usize {
        self.body.lines().count()
    }
}

/// TOML文件结构
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckData {
    #[serde(default)]
    pub meta: DeckMeta,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// 运行时幻灯片集合，至少包含一张幻灯片
#[derive(Debug, Clone)]
pub struct Deck {
    pub meta: DeckMeta,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn from_data(data: DeckData, origin: &str) -> Result<Self, DeckError> {
        if data.slides.is_empty() {
            return Err(DeckError::Empty {
                origin: origin.to_string(),
            });
        }
        Ok(Self {
            meta: data.meta,
            slides: data.slides,
        })
    }

    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.slides.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

#[cfg(test)]
pub(crate) fn sample_deck(count: usize) -> Deck {
    let slides = (1..=count)
        .map(|n| Slide {
            title: format!("第 {n} 页"),
            body: format!("正文 {n}\n第二行\n第三行"),
        })
        .collect();
    Deck::from_data(
        DeckData {
            meta: DeckMeta {
                title: "测试".to_string(),
                ..DeckMeta::default()
            },
            slides,
        },
        "test",
    )
    .expect("sample deck is not empty")
}

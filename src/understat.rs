//! Acquires shot data from Understat player pages.
//!
//! Understat embeds each player's shots in an inline `<script>` as a hex-escaped JSON string
//! passed to `JSON.parse('...')`. Fetching, locating, unescaping and decoding that payload are
//! all fallible; every failure is surfaced as a [ScrapeError].

use std::string::FromUtf8Error;
use std::time::Duration;

use reqwest::StatusCode;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::shot::{InvalidShot, RawShotFields, ShotRecord};

pub const BASE_URL: &str = "https://understat.com/player/";
const USER_AGENT: &str = concat!("shotzone/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);
const SHOTS_MARKER: &str = "shotsData";

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    #[error("no {0} payload found in page")]
    MissingPayload(&'static str),

    #[error("bad escape sequence at offset {0}")]
    BadEscape(usize),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("shot {id}: {source}")]
    InvalidShot { id: String, source: InvalidShot },
}

/// A shot as it appears on the wire. Understat sends every field as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderstatShot {
    pub id: String,
    pub minute: String,
    pub result: String,
    #[serde(rename = "X")]
    pub x: String,
    #[serde(rename = "Y")]
    pub y: String,
    #[serde(rename = "xG")]
    pub xg: String,
    pub player: String,
    pub situation: String,
    pub season: String,
    #[serde(default)]
    pub h_a: Option<String>,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(rename = "shotType", default)]
    pub shot_type: Option<String>,
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub h_team: Option<String>,
    #[serde(default)]
    pub a_team: Option<String>,
    #[serde(default)]
    pub h_goals: Option<String>,
    #[serde(default)]
    pub a_goals: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub player_assisted: Option<String>,
    #[serde(rename = "lastAction", default)]
    pub last_action: Option<String>,
}
impl UnderstatShot {
    pub fn to_record(&self) -> Result<ShotRecord, ScrapeError> {
        ShotRecord::parse(RawShotFields {
            id: &self.id,
            player: &self.player,
            season: &self.season,
            minute: &self.minute,
            situation: &self.situation,
            date: self.date.as_deref(),
            x: &self.x,
            y: &self.y,
            xg: &self.xg,
            result: &self.result,
        })
        .map_err(|source| ScrapeError::InvalidShot {
            id: self.id.clone(),
            source,
        })
    }
}

pub fn to_records(shots: &[UnderstatShot]) -> Result<Vec<ShotRecord>, ScrapeError> {
    shots.iter().map(UnderstatShot::to_record).collect()
}

pub struct UnderstatClient {
    client: reqwest::Client,
    base_url: String,
}
impl UnderstatClient {
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn player_url(&self, player_id: &str) -> String {
        format!("{}{player_id}", self.base_url)
    }

    pub async fn player_shots(&self, player_id: &str) -> Result<Vec<UnderstatShot>, ScrapeError> {
        let url = self.player_url(player_id);
        info!("fetching {url}");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url, status });
        }
        let html = response.text().await?;
        let shots = parse_player_page(&html)?;
        debug!("parsed {} shots from {url}", shots.len());
        Ok(shots)
    }
}

/// Extracts the shots payload from the HTML of a player page.
pub fn parse_player_page(html: &str) -> Result<Vec<UnderstatShot>, ScrapeError> {
    let document = Html::parse_document(html);
    let script = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "script")
        .map(|element| element.text().collect::<String>())
        .find(|text| text.contains(SHOTS_MARKER))
        .ok_or(ScrapeError::MissingPayload(SHOTS_MARKER))?;

    let encoded = quoted_argument(&script).ok_or(ScrapeError::MissingPayload(SHOTS_MARKER))?;
    let json = decode_escapes(encoded)?;
    Ok(serde_json::from_str(&json)?)
}

fn quoted_argument(script: &str) -> Option<&str> {
    let start = script.find("('")? + 2;
    let len = script[start..].find("')")?;
    Some(&script[start..start + len])
}

/// Resolves JavaScript string escapes: `\xNN` bytes, `\uNNNN` code points and the single-character
/// escapes. Hex-escaped bytes are reassembled as UTF-8.
pub fn decode_escapes(encoded: &str) -> Result<String, ScrapeError> {
    let mut bytes = Vec::with_capacity(encoded.len());
    let mut chars = encoded.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            let mut buf = [0; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        let bad_escape = || ScrapeError::BadEscape(offset);
        match chars.next().map(|(_, c)| c) {
            Some('x') => {
                let value = read_hex(&mut chars, 2).ok_or_else(bad_escape)?;
                bytes.push(value as u8);
            }
            Some('u') => {
                let value = read_hex(&mut chars, 4).ok_or_else(bad_escape)?;
                let c = char::from_u32(value).ok_or_else(bad_escape)?;
                let mut buf = [0; 4];
                bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
            Some('n') => bytes.push(b'\n'),
            Some('r') => bytes.push(b'\r'),
            Some('t') => bytes.push(b'\t'),
            Some(c @ ('\\' | '\'' | '"' | '/')) => bytes.push(c as u8),
            _ => return Err(bad_escape()),
        }
    }
    Ok(String::from_utf8(bytes)?)
}

fn read_hex(chars: &mut impl Iterator<Item = (usize, char)>, digits: usize) -> Option<u32> {
    let mut value = 0;
    for _ in 0..digits {
        let (_, c) = chars.next()?;
        value = value * 16 + c.to_digit(16)?;
    }
    Some(value)
}

//! Random fact lookup backing `GET /api/random`.

use crate::error::FactError;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub static BUNDLED_FACTS_JSON: &str = include_str!("../data/facts.json");

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CACHE_CONTROL_NO_STORE: &str = "no-cache, no-store, must-revalidate";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: u32,
    pub fact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Response handed back to the static host for the random-fact endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl FactResponse {
    fn json(status: u16, body: String) -> Self {
        Self {
            status,
            headers: vec![
                ("Content-Type", CONTENT_TYPE_JSON),
                ("Cache-Control", CACHE_CONTROL_NO_STORE),
            ],
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

#[derive(Clone, Debug, Default)]
pub struct FactBook {
    facts: Vec<Fact>,
}

impl FactBook {
    pub fn new(facts: Vec<Fact>) -> Self {
        Self { facts }
    }

    pub fn from_json(json: &str) -> Result<Self, FactError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// The fact list compiled into the binary.
    pub fn bundled() -> Result<Self, FactError> {
        Self::from_json(BUNDLED_FACTS_JSON)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Uniformly random fact, `None` when the book is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Fact> {
        if self.facts.is_empty() {
            return None;
        }
        self.facts.get(rng.gen_range(0..self.facts.len()))
    }

    /// 200 with one random fact, or 503 with a JSON error body when there
    /// are no facts to serve.
    pub fn random_response<R: Rng + ?Sized>(&self, rng: &mut R) -> FactResponse {
        let picked = self.pick(rng).map(serde_json::to_string);
        match picked {
            Some(Ok(body)) => FactResponse::json(200, body),
            Some(Err(e)) => {
                log::error!("[facts] serialize error: {}", e);
                FactResponse::json(500, error_body("fact could not be encoded"))
            }
            None => {
                log::warn!("[facts] random fact requested from an empty list");
                FactResponse::json(503, error_body("no facts available"))
            }
        }
    }
}

fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

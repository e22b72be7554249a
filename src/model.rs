use std::path::Path;

use anyhow::Context as _;

use crate::error::{ToonstripError, ToonstripResult};

/// Speaker label the upstream model uses for narration boxes.
pub const NARRATOR_PERSON: &str = "Fortellerstemme";

/// A strip always carries exactly this many panels.
pub const PANEL_COUNT: usize = 4;

/// Field names follow the JSON the upstream generator emits, so cached
/// strip files load unchanged.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CartoonStrip {
    #[serde(rename = "Tittel")]
    pub title: String,
    #[serde(rename = "Bilder")]
    pub cells: Vec<CartoonStripCell>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CartoonStripCell {
    #[serde(rename = "Snakkebobler")]
    pub speech_bubbles: Vec<SpeechBubble>,
    /// Prompt text consumed by the upstream image generator, not by layout.
    #[serde(rename = "Bildebeskrivelse")]
    pub image_description: String,
    /// Populated by the upstream fetch step; required before composing.
    #[serde(rename = "Bildelenke", default)]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpeechBubble {
    #[serde(rename = "Person")]
    pub person: String,
    #[serde(rename = "Tekst")]
    pub text: String,
}

impl SpeechBubble {
    pub fn is_narrator(&self) -> bool {
        self.person == NARRATOR_PERSON
    }

    /// The text as rendered: narration is bare, dialogue is `"Person: text"`.
    pub fn full_text(&self) -> String {
        if self.is_narrator() {
            self.text.clone()
        } else {
            format!("{}: {}", self.person, self.text)
        }
    }

    pub fn person_prefix(&self) -> String {
        format!("{}: ", self.person)
    }

    /// Strips the speaker prefix off wrapped text so the body can be drawn
    /// separately from the bold prefix.
    pub fn remove_person_prefix<'a>(&self, full_text: &'a str) -> &'a str {
        full_text
            .strip_prefix(&self.person_prefix())
            .unwrap_or(full_text)
    }
}

impl CartoonStrip {
    /// Fails fast before any rendering: a composable strip has exactly
    /// [`PANEL_COUNT`] cells, each with a populated image URL.
    pub fn validate(&self) -> ToonstripResult<()> {
        if self.cells.len() != PANEL_COUNT {
            return Err(ToonstripError::malformed(format!(
                "expected exactly {PANEL_COUNT} cells, got {}",
                self.cells.len()
            )));
        }
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.image_url.is_none() {
                return Err(ToonstripError::malformed(format!(
                    "cell {i} has no image url"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> ToonstripResult<Self> {
        let strip: Self = serde_json::from_str(json).context("parse cartoon strip json")?;
        Ok(strip)
    }

    pub fn from_path(path: &Path) -> ToonstripResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read cartoon strip json from {}", path.display()))?;
        Self::from_json(&json)
    }
}

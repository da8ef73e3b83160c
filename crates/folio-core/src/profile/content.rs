//! Text shown behind each profile tab.

use serde::{Deserialize, Serialize};

use super::Tab;

/// Pre-authored text blocks for the profile card.
///
/// Every field can be overridden from the `[profile]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileContent {
    #[serde(default = "default_about")]
    pub about: String,
    #[serde(default = "default_about_more")]
    pub about_more: String,
    #[serde(default = "default_experiences")]
    pub experiences: String,
    #[serde(default = "default_recommended")]
    pub recommended: String,
}

impl Default for ProfileContent {
    fn default() -> Self {
        Self {
            about: default_about(),
            about_more: default_about_more(),
            experiences: default_experiences(),
            recommended: default_recommended(),
        }
    }
}

impl ProfileContent {
    /// Paragraphs for `tab`, in display order. Empty paragraphs are dropped.
    pub fn paragraphs(&self, tab: Tab) -> Vec<&str> {
        let blocks: Vec<&str> = match tab {
            Tab::About => vec![self.about.as_str(), self.about_more.as_str()],
            Tab::Experiences => vec![self.experiences.as_str()],
            Tab::Recommended => vec![self.recommended.as_str()],
        };
        blocks.into_iter().filter(|b| !b.trim().is_empty()).collect()
    }
}

fn default_about() -> String {
    "Hello! I'm Dave, your sales rep here from Salesforce. I've been working at this \
     awesome company for 3 years now."
        .to_string()
}

fn default_about_more() -> String {
    "I was born and raised in Albany, NY & have been living in Santa Carla for the past \
     10 years with my wife Tiffany and my 4-year-old twin daughters, Emma and Ella. Both \
     of them are just starting school, so my calendar is usually blocked between 9-10 AM."
        .to_string()
}

fn default_experiences() -> String {
    "• 2019–2021 — Account Executive at Company X\n\
     • 2017–2019 — Sales Associate at Company Y\n\
     \n\
     Worked on large enterprise deals, built customer pipelines, and contributed to team \
     training initiatives."
        .to_string()
}

fn default_recommended() -> String {
    "Recommendations from colleagues and clients will appear here.".to_string()
}

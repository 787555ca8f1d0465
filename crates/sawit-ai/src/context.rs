//! Page context: which portfolio page the visitor is chatting from.

use std::fmt;
use std::str::FromStr;

/// Closed set of page labels. Anything unrecognized is `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageContext {
    Profile,
    Skills,
    Projects,
    Contact,
    #[default]
    Home,
}

impl PageContext {
    pub const ALL: [PageContext; 5] = [
        PageContext::Profile,
        PageContext::Skills,
        PageContext::Projects,
        PageContext::Contact,
        PageContext::Home,
    ];

    /// Label shown to the visitor and interpolated into the preamble.
    pub fn label(self) -> &'static str {
        match self {
            PageContext::Profile => "Profile",
            PageContext::Skills => "Skills",
            PageContext::Projects => "Projects",
            PageContext::Contact => "Contact",
            PageContext::Home => "Home",
        }
    }

    /// Parse a label, falling back to `Home` for anything unknown.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Derive the context from a page path such as `/pages/skills.html`.
    ///
    /// Only the final path segment is considered; an empty segment is the
    /// site index.
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_lowercase();
        let file = lower.rsplit('/').next().unwrap_or_default();

        if file.contains("profil") {
            PageContext::Profile
        } else if file.contains("skill") {
            PageContext::Skills
        } else if file.contains("project") {
            PageContext::Projects
        } else if file.contains("kontak") || file.contains("contact") {
            PageContext::Contact
        } else {
            PageContext::Home
        }
    }

    /// Greeting rendered as the first line of a fresh conversation.
    pub fn greeting(self) -> &'static str {
        match self {
            PageContext::Profile => {
                "OMG BESTIE!! 💅✨ Lo lagi di halaman Profil! Mau kepo soal Fardan? LITERALLY tanya aja bestie, I got u!! 🔥"
            }
            PageContext::Skills => {
                "YOOO BESTIE!! 🚀 Lo lagi di halaman Skills nih! Mau tau skill Fardan yang sigma banget? TANYA AJA no cap! ✨"
            }
            PageContext::Projects => {
                "BESTIE AHHH!! 💀🔥 Lo ngecek Projects! Lowkey project-nya fire banget sih, mau tau lebih? ASK MEEE!! ✨"
            }
            PageContext::Contact => {
                "HIII BESTIE!! 💅 Lo lagi di Kontak! Mau reach out ke Fardan? That's so slay of u, tanya aja!! 🫶✨"
            }
            PageContext::Home => {
                "OMG HAI BESTIE!! ✨🔥 Gue Pria Sawit Ai, asisten AI-nya Fardan yang literally the most iconic! Mau nanya? GAS BESTIE!! 💅"
            }
        }
    }
}

impl fmt::Display for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for labels outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page label: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for PageContext {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profile" | "profil" => Ok(PageContext::Profile),
            "skills" | "skill" => Ok(PageContext::Skills),
            "projects" | "project" => Ok(PageContext::Projects),
            "contact" | "kontak" => Ok(PageContext::Contact),
            "home" | "index" => Ok(PageContext::Home),
            _ => Err(UnknownPage(s.to_string())),
        }
    }
}

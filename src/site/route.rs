use crate::animation::reveal::RevealPreset;
use crate::foundation::error::{PrismaError, PrismaResult};

/// The four pages of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// `/`
    Home,
    /// `/cases`
    Cases,
    /// `/services`
    Services,
    /// `/contact`
    Contact,
}

/// A group of elements revealed together on a page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSection {
    /// Section name, used to route scroll positions.
    pub name: &'static str,
    /// Animation parameters.
    pub preset: RevealPreset,
    /// Number of staggered elements.
    pub items: usize,
}

const fn section(name: &'static str, preset: RevealPreset, items: usize) -> RevealSection {
    RevealSection {
        name,
        preset,
        items,
    }
}

const HOME: &[RevealSection] = &[
    section("hero", RevealPreset::HERO_LINES, 3),
    section("subtitle", RevealPreset::HERO_SUBTITLE, 1),
    section("about", RevealPreset::SECTION, 3),
    section("prism", RevealPreset::VISUAL, 1),
    section("interface", RevealPreset::CARDS, 4),
    section("cta", RevealPreset::CTA, 1),
];

const CASES: &[RevealSection] = &[
    section("header", RevealPreset::HEADER, 3),
    section("cases", RevealPreset::LIST, 6),
];

const SERVICES: &[RevealSection] = &[
    section("header", RevealPreset::HEADER, 3),
    section("services", RevealPreset::LIST, 5),
];

const CONTACT: &[RevealSection] = &[
    section("header", RevealPreset::HEADER, 3),
    section("info", RevealPreset::LIST, 3),
];

impl Route {
    /// Every route in navigation order.
    pub const ALL: [Route; 4] = [Route::Home, Route::Cases, Route::Services, Route::Contact];

    /// Parse a path; a trailing slash is tolerated.
    pub fn parse(path: &str) -> PrismaResult<Self> {
        let trimmed = path.trim();
        let norm = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        Ok(match norm {
            "/" => Self::Home,
            "/cases" => Self::Cases,
            "/services" => Self::Services,
            "/contact" => Self::Contact,
            _ => {
                return Err(PrismaError::validation(format!("unknown route '{path}'")));
            }
        })
    }

    /// Canonical path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Cases => "/cases",
            Self::Services => "/services",
            Self::Contact => "/contact",
        }
    }

    /// Reveal groups mounted with the page.
    pub fn reveals(self) -> &'static [RevealSection] {
        match self {
            Self::Home => HOME,
            Self::Cases => CASES,
            Self::Services => SERVICES,
            Self::Contact => CONTACT,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl std::str::FromStr for Route {
    type Err = PrismaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

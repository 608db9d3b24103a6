use crate::error::{Error, Result};
use crate::impl_case_insensitive_deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Project templates offered by `create project` / `create module`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaffoldKind {
    SpaReact,
    SpaVue,
    SsrReact,
    SsrVue,
    Miniprogram,
}

impl_case_insensitive_deserialize!(
    ScaffoldKind,
    SpaReact => "spa-react" | "spa_react",
    SpaVue => "spa-vue" | "spa_vue",
    SsrReact => "ssr-react" | "ssr_react",
    SsrVue => "ssr-vue" | "ssr_vue",
    Miniprogram => "miniprogram" | "mini-program"
);

impl ScaffoldKind {
    /// Choices in the order they are offered to the user.
    pub const ALL: [ScaffoldKind; 5] = [
        ScaffoldKind::SpaReact,
        ScaffoldKind::SpaVue,
        ScaffoldKind::SsrReact,
        ScaffoldKind::SsrVue,
        ScaffoldKind::Miniprogram,
    ];

    /// Name shown in the picker.
    pub fn display_name(self) -> &'static str {
        match self {
            ScaffoldKind::SpaReact => "SPA-React",
            ScaffoldKind::SpaVue => "SPA-Vue",
            ScaffoldKind::SsrReact => "SSR-React",
            ScaffoldKind::SsrVue => "SSR-Vue",
            ScaffoldKind::Miniprogram => "Miniprogram",
        }
    }

    /// Token passed to the tool's `-t=` flag.
    pub fn type_code(self) -> &'static str {
        match self {
            ScaffoldKind::SpaReact => "spa-react",
            ScaffoldKind::SpaVue => "spa-vue",
            ScaffoldKind::SsrReact => "ssr-react",
            ScaffoldKind::SsrVue => "ssr-vue",
            ScaffoldKind::Miniprogram => "miniprogram",
        }
    }

    pub fn choices() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.display_name()).collect()
    }
}

impl fmt::Display for ScaffoldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Accepts either the picker name (`SPA-React`) or the type code
/// (`spa-react`), in any case.
impl FromStr for ScaffoldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_code() == wanted || kind.display_name().to_lowercase() == wanted)
            .or_else(|| (wanted == "mini-program").then_some(ScaffoldKind::Miniprogram))
            .ok_or_else(|| Error::UnknownScaffold(s.to_string()))
    }
}

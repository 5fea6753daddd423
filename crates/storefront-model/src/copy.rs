use serde::{Deserialize, Serialize};

/// Per-universe copy consumed when rendering navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseCopy {
    /// Name shown on the transition overlay, e.g. "MATHEORY GEEK".
    pub display_name: String,
    /// Category navigation labels. The first entry is the "show all" link;
    /// the others filter by the category with the same name.
    #[serde(default)]
    pub nav: Vec<String>,
}

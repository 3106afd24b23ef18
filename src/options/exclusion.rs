use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Framing Exclusion", inline)]
#[serde(default)]
/// Which objects are left out of framing.
pub struct ExclusionOptions {
    /// Comma-separated, case-insensitive name fragments.
    #[schemars(title = "Exclusion Pattern")]
    pub pattern: String,
    /// Collection whose objects only shape lighting.
    #[schemars(title = "Light Modifiers Collection")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_modifiers_collection: Option<String>,
}

impl Default for ExclusionOptions {
    fn default() -> Self {
        Self {
            pattern: "_LM,LightMod,Bounce,Flag,Scrim".into(),
            light_modifiers_collection: None,
        }
    }
}

use serde::{Deserialize, Serialize};

/// A doctor as listed in the clinic directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub degree: String,
    pub speciality: String,
    pub experience: String,
    #[serde(default)]
    pub about: String,
    pub fees: u32,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Doctor {
    /// Fee formatted with the given currency symbol, e.g. `$50`.
    pub fn fee_label(&self, currency_symbol: &str) -> String {
        format!("{}{}", currency_symbol, self.fees)
    }
}

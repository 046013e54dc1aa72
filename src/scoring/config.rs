use serde::{Deserialize, Serialize};

/// Coefficient table overrides as they appear in the config file.
///
/// Every field is optional; anything left out keeps the built-in model
/// value. Row lengths are checked by `validation::resolve_tables` before the
/// engine ever sees them.
///
/// Example YAML:
/// ```yaml
/// tables:
///   smoking: 3
///   female:
///     diabetes: 5
///     age: [-9, -4, 0, 3, 6, 7, 8, 8, 8]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TablesConfig {
    #[serde(default)]
    pub female: Option<SexTablesConfig>,

    #[serde(default)]
    pub male: Option<SexTablesConfig>,

    /// Sex-independent smoking offset (default: 2)
    #[serde(default)]
    pub smoking: Option<i32>,
}

/// Per-sex coefficient overrides. `age` and `estimate` need 9 entries,
/// the bucket rows 5.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SexTablesConfig {
    #[serde(default)]
    pub age: Option<Vec<i32>>,

    #[serde(default)]
    pub estimate: Option<Vec<i32>>,

    #[serde(default)]
    pub cholesterol: Option<Vec<i32>>,

    #[serde(default)]
    pub hdl: Option<Vec<i32>>,

    #[serde(default)]
    pub blood_pressure: Option<Vec<i32>>,

    /// Flat diabetes offset for this sex
    #[serde(default)]
    pub diabetes: Option<i32>,
}

use serde::{Deserialize, Serialize};

/// A single configuration option persisted by the host.
///
/// An option whose `value` is the empty string still exists; absence is modelled by
/// there being no record for the key at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigOption {
    pub id: String,
    pub key: String,
    pub value: String,
}

/// Payload for adding a new option.
#[derive(Debug, Clone)]
pub struct OptionCreate {
    pub key: String,
    pub value: String,
}

/// Payload for replacing the value of an existing option.
#[derive(Debug, Clone)]
pub struct OptionUpdate {
    pub value: String,
}

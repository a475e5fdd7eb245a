//! Wire types for SDUI documents and API envelopes.
//!
//! Field names follow the JSON documents (camelCase). Absent optional values
//! are omitted on output; `null` entries inside lists are kept in place so a
//! document survives a decode/encode cycle with its topology intact.

mod plugin;
mod response;

pub use plugin::{Benefit, BenefitGroup, Modifier, PluginContainer, PluginNode, Points, Style};
pub use response::{ApiResponse, ResponseStatus};

use serde::{Deserialize, Deserializer};

/// Reads a list that may be absent, `null`, or contain `null` entries.
pub(crate) fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default())
}

//! Classification of Wikidata entity values.
//!
//! An entity shows up in one of three shapes: a literal of an entity type
//! (`Z6001`, ...), a call to a fetch function (`Z6821`, ...), or a bare
//! entity reference (`Z6091`, ...). Each shape keeps its payload in the
//! field named `<type>K1`; [`convention_key`] is the one place that builds
//! that name.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::accessors::{composite, function_call_function_id, string_value, type_id};
use crate::constants::{
    Z6001, Z6002, Z6004, Z6005, Z6006, Z6091, Z6092, Z6094, Z6095, Z6096, Z6821, Z6822,
    Z6824, Z6825, Z6826, Z7,
};

/// The identifiers recognized as Wikidata entity shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WikidataConfig {
    /// Literal entity types.
    pub literal_types: Vec<String>,
    /// Entity reference types.
    pub reference_types: Vec<String>,
    /// Functions that fetch an entity.
    pub fetch_functions: Vec<String>,
}

impl Default for WikidataConfig {
    fn default() -> Self {
        let owned =
            |ids: &[&str]| -> Vec<String> { ids.iter().map(|id| id.to_string()).collect() };
        Self {
            literal_types: owned(&[Z6001, Z6002, Z6004, Z6005, Z6006]),
            reference_types: owned(&[Z6091, Z6092, Z6094, Z6095, Z6096]),
            fetch_functions: owned(&[Z6821, Z6822, Z6824, Z6825, Z6826]),
        }
    }
}

impl WikidataConfig {
    fn is_literal_type(&self, id: &str) -> bool {
        self.literal_types.iter().any(|t| t == id)
    }

    fn is_reference_type(&self, id: &str) -> bool {
        self.reference_types.iter().any(|t| t == id)
    }

    fn is_fetch_function(&self, id: &str) -> bool {
        self.fetch_functions.iter().any(|t| t == id)
    }
}

/// Name of the field holding the payload of a `type_id` value.
///
/// The key is not checked for existence; callers treat a missing field as an
/// absent payload.
pub fn convention_key(type_id: &str) -> String {
    format!("{type_id}K1")
}

fn convention_field<'a>(value: &'a Value, type_id: &str) -> Option<&'a Value> {
    composite(value)?.get(&convention_key(type_id))
}

pub fn is_wikidata_literal_with(config: &WikidataConfig, value: &Value) -> bool {
    type_id(value).is_some_and(|t| config.is_literal_type(t))
}

pub fn is_wikidata_fetch_with(config: &WikidataConfig, value: &Value) -> bool {
    type_id(value) == Some(Z7)
        && function_call_function_id(value, false).is_some_and(|f| config.is_fetch_function(f))
}

pub fn is_wikidata_reference_with(config: &WikidataConfig, value: &Value) -> bool {
    type_id(value).is_some_and(|t| config.is_reference_type(t))
}

pub fn is_wikidata_entity_with(config: &WikidataConfig, value: &Value) -> bool {
    is_wikidata_literal_with(config, value)
        || is_wikidata_fetch_with(config, value)
        || is_wikidata_reference_with(config, value)
}

/// The entity identifier (`Q42`, `L1`, `P31`, ...) carried by an entity value.
pub fn entity_id_with<'a>(config: &WikidataConfig, value: &'a Value) -> Option<&'a str> {
    if is_wikidata_reference_with(config, value) {
        let ref_type = type_id(value)?;
        return convention_field(value, ref_type).and_then(string_value);
    }
    let payload = if is_wikidata_literal_with(config, value) {
        convention_field(value, type_id(value)?)?
    } else if is_wikidata_fetch_with(config, value) {
        convention_field(value, function_call_function_id(value, false)?)?
    } else {
        return None;
    };
    // The payload is normally an entity reference; tolerate a bare id.
    entity_id_with(config, payload).or_else(|| string_value(payload))
}

pub fn is_wikidata_literal(value: &Value) -> bool {
    is_wikidata_literal_with(&WikidataConfig::default(), value)
}

pub fn is_wikidata_fetch(value: &Value) -> bool {
    is_wikidata_fetch_with(&WikidataConfig::default(), value)
}

pub fn is_wikidata_reference(value: &Value) -> bool {
    is_wikidata_reference_with(&WikidataConfig::default(), value)
}

pub fn is_wikidata_entity(value: &Value) -> bool {
    is_wikidata_entity_with(&WikidataConfig::default(), value)
}

pub fn entity_id(value: &Value) -> Option<&str> {
    entity_id_with(&WikidataConfig::default(), value)
}

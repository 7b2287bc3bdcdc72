//! ZObject data model engine.
//!
//! A ZObject is a JSON tree in one of two isomorphic encodings:
//!
//! - **canonical**, the minimal form used for storage and comparison, where
//!   strings and references may be bare JSON strings;
//! - **hybrid**, the editing form, where every terminal is wrapped in a
//!   `{Z1K1, Z6K1}` or `{Z1K1, Z9K1}` node.
//!
//! The crate converts between the two ([`canonical_to_hybrid`],
//! [`hybrid_to_canonical`]), reads terminal values from either
//! ([`accessors`]), validates function-call and generic-type subtrees
//! ([`validate`]), walks trees ([`walk_zobject`]), and edits them in place by
//! key path ([`mutate`]).
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use zobject::{
//!     canonical_to_hybrid, hybrid_to_canonical, monolingual_text, parse_key_path,
//!     set_value_by_key_path,
//! };
//!
//! let stored = json!({"Z1K1": "Z11", "Z11K1": "Z1002", "Z11K2": "hello"});
//! let mut doc = canonical_to_hybrid(&stored);
//! assert_eq!(monolingual_text(&doc), Some("hello"));
//!
//! set_value_by_key_path(&mut doc, &parse_key_path("Z11K2.Z6K1"), &json!("bye")).unwrap();
//! assert_eq!(
//!     hybrid_to_canonical(&doc),
//!     json!({"Z1K1": "Z11", "Z11K1": "Z1002", "Z11K2": "bye"})
//! );
//! ```

pub mod accessors;
pub mod constants;
pub mod error;
pub mod mutate;
pub mod normalize;
pub mod scaffold;
pub mod types;
pub mod validate;
pub mod walk;
pub mod wikidata;

pub use accessors::{
    argument_reference_key, boolean_value, code_programming_language, code_string, composite,
    function_call_argument_keys, function_call_function_id, key_is_identity, monolingual_lang,
    monolingual_stringset_lang, monolingual_stringset_values, monolingual_text,
    persistent_object_id, reference_value, string_value, type_id, type_to_string,
    typed_list_items, zobject_type,
};
pub use error::{KeyPathError, ZObjectError, ZObjectResult};
pub use mutate::{
    clear_type_by_key_path, delete_list_items_by_key_path, move_list_item_by_key_path,
    push_items_by_key_path, recalculate_keys_by_key_path, set_value_by_key_path,
    unset_value_by_key_path, value_by_key_path,
};
pub use normalize::{
    canonical_to_hybrid, hybrid_to_canonical, is_global_key, is_local_key, is_reference_id,
    reference_node, string_node, zid_of_global_key,
};
pub use scaffold::{
    blank_argument_reference, blank_function_call, blank_monolingual_text, blank_object,
    blank_persistent_object, blank_reference, blank_string, blank_typed_list, typed_list_type,
};
pub use types::{decode, ZObjectKind};
pub use validate::{all_valid, validate_function_call, validate_generic_type, ValidationRecord};
pub use walk::{collect_empty_references, walk_zobject};
pub use wikidata::{
    convention_key, entity_id, entity_id_with, is_wikidata_entity, is_wikidata_entity_with,
    is_wikidata_fetch, is_wikidata_fetch_with, is_wikidata_literal, is_wikidata_literal_with,
    is_wikidata_reference, is_wikidata_reference_with, WikidataConfig,
};
pub use zobject_key_path::{format_key_path, parse_key_path, resolve, resolve_mut, KeyPath};

//! Identifiers of the built-in types, keys and functions the engine knows.

/// Discriminator field present on every composite node.
pub const Z1K1: &str = "Z1K1";

/// Object (the top type).
pub const Z1: &str = "Z1";

/// Persistent object and its identity / value / label keys.
pub const Z2: &str = "Z2";
pub const Z2K1: &str = "Z2K1";
pub const Z2K2: &str = "Z2K2";
pub const Z2K3: &str = "Z2K3";

/// Is-identity flag of a key declaration.
pub const Z3K4: &str = "Z3K4";

/// String.
pub const Z6: &str = "Z6";
pub const Z6K1: &str = "Z6K1";

/// Function call and its function slot.
pub const Z7: &str = "Z7";
pub const Z7K1: &str = "Z7K1";

/// Reference.
pub const Z9: &str = "Z9";
pub const Z9K1: &str = "Z9K1";

/// Monolingual text: language, text.
pub const Z11: &str = "Z11";
pub const Z11K1: &str = "Z11K1";
pub const Z11K2: &str = "Z11K2";

/// Code: programming language, source.
pub const Z16K1: &str = "Z16K1";
pub const Z16K2: &str = "Z16K2";

/// Key id of an argument declaration.
pub const Z17K2: &str = "Z17K2";

/// Argument reference and the referenced key id.
pub const Z18: &str = "Z18";
pub const Z18K1: &str = "Z18K1";

/// Monolingual stringset: language, strings.
pub const Z31K1: &str = "Z31K1";
pub const Z31K2: &str = "Z31K2";

/// Boolean and its two values.
pub const Z40K1: &str = "Z40K1";
pub const Z41: &str = "Z41";
pub const Z42: &str = "Z42";

/// ISO code of a natural language literal.
pub const Z60K1: &str = "Z60K1";

/// Code of a programming language literal.
pub const Z61K1: &str = "Z61K1";

/// Typed list type function and its item-type argument.
pub const Z881: &str = "Z881";
pub const Z881K1: &str = "Z881K1";

/// Wikidata literal types.
pub const Z6001: &str = "Z6001";
pub const Z6002: &str = "Z6002";
pub const Z6004: &str = "Z6004";
pub const Z6005: &str = "Z6005";
pub const Z6006: &str = "Z6006";

/// Wikidata reference types.
pub const Z6091: &str = "Z6091";
pub const Z6092: &str = "Z6092";
pub const Z6094: &str = "Z6094";
pub const Z6095: &str = "Z6095";
pub const Z6096: &str = "Z6096";

/// Wikidata fetch functions.
pub const Z6821: &str = "Z6821";
pub const Z6822: &str = "Z6822";
pub const Z6824: &str = "Z6824";
pub const Z6825: &str = "Z6825";
pub const Z6826: &str = "Z6826";

/// Multilingual text and its list of monolingual texts.
pub const Z12: &str = "Z12";
pub const Z12K1: &str = "Z12K1";

use crate::models::Value;
use std::collections::BTreeMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// An ordered sequence of values. Element order is significant for equality:
/// two arrays are equal only if their elements match pairwise, in order.
pub type Array = Vec<Value>;

/// A keyed structure mapping string keys to values. Backed by a `BTreeMap`,
/// so equality depends only on the key/value pairs, never on insertion order.
pub type Object = BTreeMap<String, Value>;

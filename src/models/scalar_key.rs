use ordered_float::OrderedFloat;

/// Owned, hashable projection of a scalar [`Value`](crate::Value).
///
/// `OrderedFloat` gives numbers hash-set membership semantics: `NaN` hashes
/// and compares equal to itself, and `+0.0` / `-0.0` collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ScalarKey {
    Null,
    Bool(bool),
    Number(OrderedFloat<f64>),
    Str(String),
}

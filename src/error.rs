use thiserror::Error;

/// Failures the reconciliation engine treats as fatal. Coverage gaps
/// (a localization record with no catalog counterpart) are warned and
/// skipped instead, since neither catalog is a superset of the other.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("duplicate identity key {key:?}: {first} conflicts with {second}")]
    DuplicateId {
        key: String,
        first: String,
        second: String,
    },
    #[error("invalid composite id {id:?} for {name:?}")]
    MalformedId { id: String, name: String },
    #[error("variant name {token:?} of {base} has no localization entry")]
    UnresolvedVariant { base: String, token: String },
    #[error("variant payload for item {id} does not match its declared axis count")]
    PayloadShape { id: u32 },
    #[error("shared-variant representative {base} has no variant table")]
    MissingSharedVariants { base: String },
    #[error("recipe material {name:?} has no localization record")]
    UnresolvedMaterial { name: String },
}

use crate::error::ReconcileError;

/// How the base item id is recovered from an adjective record's composite id.
/// Item variant/pattern sheets use `Series_Serial_Ordinal` ids (base is the
/// first two parts); clothing variant sheets use `Item_Category_Ordinal` ids
/// (base is the first part alone).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseRule {
    FirstSegment,
    FirstTwoSegments,
}

/// Whether a malformed composite id aborts the run or skips the record.
/// The historical pattern-names sheet is the one lenient source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    Strict,
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeId {
    pub base: String,
    pub ordinal: String,
}

/// Splits an adjective-context composite id. Anything other than exactly
/// three underscore-separated parts is malformed.
pub fn decompose(id: &str, name: &str, rule: BaseRule) -> Result<CompositeId, ReconcileError> {
    let parts: Vec<&str> = id.split('_').collect();
    if parts.len() != 3 {
        return Err(ReconcileError::MalformedId {
            id: id.to_string(),
            name: name.to_string(),
        });
    }
    let base = match rule {
        BaseRule::FirstSegment => parts[0].to_string(),
        BaseRule::FirstTwoSegments => format!("{}_{}", parts[0], parts[1]),
    };
    Ok(CompositeId {
        base,
        ordinal: parts[2].to_string(),
    })
}

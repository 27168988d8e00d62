//! Element-wise transformation of a sequence.

/// Returns a new vector holding `transform` applied to every element, in order.
///
/// The output always has the same length as `sequence`.
pub fn map<'a, T, U, F>(sequence: &'a [T], mut transform: F) -> Vec<U>
where
    F: FnMut(&'a T) -> U,
{
    let mut out = Vec::with_capacity(sequence.len());
    for item in sequence {
        out.push(transform(item));
    }
    out
}

/// Fallible form of [`map`].
///
/// Returns the first `Err` produced by `transform`; elements mapped before it are dropped.
pub fn try_map<'a, T, U, E, F>(sequence: &'a [T], mut transform: F) -> Result<Vec<U>, E>
where
    F: FnMut(&'a T) -> Result<U, E>,
{
    let mut out = Vec::with_capacity(sequence.len());
    for item in sequence {
        out.push(transform(item)?);
    }
    Ok(out)
}

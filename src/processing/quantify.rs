//! Existential and universal checks (`some` / `every`).

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Stops at the first match. Always `false` for an empty sequence.
pub fn some<T, F>(sequence: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for item in sequence {
        if predicate(item) {
            return true;
        }
    }
    false
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Stops at the first element that fails. Vacuously `true` for an empty sequence.
pub fn every<T, F>(sequence: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for item in sequence {
        if !predicate(item) {
            return false;
        }
    }
    true
}

/// Fallible form of [`some`].
pub fn try_some<T, E, F>(sequence: &[T], mut predicate: F) -> Result<bool, E>
where
    F: FnMut(&T) -> Result<bool, E>,
{
    for item in sequence {
        if predicate(item)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Fallible form of [`every`].
pub fn try_every<T, E, F>(sequence: &[T], mut predicate: F) -> Result<bool, E>
where
    F: FnMut(&T) -> Result<bool, E>,
{
    for item in sequence {
        if !predicate(item)? {
            return Ok(false);
        }
    }
    Ok(true)
}

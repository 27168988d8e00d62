//! First-match lookup over a sequence.

/// Returns the first element for which `predicate` returns `true`.
///
/// Elements are visited in order and `predicate` is not called again after the first match.
/// Returns `None` for an empty sequence or when nothing matches.
pub fn find<T, F>(sequence: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    for item in sequence {
        if predicate(item) {
            return Some(item);
        }
    }
    None
}

/// Fallible form of [`find`].
///
/// The first `Err` returned by `predicate` stops the scan and is returned unchanged.
pub fn try_find<T, E, F>(sequence: &[T], mut predicate: F) -> Result<Option<&T>, E>
where
    F: FnMut(&T) -> Result<bool, E>,
{
    for item in sequence {
        if predicate(item)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::{find, try_find};

    #[test]
    fn find_returns_leftmost_match() {
        let xs = [1, 4, 6, 8];
        assert_eq!(find(&xs, |x| x % 2 == 0), Some(&4));
    }

    #[test]
    fn find_returns_none_when_nothing_matches() {
        assert_eq!(find(&[1, 2, 3], |x| *x > 5), None);
        assert_eq!(find::<i32, _>(&[], |_| true), None);
    }

    #[test]
    fn find_distinguishes_falsy_element_from_absent() {
        let xs = [0, 1];
        assert_eq!(find(&xs, |x| *x == 0), Some(&0));

        let flags = [false];
        assert_eq!(find(&flags, |b| !*b), Some(&false));
    }

    #[test]
    fn find_stops_calling_predicate_after_first_match() {
        let xs = [1, 2, 3, 4, 5];
        let mut calls = 0;
        let found = find(&xs, |x| {
            calls += 1;
            *x == 2
        });
        assert_eq!(found, Some(&2));
        assert_eq!(calls, 2);
    }

    #[test]
    fn try_find_propagates_first_error() {
        let xs = ["1", "x", "3"];
        let mut seen = Vec::new();
        let err = try_find(&xs, |s| {
            seen.push(*s);
            s.parse::<i32>().map(|n| n > 2)
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid digit found in string");
        assert_eq!(seen, vec!["1", "x"]);
    }

    #[test]
    fn try_find_ok_paths() {
        let xs = [1, 2, 3];
        assert_eq!(try_find::<_, (), _>(&xs, |x| Ok(*x == 3)), Ok(Some(&3)));
        assert_eq!(try_find::<_, (), _>(&xs, |_| Ok(false)), Ok(None));
    }
}

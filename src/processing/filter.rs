//! Predicate-based selection over a sequence.

/// Returns a new vector with only the elements for which `predicate` returns `true`.
///
/// Kept elements are cloned and stay in their original relative order.
pub fn filter<T, F>(sequence: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut out = Vec::new();
    for item in sequence {
        if predicate(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Fallible form of [`filter`].
pub fn try_filter<T, E, F>(sequence: &[T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<bool, E>,
{
    let mut out = Vec::new();
    for item in sequence {
        if predicate(item)? {
            out.push(item.clone());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{filter, try_filter};

    #[test]
    fn filter_keeps_even_numbers() {
        assert_eq!(filter(&[1, 2, 3, 4], |x| x % 2 == 0), vec![2, 4]);
    }

    #[test]
    fn filter_preserves_relative_order() {
        let words = ["pear", "fig", "apple", "kiwi", "banana"];
        let out = filter(&words, |w| w.len() > 3);
        assert_eq!(out, vec!["pear", "apple", "kiwi", "banana"]);
    }

    #[test]
    fn filter_can_return_empty_or_everything() {
        let xs = [1, 2, 3];
        assert!(filter(&xs, |_| false).is_empty());
        assert_eq!(filter(&xs, |_| true), xs.to_vec());
    }

    #[test]
    fn try_filter_propagates_callback_error() {
        #[derive(Debug, PartialEq)]
        struct Rejected(i32);

        let xs = [1, 2, -1, 4];
        let err = try_filter(&xs, |x| if *x < 0 { Err(Rejected(*x)) } else { Ok(*x > 1) })
            .unwrap_err();
        assert_eq!(err, Rejected(-1));

        let ok = try_filter::<_, Rejected, _>(&[1, 2, 3], |x| Ok(*x != 2)).unwrap();
        assert_eq!(ok, vec![1, 3]);
    }
}

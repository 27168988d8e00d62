//! Left folds over a sequence.

/// Folds `sequence` left to right, starting from `initial`.
///
/// Each step computes `reducer(accumulator, element)`. An empty sequence returns `initial`
/// unchanged. Elements are lent for the lifetime of `sequence`, so the accumulator may hold
/// references into it.
pub fn reduce<'a, T, A, F>(sequence: &'a [T], initial: A, mut reducer: F) -> A
where
    F: FnMut(A, &'a T) -> A,
{
    let mut acc = initial;
    for item in sequence {
        acc = reducer(acc, item);
    }
    acc
}

/// [`reduce`] without an explicit initial value.
///
/// The fold starts from `A::default()`: `0` for numbers, an empty `String` or collection for
/// those types. Use [`reduce`] when the zero value of the accumulator is not its `Default`.
pub fn reduce_default<'a, T, A, F>(sequence: &'a [T], reducer: F) -> A
where
    A: Default,
    F: FnMut(A, &'a T) -> A,
{
    reduce(sequence, A::default(), reducer)
}

/// Fallible form of [`reduce`].
///
/// The first `Err` from `reducer` is returned and the partial accumulator is dropped.
pub fn try_reduce<'a, T, A, E, F>(sequence: &'a [T], initial: A, mut reducer: F) -> Result<A, E>
where
    F: FnMut(A, &'a T) -> Result<A, E>,
{
    let mut acc = initial;
    for item in sequence {
        acc = reducer(acc, item)?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::{reduce, reduce_default, try_reduce};

    #[test]
    fn reduce_sums_left_to_right() {
        assert_eq!(reduce(&[1, 2, 3, 4], 0, |acc, x| acc + x), 10);
    }

    #[test]
    fn reduce_of_empty_returns_initial() {
        assert_eq!(reduce::<i32, _, _>(&[], 42, |acc, x| acc + x), 42);
        assert_eq!(
            reduce::<i32, _, _>(&[], "seed".to_string(), |_, _| unreachable!()),
            "seed"
        );
    }

    #[test]
    fn reduce_visits_elements_in_order() {
        let out = reduce(&["a", "b", "c"], String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(out, "abc");
    }

    #[test]
    fn reduce_default_starts_from_zero_value() {
        let total = reduce_default(&[1.5, 2.5], |acc: f64, x| acc + x);
        assert_eq!(total, 4.0);

        let joined = reduce_default(&['x', 'y'], |mut acc: String, c| {
            acc.push(*c);
            acc
        });
        assert_eq!(joined, "xy");

        let collected = reduce_default(&["aa", "b"], |mut acc: Vec<usize>, s| {
            acc.push(s.len());
            acc
        });
        assert_eq!(collected, vec![2, 1]);
    }

    #[test]
    fn try_reduce_stops_on_overflow() {
        let xs = [u8::MAX, 1, 2];
        let mut steps = 0;
        let result = try_reduce(&xs, 0u8, |acc, x| {
            steps += 1;
            acc.checked_add(*x).ok_or("overflow")
        });
        assert_eq!(result, Err("overflow"));
        assert_eq!(steps, 2);

        assert_eq!(try_reduce::<_, _, &str, _>(&[1u8, 2], 0u8, |acc, x| Ok(acc + x)), Ok(3));
    }
}

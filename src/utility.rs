use std::cmp::Ordering;

/// Divides `numerator` by `denominator` and rounds to the nearest integer,
/// sending exact halves to the even neighbour. Returns `None` when
/// `denominator` is zero.
pub fn round_half_even(numerator: u64, denominator: u64) -> Option<u64> {
    if denominator == 0 {
        return None;
    }

    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    let rounded = match (remainder * 2).cmp(&denominator) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    };
    Some(rounded)
}

/// Position of the largest present value. Absent values are skipped and ties
/// go to the earliest position.
pub fn argmax<I, T>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<T>>,
    T: Ord,
{
    extremum(values, Ordering::Greater)
}

/// Position of the smallest present value. Absent values are skipped and ties
/// go to the earliest position.
pub fn argmin<I, T>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<T>>,
    T: Ord,
{
    extremum(values, Ordering::Less)
}

fn extremum<I, T>(values: I, wanted: Ordering) -> Option<usize>
where
    I: IntoIterator<Item = Option<T>>,
    T: Ord,
{
    let mut best: Option<(usize, T)> = None;

    for (index, value) in values.into_iter().enumerate() {
        let Some(value) = value else {
            continue;
        };
        // strict comparison keeps the first occurrence on ties
        let replace = match &best {
            Some((_, current)) => value.cmp(current) == wanted,
            None => true,
        };
        if replace {
            best = Some((index, value));
        }
    }

    best.map(|(index, _)| index)
}

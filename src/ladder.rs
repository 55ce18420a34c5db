/// Produces an output for each candidate in order and returns the first one
/// `accept` approves, together with its candidate. Later candidates are never
/// produced. `Ok(None)` means every candidate was rejected.
pub fn first_passing<C, T, E, P, A>(
    candidates: impl IntoIterator<Item = C>,
    mut produce: P,
    mut accept: A,
) -> Result<Option<(C, T)>, E>
where
    P: FnMut(&C) -> Result<T, E>,
    A: FnMut(&T) -> bool,
{
    for candidate in candidates {
        let output = produce(&candidate)?;
        if accept(&output) {
            return Ok(Some((candidate, output)));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_first_accepted_candidate_and_stops() {
        let mut tried = Vec::new();
        let result: Result<_, ()> = first_passing(
            [80u8, 60, 40, 20],
            |q| {
                tried.push(*q);
                Ok(u32::from(*q) * 10)
            },
            |size| *size <= 400,
        );

        assert_eq!(result, Ok(Some((40, 400))));
        assert_eq!(tried, [80, 60, 40]);
    }

    #[test]
    fn none_when_nothing_passes() {
        let result: Result<Option<(u8, u8)>, ()> = first_passing([3u8, 2, 1], |q| Ok(*q), |_| false);
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn propagates_producer_error() {
        let mut tried = 0;
        let result: Result<Option<(u8, u8)>, &str> = first_passing(
            [1u8, 2, 3],
            |q| {
                tried += 1;
                if *q == 2 { Err("boom") } else { Ok(*q) }
            },
            |_| false,
        );

        assert_eq!(result, Err("boom"));
        assert_eq!(tried, 2);
    }
}

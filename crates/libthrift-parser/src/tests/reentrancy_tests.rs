//! Independent parses share no state and may run on many threads at once.

use crate::tests::utils::ECHO_SERVICE_SOURCE;
use rayon::prelude::IntoParallelIterator;
use rayon::prelude::ParallelIterator;

#[test]
fn parallel_parses_match_sequential_parse() {
    let expected = crate::parse(ECHO_SERVICE_SOURCE).unwrap();
    let results: Vec<_> = (0..64)
        .into_par_iter()
        .map(|_| crate::parse(ECHO_SERVICE_SOURCE))
        .collect();

    for result in results {
        assert_eq!(result.as_ref(), Ok(&expected));
    }
}

/// Failing parses on some threads do not disturb succeeding ones.
#[test]
fn interleaved_failures_stay_isolated() {
    let results: Vec<_> = (0..64)
        .into_par_iter()
        .map(|index| {
            let source = if index % 2 == 0 { ECHO_SERVICE_SOURCE } else { "struct { }" };
            (index, crate::parse(source))
        })
        .collect();

    for (index, result) in results {
        if index % 2 == 0 {
            assert_eq!(result.unwrap().len(), 4);
        } else {
            let error = result.unwrap_err();
            assert_eq!(error.line(), 1);
            assert!(error.context().starts_with("{ }"));
        }
    }
}

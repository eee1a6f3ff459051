use proptest::prelude::*;

use unisolve_solvers::{
    Config, Error, Event, Solution, bisection, convergence::is_converged, fisher, newton, secant,
};

fn same_outcome(
    first: &Result<Solution, Error>,
    second: &Result<Solution, Error>,
) -> Result<(), TestCaseError> {
    match (first, second) {
        (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
        (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
        _ => prop_assert!(false, "outcomes differ: {first:?} vs {second:?}"),
    }
    Ok(())
}

/// Checks that success or failure agrees with the changes the observer saw.
fn outcome_matches_changes(
    result: Result<Solution, Error>,
    changes: &[f64],
    tolerance: f64,
    max_iters: usize,
) -> Result<(), TestCaseError> {
    match result {
        Ok(solution) => {
            prop_assert!(solution.iters < max_iters);
            prop_assert_eq!(changes.len(), solution.iters + 1);
            prop_assert!(solution.relative_change < tolerance);
            prop_assert!(
                changes[..solution.iters]
                    .iter()
                    .all(|change| !is_converged(*change, tolerance))
            );
        }
        Err(Error::NotConverged { iters, .. }) => {
            prop_assert_eq!(iters, max_iters);
            prop_assert_eq!(changes.len(), max_iters);
            prop_assert!(changes.iter().all(|change| !is_converged(*change, tolerance)));
        }
        Err(other) => prop_assert!(false, "unexpected error: {other}"),
    }
    Ok(())
}

proptest! {
    #[test]
    fn repeated_solves_are_identical(
        c in 0.5f64..100.0,
        x0 in 1.0f64..20.0,
        max_iters in 1usize..50,
    ) {
        let config = Config::new(1e-12, max_iters).unwrap();
        let gp = |x: f64| x * x - c;
        let gpp = |x: f64| 2.0 * x;
        let score = |x: f64| c - x * x;

        same_outcome(
            &newton::solve_unobserved(&gp, &gpp, x0, &config),
            &newton::solve_unobserved(&gp, &gpp, x0, &config),
        )?;
        same_outcome(
            &secant::solve_unobserved(&gp, [x0, x0 + 1.0], &config),
            &secant::solve_unobserved(&gp, [x0, x0 + 1.0], &config),
        )?;
        same_outcome(
            &bisection::solve_unobserved(&gp, [0.0, x0 + c], &config),
            &bisection::solve_unobserved(&gp, [0.0, x0 + c], &config),
        )?;
        same_outcome(
            &fisher::solve_unobserved(&score, &gpp, 1, x0, &config),
            &fisher::solve_unobserved(&score, &gpp, 1, x0, &config),
        )?;
    }

    #[test]
    fn bisection_bracket_always_contains_root(
        root in 0.5f64..50.0,
        negative in any::<bool>(),
        below in 0.1f64..100.0,
        above in 0.1f64..100.0,
        reversed in any::<bool>(),
    ) {
        let root = if negative { -root } else { root };
        let gp = |x: f64| x - root;
        let endpoints = if reversed {
            [root + above, root - below]
        } else {
            [root - below, root + above]
        };

        let mut brackets = Vec::new();
        let observer = |event: &Event| {
            brackets.push(event.bracket.unwrap());
            None
        };

        let config = Config::new(1e-10, 200).unwrap();
        let solution = bisection::solve(&gp, endpoints, &config, observer).unwrap();

        for [a, b] in &brackets {
            prop_assert!(a.min(*b) <= root && root <= a.max(*b));
        }
        for pair in brackets.windows(2) {
            let width = |[a, b]: [f64; 2]| (b - a).abs();
            prop_assert!(width(pair[1]) < width(pair[0]));
        }
        prop_assert!((solution.estimate - root).abs() <= 1e-8 * root.abs());
    }

    #[test]
    fn outcome_matches_observed_changes(
        c in 0.5f64..100.0,
        x0 in 1.0f64..20.0,
        max_iters in 1usize..8,
    ) {
        let tolerance = 1e-12;
        let config = Config::new(tolerance, max_iters).unwrap();
        let gp = |x: f64| x * x - c;
        let gpp = |x: f64| 2.0 * x;
        let score = |x: f64| c - x * x;

        let mut changes = Vec::new();
        let result = newton::solve(&gp, &gpp, x0, &config, |event: &Event| {
            changes.push(event.relative_change);
            None
        });
        outcome_matches_changes(result, &changes, tolerance, max_iters)?;

        let mut changes = Vec::new();
        let result = secant::solve(&gp, [x0, x0 + 1.0], &config, |event: &Event| {
            changes.push(event.relative_change);
            None
        });
        outcome_matches_changes(result, &changes, tolerance, max_iters)?;

        let mut changes = Vec::new();
        let result = bisection::solve(&gp, [0.0, x0 + c], &config, |event: &Event| {
            changes.push(event.relative_change);
            None
        });
        outcome_matches_changes(result, &changes, tolerance, max_iters)?;

        let mut changes = Vec::new();
        let result = fisher::solve(&score, &gpp, 1, x0, &config, |event: &Event| {
            changes.push(event.relative_change);
            None
        });
        outcome_matches_changes(result, &changes, tolerance, max_iters)?;
    }
}

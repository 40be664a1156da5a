use dpll_sat::{
    config::SearchStrategy,
    context::Counters,
    procedures::{
        search::{satisfying_assignment, search, SearchResult},
        simplify::{simplify, Simplification},
    },
    structures::{assignment::Assignment, formula::Formula},
};

fn with_counters(
    formula: &Formula<&'static str>,
    strategy: SearchStrategy,
) -> (SearchResult<&'static str>, Counters) {
    let mut counters = Counters::default();
    let result = search(formula, strategy, Assignment::default(), &mut counters);
    (result, counters)
}

mod search_properties {
    use super::*;

    #[test]
    fn vacuous_truth() {
        let formula: Formula<&str> = Formula::default();
        let assignment = satisfying_assignment(&formula).assignment().expect("satisfiable");
        assert!(assignment.is_empty());
    }

    #[test]
    fn some_disjunct_holds() {
        let formula = Formula::from(vec![vec![("a", true), ("b", false), ("c", true)]]);

        for strategy in [SearchStrategy::Iterative, SearchStrategy::Recursive] {
            let (result, _) = with_counters(&formula, strategy);
            let assignment = result.assignment().expect("satisfiable");

            assert!(
                assignment.value_of(&"a") == Some(true)
                    || assignment.value_of(&"b") == Some(false)
                    || assignment.value_of(&"c") == Some(true)
            );
        }
    }

    #[test]
    fn single_disjunction() {
        let formula = Formula::from(vec![vec![("p", true), ("q", true)]]);

        let assignment = satisfying_assignment(&formula).assignment().expect("satisfiable");
        assert_eq!(assignment.as_string(), "p");
        assert_eq!(assignment.value_of(&"q"), None);
    }

    #[test]
    fn chained_units() {
        let formula = Formula::from(vec![
            vec![("a", true)],
            vec![("a", false), ("b", true)],
            vec![("b", false), ("c", true)],
            vec![("c", false), ("d", true)],
        ]);

        for strategy in [SearchStrategy::Iterative, SearchStrategy::Recursive] {
            let (result, counters) = with_counters(&formula, strategy);

            let assignment = result.assignment().expect("satisfiable");
            assert_eq!(assignment.as_string(), "a b c d");
            assert_eq!(counters.total_propagations, 4);
            assert_eq!(counters.total_decisions, 0);
            assert_eq!(counters.max_depth, 4);
        }
    }

    #[test]
    fn chained_units_to_contradiction() {
        let formula = Formula::from(vec![
            vec![("a", true)],
            vec![("a", false), ("b", true)],
            vec![("b", false), ("c", true)],
            vec![("c", false)],
        ]);

        for strategy in [SearchStrategy::Iterative, SearchStrategy::Recursive] {
            let (result, counters) = with_counters(&formula, strategy);

            assert_eq!(result, SearchResult::NotFound);
            assert_eq!(counters.total_conflicts, 1);
            assert_eq!(counters.total_backtracks, 0);
        }
    }

    #[test]
    fn every_assignment_fails() {
        let formula = Formula::from(vec![
            vec![("p", true), ("q", true)],
            vec![("p", false), ("q", false)],
            vec![("p", true), ("q", false)],
            vec![("p", false), ("q", true)],
        ]);

        for strategy in [SearchStrategy::Iterative, SearchStrategy::Recursive] {
            let (result, counters) = with_counters(&formula, strategy);

            assert_eq!(result, SearchResult::NotFound);
            assert_eq!(counters.total_decisions, 1);
            assert_eq!(counters.total_backtracks, 1);
        }
    }

    #[test]
    fn assignment_extended() {
        let formula = Formula::from(vec![vec![("q", false)]]);

        let mut assignment = Assignment::default();
        assignment.bind(dpll_sat::structures::literal::Literal::new("p", true));

        let mut counters = Counters::default();
        let result = search(&formula, SearchStrategy::Iterative, assignment, &mut counters);

        assert_eq!(result.assignment().expect("satisfiable").as_string(), "p -q");
    }
}

mod simplify_then_search {
    use super::*;

    #[test]
    fn reduced_formula_searched() {
        let formula = Formula::from(vec![
            vec![("p", true), ("q", false)],
            vec![("q", true), ("r", true)],
            vec![("p", false), ("r", false)],
        ]);

        let Simplification::Reduced(reduced) = simplify(&formula, &"p", true) else {
            panic!("expected a reduced formula");
        };
        assert_eq!(reduced.as_string(), "(q r) (-r)");

        let assignment = satisfying_assignment(&reduced).assignment().expect("satisfiable");
        assert_eq!(assignment.as_string(), "-r q");
    }

    #[test]
    fn contradiction_searched() {
        let formula = Formula::from(vec![vec![("p", true)], vec![("p", false), ("q", true)]]);

        assert_eq!(simplify(&formula, &"p", false), Simplification::Contradiction);
        assert!(matches!(satisfying_assignment(&formula), SearchResult::Found(_)));
    }
}

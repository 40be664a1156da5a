use dpll_sat::{
    builder::ClauseOk,
    config::{Config, SearchStrategy},
    context::{Context, ContextState},
    reports::Report,
    structures::{formula::Formula, literal::Literal},
    types::err::{self, ErrorKind},
};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause(vec![Literal::new("p", true)]), ClauseOk::Added);

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.value_of(&"p"), Some(true));
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let p = |polarity| Literal::new("p", polarity);
        let q = |polarity| Literal::new("q", polarity);

        assert_eq!(ctx.add_clause(vec![p(true), q(true)]), ClauseOk::Added);
        assert_eq!(ctx.add_clause(vec![p(false), q(false)]), ClauseOk::Added);
        assert_eq!(ctx.add_clause(vec![p(true), q(false)]), ClauseOk::Added);
        assert_eq!(ctx.add_clause(vec![p(false), q(true)]), ClauseOk::Added);

        assert!(ctx.solve().is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable));
        assert!(ctx.assignment().is_none());
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.add_clause(vec![Literal::new("p", true), Literal::new("q", true)]),
            ClauseOk::Added
        );
        assert_eq!(ctx.add_clause(vec![Literal::new("p", false)]), ClauseOk::Added);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(&"p"), Some(false));
        assert_eq!(ctx.value_of(&"q"), Some(true));
    }

    #[test]
    fn empty_formula() {
        let mut ctx: Context<&str> = Context::from_config(Config::default());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.assignment().is_some_and(|assignment| assignment.is_empty()));
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.add_clause(vec![Literal::new("p", true)]), ClauseOk::Added);
        assert_eq!(ctx.add_clause(vec![]), ClauseOk::Empty);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }
}

mod context {
    use super::*;

    #[test]
    fn report_before_solve() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.report(), Report::Unknown);

        ctx.add_clause(vec![Literal::new(1, true)]);
        assert_eq!(ctx.state, ContextState::Input);
        assert_eq!(ctx.report(), Report::Unknown);
    }

    #[test]
    fn configuration_after_solve() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_clause(vec![Literal::new(1, true)]);

        assert_eq!(ctx.set_strategy(SearchStrategy::Recursive), Ok(()));
        assert!(ctx.solve().is_ok());

        assert_eq!(
            ctx.set_preprocessing(true),
            Err(ErrorKind::Config(err::ConfigError::InvalidState))
        );
        assert!(!ctx.config.preprocessing.value);
    }

    #[test]
    fn clause_after_solve() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_clause(vec![Literal::new("p", true)]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(&"p"), Some(true));

        ctx.add_clause(vec![Literal::new("p", false)]);
        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.value_of(&"p"), None);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn formula_kept() {
        let formula = Formula::from(vec![
            vec![("p", true), ("q", false), ("p", true)],
            vec![("q", true), ("q", false)],
        ]);

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.add_formula(formula.clone()), ClauseOk::Added);

        assert_eq!(ctx.formula(), &formula);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.formula(), &formula);
    }

    #[test]
    fn counters_reset() {
        let formula = Formula::from(vec![
            vec![("a", true), ("b", true)],
            vec![("a", false), ("c", true)],
            vec![("a", false), ("c", false)],
        ]);

        let mut ctx = Context::from_config(Config::default());
        ctx.add_formula(formula);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        let first = ctx.counters.clone();
        assert_eq!(first.total_backtracks, 1);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.counters.total_backtracks, first.total_backtracks);
        assert_eq!(ctx.counters.total_decisions, first.total_decisions);
    }

    #[test]
    fn preprocessing_binds_pure() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.set_preprocessing(true).is_ok());

        ctx.add_formula(Formula::from(vec![
            vec![("p", true), ("q", true)],
            vec![("p", true), ("q", false)],
            vec![("r", true), ("s", false)],
            vec![("r", false), ("s", true)],
        ]));

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(&"p"), Some(true));
        assert_eq!(ctx.value_of(&"q"), None);
        assert!(ctx.assignment().is_some_and(|assignment| assignment.satisfies(ctx.formula())));
    }
}

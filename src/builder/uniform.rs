/*!
Uniform random k-CNF formulas.

A uniform random formula with *n* atoms, *m* clauses, and clause length *k* is made of *m* clauses, each of which is built by choosing *k* distinct atoms from the atoms `1..=n` uniformly at random and giving each a polarity by a fair coin.

With *k* = 3 formulas with a ratio of clauses to atoms near 4.26 are, roughly, as likely to be satisfiable as unsatisfiable, and are comparatively hard to search.

```rust
# use dpll_sat::builder::uniform::uniform_formula;
# use dpll_sat::generic::minimal_pcg::MinimalPCG32;
# use dpll_sat::structures::clause::Clause;
# use rand::SeedableRng;
let mut rng = MinimalPCG32::seed_from_u64(20);
let formula = uniform_formula(&mut rng, 20, 91, 3).unwrap();

assert_eq!(formula.len(), 91);
assert!(formula.clauses().iter().all(|clause| clause.size() == 3));
```
*/

use rand::{seq::index, Rng};

use crate::{
    structures::{clause::CClause, formula::Formula, literal::Literal},
    types::err::{self},
};

/// A uniform random formula over atoms `1..=atoms`, with `clauses` clauses each of `length` distinct atoms.
pub fn uniform_formula(
    rng: &mut impl Rng,
    atoms: u32,
    clauses: usize,
    length: usize,
) -> Result<Formula<u32>, err::GeneratorError> {
    if length == 0 {
        return Err(err::GeneratorError::EmptyClause);
    }

    if length > atoms as usize {
        return Err(err::GeneratorError::ClauseTooLong);
    }

    let mut formula = Formula::default();

    for _ in 0..clauses {
        let clause: CClause<u32> = index::sample(rng, atoms as usize, length)
            .into_iter()
            .map(|index| (index as u32) + 1)
            .collect::<Vec<_>>()
            .into_iter()
            .map(|atom| Literal::new(atom, rng.gen_bool(0.5)))
            .collect();

        formula.push(clause);
    }

    log::debug!("Generated {clauses} clauses of length {length} over {atoms} atoms");

    Ok(formula)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::{generic::minimal_pcg::MinimalPCG32, structures::clause::Clause};

    #[test]
    fn invalid_requests() {
        let mut rng = MinimalPCG32::seed_from_u64(1);

        assert_eq!(
            uniform_formula(&mut rng, 4, 10, 0),
            Err(err::GeneratorError::EmptyClause)
        );
        assert_eq!(
            uniform_formula(&mut rng, 2, 10, 3),
            Err(err::GeneratorError::ClauseTooLong)
        );
    }

    #[test]
    fn distinct_atoms_in_range() {
        let mut rng = MinimalPCG32::seed_from_u64(5);
        let formula = uniform_formula(&mut rng, 5, 200, 5).unwrap();

        for clause in formula.clauses() {
            let mut atoms: Vec<u32> = clause.literals().map(|literal| *literal.atom()).collect();
            atoms.sort_unstable();
            assert_eq!(atoms, vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn both_polarities() {
        let mut rng = MinimalPCG32::seed_from_u64(9);
        let formula = uniform_formula(&mut rng, 10, 40, 3).unwrap();

        let polarities: Vec<bool> = formula
            .clauses()
            .iter()
            .flat_map(|clause| clause.literals().map(|literal| literal.polarity()))
            .collect();

        assert!(polarities.iter().any(|p| *p));
        assert!(polarities.iter().any(|p| !*p));
    }

    #[test]
    fn seeded() {
        let a = uniform_formula(&mut MinimalPCG32::seed_from_u64(3), 30, 120, 3);
        let b = uniform_formula(&mut MinimalPCG32::seed_from_u64(3), 30, 120, 3);
        assert_eq!(a, b);
    }
}

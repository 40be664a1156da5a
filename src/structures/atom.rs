/*!
Atoms, aka. 'variables'.

An atom is anything to which assigning a (boolean) value is of interest.
Atoms are opaque tokens: the only operations required of an atom are comparison for equality, hashing, cloning, and display.

So, a string, an integer, or some structured identifier may each be used as an atom:

```rust
# use dpll_sat::structures::atom::Atom;
fn requires_atom(_atom: impl Atom) {}

requires_atom("p");
requires_atom(String::from("atom_one"));
requires_atom(96_u32);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// Something which may be used as an atom.
///
/// Implemented for any type with the relevant traits.
pub trait Atom: Clone + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display {}

impl<T> Atom for T where T: Clone + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display {}

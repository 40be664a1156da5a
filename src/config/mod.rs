/*!
Configuration of a context.

All configuration for a context is contained within a [Config] structure, made of [ConfigOption]s.
Each option has bounds on its value and a latest [state](crate::context::ContextState) of a context in which the option may be changed.

```rust
# use dpll_sat::config::{Config, SearchStrategy};
# use dpll_sat::context::Context;
let mut the_context: Context<&str> = Context::from_config(Config::default());

assert!(the_context.set_strategy(SearchStrategy::Recursive).is_ok());
assert!(the_context.set_preprocessing(true).is_ok());
```
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::context::ContextState;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which search strategy to use.
    pub search: ConfigOption<SearchStrategy>,

    /// Bind pure literals before search.
    pub preprocessing: ConfigOption<bool>,
}

impl Default for Config {
    /// The default context searches with an explicit stack, and without preprocessing.
    fn default() -> Self {
        Config {
            search: ConfigOption {
                name: "search",
                min: SearchStrategy::MIN,
                max: SearchStrategy::MAX,
                max_state: ContextState::Input,
                value: SearchStrategy::Iterative,
            },

            preprocessing: ConfigOption {
                name: "preprocessing",
                min: false,
                max: true,
                max_state: ContextState::Input,
                value: false,
            },
        }
    }
}

/// How a search walks the tree of choices.
///
/// Each strategy makes the same choices in the same order, and so returns the same result on each formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum SearchStrategy {
    #[default]
    /// Keep an explicit stack of frames, without a bound on depth beyond memory
    Iterative,

    /// Recurse on the native call stack, one call per bound atom
    Recursive,
}

impl SearchStrategy {
    pub const MIN: SearchStrategy = SearchStrategy::Iterative;
    pub const MAX: SearchStrategy = SearchStrategy::Recursive;
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Iterative => write!(f, "iterative"),
            Self::Recursive => write!(f, "recursive"),
        }
    }
}

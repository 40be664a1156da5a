use crate::{context::ContextState, types::err::{self}};

/// A configuration option, with bounds on the value of the option and the latest state of a context in which the option may be set.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub max_state: ContextState,
    pub value: T,
}

impl<T: Clone + PartialOrd + std::fmt::Debug> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within bounds and `state` is no later than the max state of the option.
    pub fn set(&mut self, value: T, state: &ContextState) -> Result<(), err::ConfigError> {
        if *state > self.max_state {
            return Err(err::ConfigError::InvalidState);
        }

        if value < self.min || self.max < value {
            return Err(err::ConfigError::OutOfBounds);
        }

        log::trace!("Option {} set to {value:?}", self.name);
        self.value = value;
        Ok(())
    }
}

use crate::navigation::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

pub const DEFAULT_UNPOP_DEPTH: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(depth) => depth,
    None => NonZeroUsize::MIN,
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Configuration {
    #[serde(default)]
    pub unpop: Option<UnpopConfiguration>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnpopConfiguration {
    pub max_depth: NonZeroUsize,
}

impl Default for UnpopConfiguration {
    fn default() -> Self {
        UnpopConfiguration {
            max_depth: DEFAULT_UNPOP_DEPTH,
        }
    }
}

impl UnpopConfiguration {
    pub fn new(max_depth: usize) -> Result<Self, ConfigurationError> {
        let max_depth = NonZeroUsize::new(max_depth).ok_or(ConfigurationError::ZeroUnpopDepth)?;
        Ok(UnpopConfiguration { max_depth })
    }
}

impl Configuration {
    pub fn with_unpop(max_depth: usize) -> Result<Self, ConfigurationError> {
        Ok(Configuration {
            unpop: Some(UnpopConfiguration::new(max_depth)?),
        })
    }

    pub fn is_unpop_enabled(&self) -> bool {
        self.unpop.is_some()
    }
}

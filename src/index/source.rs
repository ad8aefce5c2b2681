//! Instance index lookup.

use std::num::ParseIntError;

use thiserror::Error;

use crate::config::env::EnvSource;

/// Variables consulted for the instance index, in order.
pub const INDEX_VARS: [&str; 2] = ["CF_INSTANCE_INDEX", "INSTANCE_INDEX"];

/// Error type for index lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("no instance index in environment (tried CF_INSTANCE_INDEX, INSTANCE_INDEX)")]
    Missing,

    #[error("{var}={value:?} is not a valid index: {source}")]
    Invalid {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Something that knows which instance of the app this process is.
pub trait IndexSource {
    fn fetch_index(&self) -> Result<u32, IndexError>;
}

/// Reads the index published by the platform.
#[derive(Debug, Clone)]
pub struct EnvIndexSource<E> {
    env: E,
}

impl<E: EnvSource> EnvIndexSource<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: EnvSource> IndexSource for EnvIndexSource<E> {
    fn fetch_index(&self) -> Result<u32, IndexError> {
        for var in INDEX_VARS {
            let Some(value) = self.env.var(var) else {
                continue;
            };
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            return trimmed.parse::<u32>().map_err(|source| IndexError::Invalid {
                var,
                value: value.clone(),
                source,
            });
        }
        Err(IndexError::Missing)
    }
}

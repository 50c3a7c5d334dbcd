//! Build use cases.
//!
//! The read side of the build cache. Character mutations invalidate entries;
//! this module is what repopulates them.

use std::sync::Arc;

mod get_build;

pub use get_build::GetCharacterBuild;

/// Container for build use cases.
pub struct BuildUseCases {
    pub get: Arc<GetCharacterBuild>,
}

impl BuildUseCases {
    pub fn new(get: Arc<GetCharacterBuild>) -> Self {
        Self { get }
    }
}

//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{
    BuildCachePort, CharacterRepo, ClockPort, PieceRepo, PlayerRepo,
};
use crate::use_cases::{self, build, character};

/// Main application state.
///
/// Holds the store ports and the use cases built on top of them. A transport
/// layer takes an `Arc<App>` and calls into `use_cases`.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all store ports.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
    pub piece: Arc<dyn PieceRepo>,
    pub player: Arc<dyn PlayerRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub character: use_cases::CharacterUseCases,
    pub build: use_cases::BuildUseCases,
}

impl App {
    pub fn new(
        repositories: Repositories,
        build_cache: Arc<dyn BuildCachePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let character_use_cases = use_cases::CharacterUseCases::new(
            Arc::new(character::ListCharacters::new(
                repositories.character.clone(),
                repositories.player.clone(),
            )),
            Arc::new(character::GetCharacterDetail::new(
                repositories.character.clone(),
            )),
            Arc::new(character::UnlockCharacter::new(
                repositories.character.clone(),
                repositories.player.clone(),
            )),
            Arc::new(character::UpdateCharacter::new(
                repositories.character.clone(),
                build_cache.clone(),
            )),
            Arc::new(character::AssignPieces::new(
                repositories.character.clone(),
                repositories.piece.clone(),
                build_cache.clone(),
            )),
        );

        let build_use_cases = use_cases::BuildUseCases::new(Arc::new(build::GetCharacterBuild::new(
            repositories.character.clone(),
            build_cache,
            clock,
        )));

        Self {
            repositories,
            use_cases: UseCases {
                character: character_use_cases,
                build: build_use_cases,
            },
        }
    }
}

//! Pokémon detail service - the detail screen's entry point into core.

use crate::domain::PokemonInfo;
use crate::ports::{PokemonPortResult, PokemonRepository};
use std::sync::Arc;

/// Service backing the Pokémon detail view.
///
/// Forwards each request to the injected repository and hands back whatever
/// it produced. The service holds no state of its own, so it can be shared
/// freely between concurrent callers and is simply dropped with its owner.
#[derive(Clone)]
pub struct PokemonDetailService {
    repository: Arc<dyn PokemonRepository>,
}

impl PokemonDetailService {
    /// Create a new detail service over the given repository.
    pub fn new(repository: Arc<dyn PokemonRepository>) -> Self {
        Self { repository }
    }

    /// Fetch information for the Pokémon called `name`.
    ///
    /// The name is passed through as given and the repository's result,
    /// success or failure, is returned unmodified. Dropping the returned
    /// future cancels the repository call.
    pub async fn get_pokemon_info(&self, name: &str) -> PokemonPortResult<PokemonInfo> {
        tracing::debug!(name, "fetching pokemon info");
        self.repository.get_pokemon_info(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PokemonPage;
    use crate::ports::PokemonPortError;
    use crate::services::testing::{MockRepo, pikachu};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_returns_repository_record_unchanged() {
        let mut repo = MockRepo::new();
        repo.expect_get_pokemon_info()
            .withf(|name| name == "pikachu")
            .times(1)
            .returning(|_| Ok(pikachu()));
        repo.expect_get_pokemon_list().never();

        let service = PokemonDetailService::new(Arc::new(repo));
        let info = service.get_pokemon_info("pikachu").await.unwrap();

        assert_eq!(info, pikachu());
    }

    #[tokio::test]
    async fn test_propagates_not_found_unchanged() {
        let mut repo = MockRepo::new();
        repo.expect_get_pokemon_info()
            .withf(|name| name == "missingno")
            .times(1)
            .returning(|name| {
                Err(PokemonPortError::NotFound {
                    name: name.to_string(),
                })
            });

        let service = PokemonDetailService::new(Arc::new(repo));
        let err = service.get_pokemon_info("missingno").await.unwrap_err();

        assert_eq!(
            err,
            PokemonPortError::NotFound {
                name: "missingno".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_propagates_other_failures_unchanged() {
        let failures = [
            PokemonPortError::RateLimited,
            PokemonPortError::Network {
                message: "connection reset".to_string(),
            },
            PokemonPortError::InvalidResponse {
                message: "missing field `id`".to_string(),
            },
        ];

        for failure in failures {
            let mut repo = MockRepo::new();
            let returned = failure.clone();
            repo.expect_get_pokemon_info()
                .times(1)
                .returning(move |_| Err(returned.clone()));

            let service = PokemonDetailService::new(Arc::new(repo));
            assert_eq!(service.get_pokemon_info("eevee").await, Err(failure));
        }
    }

    #[tokio::test]
    async fn test_passes_names_through_unmodified() {
        let names = ["", "  Pikachu  ", "MR. MIME", "nidoran♀", "flabébé", "type: null", "../etc"];

        for name in names {
            let mut repo = MockRepo::new();
            let expected = name.to_string();
            repo.expect_get_pokemon_info()
                .withf(move |n| n == expected)
                .times(1)
                .returning(|_| Ok(pikachu()));

            let service = PokemonDetailService::new(Arc::new(repo));
            assert!(service.get_pokemon_info(name).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_repeated_calls_are_not_deduplicated() {
        let mut repo = MockRepo::new();
        repo.expect_get_pokemon_info()
            .withf(|name| name == "pikachu")
            .times(2)
            .returning(|_| Ok(pikachu()));

        let service = PokemonDetailService::new(Arc::new(repo));
        service.get_pokemon_info("pikachu").await.unwrap();
        service.get_pokemon_info("pikachu").await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let mut repo = MockRepo::new();
        repo.expect_get_pokemon_info()
            .withf(|name| name == "pikachu")
            .times(1)
            .returning(|_| Ok(pikachu()));
        repo.expect_get_pokemon_info()
            .withf(|name| name == "missingno")
            .times(1)
            .returning(|name| {
                Err(PokemonPortError::NotFound {
                    name: name.to_string(),
                })
            });

        let service = PokemonDetailService::new(Arc::new(repo));
        let (found, missing) = tokio::join!(
            service.get_pokemon_info("pikachu"),
            service.get_pokemon_info("missingno")
        );

        assert_eq!(found, Ok(pikachu()));
        assert!(matches!(missing, Err(PokemonPortError::NotFound { .. })));
    }

    /// Repository whose lookups never finish, recording when one is dropped.
    struct PendingRepo {
        dropped: Arc<AtomicBool>,
    }

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl PokemonRepository for PendingRepo {
        async fn get_pokemon_info(&self, _name: &str) -> PokemonPortResult<PokemonInfo> {
            let _flag = DropFlag(Arc::clone(&self.dropped));
            std::future::pending().await
        }

        async fn get_pokemon_list(
            &self,
            _limit: u32,
            _offset: u32,
        ) -> PokemonPortResult<PokemonPage> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_dropping_the_call_cancels_the_repository() {
        let dropped = Arc::new(AtomicBool::new(false));
        let service = PokemonDetailService::new(Arc::new(PendingRepo {
            dropped: Arc::clone(&dropped),
        }));

        let result =
            tokio::time::timeout(Duration::from_millis(20), service.get_pokemon_info("ditto")).await;

        assert!(result.is_err());
        assert!(dropped.load(Ordering::SeqCst));
    }
}

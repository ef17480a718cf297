//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use track_common::auth::JwtService;
use track_core::traits::{
    CompletionRepository, ProblemRepository, StatsRepository, SubtopicRepository, TopicRepository,
    UserRepository,
};
use track_core::SnowflakeGenerator;
use track_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (kept for readiness probes)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    topic_repo: Arc<dyn TopicRepository>,
    subtopic_repo: Arc<dyn SubtopicRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
    problem_repo: Arc<dyn ProblemRepository>,
    stats_repo: Arc<dyn StatsRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        subtopic_repo: Arc<dyn SubtopicRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
        problem_repo: Arc<dyn ProblemRepository>,
        stats_repo: Arc<dyn StatsRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            topic_repo,
            subtopic_repo,
            completion_repo,
            problem_repo,
            stats_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the topic repository
    pub fn topic_repo(&self) -> &dyn TopicRepository {
        self.topic_repo.as_ref()
    }

    /// Get the subtopic repository
    pub fn subtopic_repo(&self) -> &dyn SubtopicRepository {
        self.subtopic_repo.as_ref()
    }

    /// Get the completion repository
    pub fn completion_repo(&self) -> &dyn CompletionRepository {
        self.completion_repo.as_ref()
    }

    /// Get the problem repository
    pub fn problem_repo(&self) -> &dyn ProblemRepository {
        self.problem_repo.as_ref()
    }

    /// Get the statistics repository
    pub fn stats_repo(&self) -> &dyn StatsRepository {
        self.stats_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> track_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    topic_repo: Option<Arc<dyn TopicRepository>>,
    subtopic_repo: Option<Arc<dyn SubtopicRepository>>,
    completion_repo: Option<Arc<dyn CompletionRepository>>,
    problem_repo: Option<Arc<dyn ProblemRepository>>,
    stats_repo: Option<Arc<dyn StatsRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            topic_repo: None,
            subtopic_repo: None,
            completion_repo: None,
            problem_repo: None,
            stats_repo: None,
            jwt_service: None,
            snowflake_generator: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn topic_repo(mut self, repo: Arc<dyn TopicRepository>) -> Self {
        self.topic_repo = Some(repo);
        self
    }

    pub fn subtopic_repo(mut self, repo: Arc<dyn SubtopicRepository>) -> Self {
        self.subtopic_repo = Some(repo);
        self
    }

    pub fn completion_repo(mut self, repo: Arc<dyn CompletionRepository>) -> Self {
        self.completion_repo = Some(repo);
        self
    }

    pub fn problem_repo(mut self, repo: Arc<dyn ProblemRepository>) -> Self {
        self.problem_repo = Some(repo);
        self
    }

    pub fn stats_repo(mut self, repo: Arc<dyn StatsRepository>) -> Self {
        self.stats_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.topic_repo
                .ok_or_else(|| ServiceError::validation("topic_repo is required"))?,
            self.subtopic_repo
                .ok_or_else(|| ServiceError::validation("subtopic_repo is required"))?,
            self.completion_repo
                .ok_or_else(|| ServiceError::validation("completion_repo is required"))?,
            self.problem_repo
                .ok_or_else(|| ServiceError::validation("problem_repo is required"))?,
            self.stats_repo
                .ok_or_else(|| ServiceError::validation("stats_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

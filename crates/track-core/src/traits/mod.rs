//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CompletionRepository, DailyCompletions, DashboardCounts, ProblemRepository, RepoResult,
    StatsRepository, SubtopicFilter, SubtopicRepository, TopicCompletions, TopicRepository,
    UserCompletionSpread, UserQuery, UserRepository,
};

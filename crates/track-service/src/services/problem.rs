//! Legacy problem catalog service
//!
//! Problems hang off a fixed (topic, subtopic) label taxonomy rather
//! than the Topic/Subtopic tables, and are served grouped for display.

use chrono::Utc;
use track_core::entities::{Problem, ProblemDifficulty};
use track_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateProblemRequest, ProblemGroupResponse, ProblemResponse, ProblemSubtopicGroupResponse,
    UpdateProblemRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Legacy problem catalog service
pub struct ProblemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProblemService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All active problems grouped topic -> subtopic, preserving position order
    #[instrument(skip(self))]
    pub async fn grouped_problems(&self) -> ServiceResult<Vec<ProblemGroupResponse>> {
        let problems = self.ctx.problem_repo().find_active_ordered().await?;
        Ok(group_by_labels(&problems))
    }

    /// Active problems for one topic label, grouped by subtopic
    #[instrument(skip(self))]
    pub async fn problems_by_topic(&self, topic: &str) -> ServiceResult<ProblemGroupResponse> {
        let problems = self.ctx.problem_repo().find_by_topic(topic).await?;

        let mut groups = group_by_labels(&problems);
        match groups.pop() {
            Some(group) if groups.is_empty() => Ok(group),
            _ => Ok(ProblemGroupResponse {
                topic: topic.to_string(),
                subtopics: Vec::new(),
            }),
        }
    }

    /// Get a problem by ID
    #[instrument(skip(self))]
    pub async fn get_problem(&self, id: Snowflake) -> ServiceResult<ProblemResponse> {
        let problem = self
            .ctx
            .problem_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Problem", id.to_string()))?;

        Ok(ProblemResponse::from(&problem))
    }

    /// Create a problem under a valid (topic, subtopic) label pair
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_problem(
        &self,
        request: CreateProblemRequest,
    ) -> ServiceResult<ProblemResponse> {
        if !Problem::labels_valid(&request.topic, &request.subtopic) {
            return Err(ServiceError::Domain(DomainError::UnknownTaxonomyLabel {
                topic: request.topic,
                subtopic: request.subtopic,
            }));
        }

        let difficulty = parse_problem_difficulty(request.difficulty.as_deref())?;

        let problem = Problem {
            id: self.ctx.generate_id(),
            title: request.title,
            description: request.description,
            topic: request.topic,
            subtopic: request.subtopic,
            difficulty,
            youtube_link: request.youtube_link,
            leetcode_link: request.leetcode_link,
            article_link: request.article_link,
            position: request.position.unwrap_or(0),
            is_active: true,
            created_at: Utc::now(),
        };

        self.ctx.problem_repo().create(&problem).await?;

        info!(problem_id = %problem.id, topic = %problem.topic, "Problem created");
        Ok(ProblemResponse::from(&problem))
    }

    /// Update a problem; the (topic, subtopic) labels are immutable
    #[instrument(skip(self, request), fields(problem_id = %id))]
    pub async fn update_problem(
        &self,
        id: Snowflake,
        request: UpdateProblemRequest,
    ) -> ServiceResult<ProblemResponse> {
        let mut problem = self
            .ctx
            .problem_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Problem", id.to_string()))?;

        if let Some(title) = request.title {
            problem.title = title;
        }
        if let Some(description) = request.description {
            problem.description = description;
        }
        if let Some(difficulty) = request.difficulty.as_deref() {
            problem.difficulty = parse_problem_difficulty(Some(difficulty))?;
        }
        if let Some(link) = request.youtube_link {
            problem.youtube_link = Some(link);
        }
        if let Some(link) = request.leetcode_link {
            problem.leetcode_link = Some(link);
        }
        if let Some(link) = request.article_link {
            problem.article_link = Some(link);
        }
        if let Some(position) = request.position {
            problem.position = position;
        }
        if let Some(is_active) = request.is_active {
            problem.is_active = is_active;
        }

        self.ctx.problem_repo().update(&problem).await?;

        info!(problem_id = %id, "Problem updated");
        Ok(ProblemResponse::from(&problem))
    }

    /// Delete a problem
    #[instrument(skip(self))]
    pub async fn delete_problem(&self, id: Snowflake) -> ServiceResult<()> {
        if self.ctx.problem_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Problem", id.to_string()));
        }

        self.ctx.problem_repo().delete(id).await?;

        info!(problem_id = %id, "Problem deleted");
        Ok(())
    }
}

fn parse_problem_difficulty(raw: Option<&str>) -> ServiceResult<ProblemDifficulty> {
    match raw {
        None => Ok(ProblemDifficulty::Medium),
        Some(s) => ProblemDifficulty::parse(s)
            .ok_or_else(|| ServiceError::validation("Difficulty must be Easy, Medium, or Hard")),
    }
}

/// Group an already (topic, subtopic, position)-ordered problem list into
/// the nested display shape, keeping first-seen order of labels.
fn group_by_labels(problems: &[Problem]) -> Vec<ProblemGroupResponse> {
    let mut groups: Vec<ProblemGroupResponse> = Vec::new();

    for problem in problems {
        if groups.last().map(|g| g.topic.as_str()) != Some(problem.topic.as_str()) {
            groups.push(ProblemGroupResponse {
                topic: problem.topic.clone(),
                subtopics: Vec::new(),
            });
        }
        let topic_group = groups.last_mut().unwrap();

        if topic_group.subtopics.last().map(|s| s.name.as_str())
            != Some(problem.subtopic.as_str())
        {
            topic_group.subtopics.push(ProblemSubtopicGroupResponse {
                name: problem.subtopic.clone(),
                problems: Vec::new(),
            });
        }
        topic_group
            .subtopics
            .last_mut()
            .unwrap()
            .problems
            .push(ProblemResponse::from(problem));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(topic: &str, subtopic: &str, title: &str) -> Problem {
        Problem {
            id: Snowflake::from(1_i64),
            title: title.to_string(),
            description: String::new(),
            topic: topic.to_string(),
            subtopic: subtopic.to_string(),
            difficulty: ProblemDifficulty::Medium,
            youtube_link: None,
            leetcode_link: None,
            article_link: None,
            position: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_by_labels_nests_in_order() {
        let problems = vec![
            problem("Arrays", "Two Pointers", "a"),
            problem("Arrays", "Two Pointers", "b"),
            problem("Arrays", "Sliding Window", "c"),
            problem("Graphs", "Topological Sort", "d"),
        ];

        let groups = group_by_labels(&problems);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].topic, "Arrays");
        assert_eq!(groups[0].subtopics.len(), 2);
        assert_eq!(groups[0].subtopics[0].problems.len(), 2);
        assert_eq!(groups[1].subtopics[0].name, "Topological Sort");
    }

    #[test]
    fn test_parse_problem_difficulty_case_sensitive() {
        assert!(parse_problem_difficulty(Some("Hard")).is_ok());
        assert!(parse_problem_difficulty(Some("hard")).is_err());
    }
}

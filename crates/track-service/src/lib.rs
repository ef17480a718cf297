//! # track-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, ProblemService, ProgressService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, StatsService, SubtopicService, TopicService, UserService,
};

//! Skillrank Core Library
//!
//! Core domain logic for the skillrank course recommender: the relevance
//! heuristic, the pheromone-reinforced sampler, and the stores around them.

pub mod candidate;
pub mod colony;
pub mod config;
pub mod corpus;
pub mod error;
pub mod feedback;
pub mod format;
pub mod heuristic;
pub mod logging;
pub mod query;
pub mod ranking;
pub mod store;
pub mod tags;

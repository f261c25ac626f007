//! Main CLI commands enum

use clap::Subcommand;

use crate::cli::args::{CoursesArgs, FeedbackArgs, InitArgs, RecommendArgs};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new skillrank store
    Init(InitArgs),

    /// Recommend courses for a set of skills
    Recommend(RecommendArgs),

    /// Record feedback on a recommended course
    Feedback(FeedbackArgs),

    /// Show recommendation accuracy and its history
    Accuracy,

    /// List courses in the corpus
    Courses(CoursesArgs),
}

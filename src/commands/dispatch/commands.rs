//! Command implementations for all skillrank commands

use crate::cli::args::{CoursesArgs, FeedbackArgs, InitArgs, RecommendArgs};
use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::macros::trace_command;
use skillrank_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init(args) => execute_init(ctx, args),
            Commands::Recommend(args) => execute_recommend(ctx, args),
            Commands::Feedback(args) => execute_feedback(ctx, args),
            Commands::Accuracy => execute_accuracy(ctx),
            Commands::Courses(args) => execute_courses(ctx, args),
        }
    }
}

fn execute_init(ctx: &CommandContext, args: &InitArgs) -> Result<()> {
    commands::init::execute(ctx.cli, &ctx.store_path(), args.corpus.as_deref())?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_recommend(ctx: &CommandContext, args: &RecommendArgs) -> Result<()> {
    let store = ctx.open_store()?;
    trace_command!(ctx.cli, ctx.start, "open_store");
    commands::recommend::execute(ctx.cli, &store, args)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_feedback(ctx: &CommandContext, args: &FeedbackArgs) -> Result<()> {
    let store = ctx.open_store()?;
    trace_command!(ctx.cli, ctx.start, "open_store");
    commands::feedback::execute(ctx.cli, &store, args.course_id, &args.value)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_accuracy(ctx: &CommandContext) -> Result<()> {
    let store = ctx.open_store()?;
    trace_command!(ctx.cli, ctx.start, "open_store");
    commands::accuracy::execute(ctx.cli, &store)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_courses(ctx: &CommandContext, args: &CoursesArgs) -> Result<()> {
    let store = ctx.open_store()?;
    trace_command!(ctx.cli, ctx.start, "open_store");
    commands::courses::execute(ctx.cli, &store, args.corpus.as_deref(), args.tag.as_deref())?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

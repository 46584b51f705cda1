//! Command implementations for all notespark commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{distance, index, matching, pick};
use notespark_core::error::Result;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Index => index::execute(ctx),
            Commands::Pick {
                attempts,
                min_distance,
                seed,
                from_index,
            } => pick::execute(
                ctx,
                pick::PickArgs {
                    attempts: attempts.map(|n| n as usize),
                    min_distance: *min_distance,
                    seed: *seed,
                    from_index: *from_index,
                },
            ),
            Commands::Distance { note_a, note_b } => distance::execute(ctx, note_a, note_b),
            Commands::Match { trends, limit } => {
                matching::execute(ctx, trends, limit.map(|n| n as usize))
            }
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}

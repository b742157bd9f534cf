//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type and input,
//! dispatched statically from `main`. Adding a command means implementing
//! [`CommandStrategy`] in a new module here.

mod convert;
mod summary;
mod version;

pub use convert::ConvertStrategy;
pub use summary::{SummaryInput, SummaryStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Execution is synchronous: every command is a single blocking pass over
/// its input with no suspension points.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

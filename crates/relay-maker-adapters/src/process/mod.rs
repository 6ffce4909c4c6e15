//! Process runner adapters.

mod recording;
mod system;

pub use recording::{Invocation, RecordingCommandRunner};
pub use system::SystemCommandRunner;

// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod accept_handler;
mod progressive_formatter;

pub use accept_handler::{
    AcceptEvent, AcceptHandler, FieldError, LoggingAcceptHandler, NoOpAcceptHandler,
};
pub use progressive_formatter::{ProgressiveFormatter, ProgressiveOutput};

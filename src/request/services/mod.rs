//! Application services for request lifecycle orchestration.

mod booking;
mod workflow;

pub use booking::{BookingError, BookingResult, BookingService, CreateRequestCommand};
pub use workflow::{
    AssignEmployeesCommand, CancelRequestCommand, ConfirmCompletionCommand, ForceCompleteCommand,
    MarkCompletedCommand, RejectCompletionCommand, StartWorkCommand, WorkflowError,
    WorkflowResult, WorkflowService,
};

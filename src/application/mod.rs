//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers edit a session under its lock; query handlers read a
//! settled snapshot of it.

pub mod handlers;

pub use handlers::design::{
    CreateDesignCommand, CreateDesignHandler, DeleteDesignCommand, DeleteDesignHandler,
    DesignChange, DesignError, DesignSnapshot, Direction, GetDesignHandler, GetDesignQuery,
    NavigateDesignCommand, NavigateDesignHandler, UpdateDesignCommand, UpdateDesignHandler,
};
pub use handlers::export::{
    EmailDesignCommand, EmailDesignHandler, ExportDesignHandler, ExportDesignQuery,
    ExportPipeline, RelayMailCommand, RelayMailHandler,
};

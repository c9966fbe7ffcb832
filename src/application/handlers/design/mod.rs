//! Design session handlers.
//!
//! Commands and queries over live wizard sessions held in a `DesignStore`.

mod create_design;
mod delete_design;
mod errors;
mod get_design;
mod navigate_design;
mod snapshot;
mod update_design;

pub use create_design::{CreateDesignCommand, CreateDesignHandler, CreateDesignResult};
pub use delete_design::{DeleteDesignCommand, DeleteDesignHandler};
pub use errors::DesignError;
pub use get_design::{GetDesignHandler, GetDesignQuery};
pub use navigate_design::{
    Direction, NavigateDesignCommand, NavigateDesignHandler, NavigateDesignResult,
};
pub use snapshot::DesignSnapshot;
pub use update_design::{DesignChange, UpdateDesignCommand, UpdateDesignHandler};

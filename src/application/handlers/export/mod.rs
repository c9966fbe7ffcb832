//! Export and delivery handlers.

mod email_design;
mod export_design;
mod pipeline;
mod relay_mail;

pub use email_design::{EmailDesignCommand, EmailDesignHandler};
pub use export_design::{ExportDesignHandler, ExportDesignQuery};
pub use pipeline::ExportPipeline;
pub use relay_mail::{RelayMailCommand, RelayMailHandler};

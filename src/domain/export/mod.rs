//! Export geometry and naming rules.

mod filename;
mod page;
mod pagination;

pub use filename::{download_basename, download_filename, ATTACHMENT_FILENAME};
pub use page::{PageSize, POINTS_PER_MM};
pub use pagination::{ImageDimensions, PaginationPlan};

// Handler modules
pub mod implement;
pub mod optimize;
pub mod resources;
pub mod utils;

// Re-export all handler functions
pub use implement::handle_implement;
pub use optimize::{OptimizeOptions, build_report, handle_optimize};
pub use resources::{handle_resources, handle_sample};
pub use utils::{MAX_PAGE_LIMIT, Pagination};

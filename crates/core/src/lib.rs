mod config;
mod planner;
mod record;

pub use config::{app_paths, load_config, save_config, AppConfig, AppPaths};
pub use planner::{
    generate_plan, rename, rename_with_options, PlanOptions, RenameCandidate, RenamePlan,
    RenameStats,
};
pub use record::{parse_records, PhotoRecord, RecordError};

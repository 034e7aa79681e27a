mod config;
pub mod logging;

pub use config::{
    DEFAULT_STORAGE_DIR, FOLDER_ROUTE_PREFIX, IMAGE_EXTENSIONS, PROGRAM_NAME, PUBLIC_MOUNT_PREFIX,
    STORAGE_ROOT_ENV, expand_home, storage_root,
};

pub use logging::init;

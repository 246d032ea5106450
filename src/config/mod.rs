mod loader;

pub use loader::{
    load_config, resolve_config, LoadedConfig, ResponderConfig, CONFIG_ENV_VAR, CONFIG_FILE_NAME,
    DEFAULT_BODY_PREVIEW_LIMIT, DEFAULT_LOG_LEVEL, DEFAULT_MESSAGE, DEFAULT_SERVER_NAME,
};

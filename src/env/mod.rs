mod snapshot;

pub use snapshot::{EnvMap, EnvironmentSnapshot};

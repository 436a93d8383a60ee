// =============================================================================
// Application Identity
// =============================================================================

/// Binary name (for log filters and help output)
pub const APP_NAME_LOWER: &str = "registry_store";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "registry-sql.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "REGISTRY_SQL_CONFIG";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "REGISTRY_SQL_LOG";

// =============================================================================
// Environment Variables - Pagination
// =============================================================================

pub const ENV_DEFAULT_LIMIT: &str = "REGISTRY_SQL_DEFAULT_LIMIT";

pub const ENV_MAX_LIMIT: &str = "REGISTRY_SQL_MAX_LIMIT";

// =============================================================================
// Pagination Defaults
// =============================================================================

/// Page size when a request carries no `limit`
pub const DEFAULT_QUERY_LIMIT: u32 = 100;

/// Largest page size a request may ask for; larger values are clamped
pub const MAX_QUERY_LIMIT: u32 = 100;

// =============================================================================
// Request Parameters
// =============================================================================

pub const OFFSET_PARAM: &str = "offset";

pub const LIMIT_PARAM: &str = "limit";

// Configuration file name
pub const CONFIG_FILENAME: &str = "loadkit.yaml";

// Path expression prefixes, checked in this order by the resolver
pub const ABSOLUTE_PREFIX: &str = "/";
pub const HOME_PREFIX: &str = "~/";
pub const CURRENT_DIR_PREFIX: &str = "./";

// Exit status used by the exit policy
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const HEALTH_ROUTE_COMPONENT: &str = "health";
pub const HEALTH_ROUTE_PREFIX: &str = const_str::concat!("/", HEALTH_ROUTE_COMPONENT);

mod json;

pub use self::json::OrderJson;

pub const SMALL_SERVICE: &str = include_str!("small_service.thrift");

pub mod generated;

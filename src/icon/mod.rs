pub mod kind;
pub mod mapper;

pub use kind::IconKind;
pub use mapper::IconMapper;

mod registry;
pub mod rocketlane;

pub use registry::{json_schema_object, json_schema_property, Tool, ToolRegistry};
pub use rocketlane::{register_all, RocketlaneTool};

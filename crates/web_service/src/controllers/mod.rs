pub mod execute_controller;
mod helpers;
pub mod pipeline_controller;
pub mod system_controller;

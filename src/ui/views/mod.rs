pub mod browse;
pub mod home;
pub mod quiz;
pub mod results;

pub mod chart;
pub mod deploy;
pub mod k8s;

pub mod ip_detector;
pub mod vote;

pub mod mobile;

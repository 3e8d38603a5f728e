pub mod install;

pub use install::install;

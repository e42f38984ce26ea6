pub mod lifecycle;

pub use lifecycle::LifecycleController;

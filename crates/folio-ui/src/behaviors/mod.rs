//! Page behaviors
//!
//! One module per component. Each `install*` function looks up the elements
//! it needs, wires its listeners/observers, and returns. Optional elements
//! that are missing make it return `Ok(())` without attaching anything.

pub mod entrance;
pub mod navigation;
pub mod progress;
pub mod sections;
pub mod timeline;
pub mod touch;
pub mod typewriter;

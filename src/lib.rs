//! Radial quick-slot selection for tracked controllers.
//!
//! A wheel of N equally sized sectors is pointed at with a controller;
//! the crate maps the pointing vector to a sector, debounces near-center
//! jitter through a dead zone, and commits selection changes to whatever
//! currently owns the quick slots. Rendering, pose tracking, haptics and
//! input wiring stay on the host side, behind the traits in [`ports`] and
//! [`events`].

pub mod config;
pub mod events;
pub mod math;
pub mod ports;
pub mod wheel;

pub use config::{Hand, HapticConfig, WheelConfig};
pub use events::{EdgeSlot, InputBinder, InputEdge, bind_edges};
pub use ports::{
    HapticPulse, HapticSink, Placement, PoseSource, SelectionSurface, SharedTarget, SlotTarget,
    TargetId, TargetSource,
};
pub use wheel::{GeometryError, Selector, Session, TickError};

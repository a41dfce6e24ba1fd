use crate::config::Hand;
use crate::math::{Vec2, Vec3};
use derive_more::{Display, From, Into};
use std::cell::RefCell;
use std::rc::Rc;

/// Identity token a quick-slot provider reports about itself, so a swap
/// of the provider (entering a vehicle, changing inventories) can be
/// detected between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct TargetId(u64);

pub type SharedTarget = Rc<RefCell<dyn SlotTarget>>;

/// Quick-slot capability set of whatever currently owns the slots.
pub trait SlotTarget {
    fn identity(&self) -> TargetId;
    fn slot_count(&self) -> usize;
    fn active_slot(&self) -> Option<usize>;
    fn select(&mut self, index: usize) -> anyhow::Result<()>;
    fn deselect(&mut self) -> anyhow::Result<()>;
}

/// Per-frame lookup of the active slot provider.
pub trait TargetSource {
    fn current(&self) -> Option<SharedTarget>;
}

/// World-space positions the selector samples each frame.
pub trait PoseSource {
    fn controller_position(&self) -> Vec3;
    fn viewpoint_position(&self) -> Vec3;
}

/// Where the selection surface should appear and which way it should turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub origin: Vec3,
    pub facing: Vec3,
}

/// Host-rendered selection surface.
pub trait SelectionSurface {
    fn show(&mut self, placement: Placement);
    fn hide(&mut self);
    fn layout(&mut self, anchors: &[Vec2]);
}

/// One controller rumble. Fire-and-forget, no result comes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HapticPulse {
    pub frequency: f32,
    pub amplitude: f32,
    pub duration: f32,
    pub channel: Hand,
}

pub trait HapticSink {
    fn pulse(&mut self, pulse: HapticPulse);
}

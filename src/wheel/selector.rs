use crate::config::WheelConfig;
use crate::events::InputEdge;
use crate::math::{self, PlaneFrame, Vec2};
use crate::ports::{
    HapticSink, Placement, PoseSource, SelectionSurface, SharedTarget, TargetId, TargetSource,
};
use thiserror::Error;

use super::{SECTOR_NONE, SECTOR_UNSET, geometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Idle,
    Armed,
}

#[derive(Debug, Error)]
pub enum TickError {
    /// The target source has never yielded a quick-slot provider.
    #[error("no quick-slot target is bound")]
    UnboundTarget,
    /// Provider-originated failure, passed through unwrapped. Selection
    /// state may be out of sync with the target, so nothing is retried.
    #[error(transparent)]
    Target(#[from] anyhow::Error),
}

/// The radial selection state machine.
///
/// Owns the session state (idle/armed, current and previous sector) and
/// drives the collaborators each frame: the target source is polled for
/// rebinds at the top of every tick, the surface is shown/hidden on the
/// activation edges, and selection changes go to the slot target plus a
/// haptic pulse.
pub struct Selector {
    config: WheelConfig,
    surface: Box<dyn SelectionSurface>,
    haptics: Box<dyn HapticSink>,
    poses: Box<dyn PoseSource>,
    targets: Box<dyn TargetSource>,
    session: Session,
    frame: Option<PlaneFrame>,
    layout: Vec<Vec2>,
    bound: Option<TargetId>,
    bound_active: Option<usize>,
    current_sector: i32,
    last_sector: i32,
    edges_bound: bool,
    warned_double_activate: bool,
}

impl Selector {
    pub fn new(
        config: WheelConfig,
        surface: Box<dyn SelectionSurface>,
        haptics: Box<dyn HapticSink>,
        poses: Box<dyn PoseSource>,
        targets: Box<dyn TargetSource>,
    ) -> Self {
        Self {
            config,
            surface,
            haptics,
            poses,
            targets,
            session: Session::Idle,
            frame: None,
            layout: Vec::new(),
            bound: None,
            bound_active: None,
            current_sector: SECTOR_UNSET,
            last_sector: SECTOR_NONE,
            edges_bound: false,
            warned_double_activate: false,
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    /// Ordered layout anchors for the bound slot count, one per sector.
    pub fn layout(&self) -> &[Vec2] {
        &self.layout
    }

    /// Active slot reported by the target when it was last bound, for
    /// host-side highlighting.
    pub fn bound_active_slot(&self) -> Option<usize> {
        self.bound_active
    }

    /// Sector currently pointed at, if one has been decided this session.
    pub fn pointed_sector(&self) -> Option<usize> {
        (self.current_sector >= 0).then_some(self.current_sector as usize)
    }

    pub(crate) fn mark_edges_bound(&mut self) -> bool {
        std::mem::replace(&mut self.edges_bound, true)
    }

    pub fn handle_edge(&mut self, edge: InputEdge) {
        match edge {
            InputEdge::Activate => self.activate(),
            InputEdge::Deactivate => self.deactivate(),
        }
    }

    /// Arms the wheel: refreshes the layout if the slot count changed,
    /// places the surface at the controller facing the (height-leveled)
    /// viewpoint, and resets sector tracking. While already armed this is
    /// a no-op behind a one-time warning.
    pub fn activate(&mut self) {
        if self.session == Session::Armed {
            if !self.warned_double_activate {
                log::warn!("Trying to activate the wheel while it is already armed!");
                self.warned_double_activate = true;
            }
            return;
        }

        let target = match self.sync_target() {
            Ok(target) => target,
            Err(e) => {
                log::error!("Cannot arm the wheel: {}", e);
                return;
            }
        };
        let count = target.borrow().slot_count();
        self.refresh_layout(count);

        let origin = self.poses.controller_position();
        let facing = math::level_with(origin, self.poses.viewpoint_position());
        self.frame = Some(PlaneFrame::facing(origin, facing));
        self.surface.show(Placement { origin, facing });
        self.haptics.pulse(self.config.haptics.pulse());

        self.current_sector = SECTOR_UNSET;
        self.last_sector = SECTOR_NONE;
        self.session = Session::Armed;
        log::debug!("Wheel armed with {} slots", count);
    }

    /// Disarms the wheel and hides the surface. No-op while idle.
    pub fn deactivate(&mut self) {
        if self.session == Session::Idle {
            return;
        }
        self.surface.hide();
        self.session = Session::Idle;
        log::debug!("Wheel disarmed");
    }

    /// Per-frame update with the pointing vector already projected into
    /// the wheel plane. Runs rebind detection even while idle; the rest
    /// only while armed: the dead zone deselects and freezes sector
    /// tracking, outside it a sector change commits a selection and fires
    /// a haptic pulse.
    pub fn tick(&mut self, pointing: Vec2) -> Result<(), TickError> {
        let target = self.sync_target()?;

        if self.session == Session::Idle {
            return Ok(());
        }

        if pointing.length_squared() <= self.config.dead_zone {
            // Inside the dead zone the last sector stays on record, so
            // sweeping through the center and back out does not re-commit
            // an unchanged choice.
            target.borrow_mut().deselect()?;
            return Ok(());
        }

        let angle = geometry::wheel_angle(pointing, self.config.angle_offset);
        let count = target.borrow().slot_count();
        let sector = match geometry::sector_at(angle, count) {
            Ok(sector) => sector,
            Err(e) => {
                log::error!("Skipping sector update: {}", e);
                return Ok(());
            }
        };

        self.last_sector = self.current_sector;
        self.current_sector = sector as i32;
        if self.current_sector != self.last_sector {
            target.borrow_mut().select(sector)?;
            self.haptics.pulse(self.config.haptics.pulse());
            log::debug!("Pointed sector changed to {}", sector);
        }
        Ok(())
    }

    /// Samples the controller pose, projects it into the wheel plane and
    /// delegates to [`tick`](Self::tick). Before the first activation no
    /// plane exists and only the rebind check runs.
    pub fn tick_from_pose(&mut self) -> Result<(), TickError> {
        let pointing = self
            .frame
            .map(|frame| frame.project(self.poses.controller_position()))
            .unwrap_or_default();
        self.tick(pointing)
    }

    /// Fetches the current provider and re-runs one-time initialization
    /// when its identity differs from the last bound one.
    fn sync_target(&mut self) -> Result<SharedTarget, TickError> {
        let target = self.targets.current().ok_or(TickError::UnboundTarget)?;
        {
            let t = target.borrow();
            let id = t.identity();
            if self.bound != Some(id) {
                let count = t.slot_count();
                self.refresh_layout(count);
                self.bound_active = t.active_slot();
                self.bound = Some(id);
                log::info!("Bound quick-slot target {} ({} slots)", id, count);
            }
        }
        Ok(target)
    }

    fn refresh_layout(&mut self, count: usize) {
        if self.layout.len() == count {
            return;
        }
        self.layout = (0..count)
            .map(|i| geometry::circle_position(i, count, self.config.radius))
            .collect();
        self.surface.layout(&self.layout);
    }
}

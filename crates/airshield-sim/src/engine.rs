//! The simulation engine: owns the world and all mutable state, drains
//! queued operator commands at tick boundaries, sequences the systems,
//! and fans the resulting snapshot out to subscribers.

use std::collections::VecDeque;

use hecs::{Entity, World};
use tracing::{debug, info, warn};

use airshield_core::commands::OperatorCommand;
use airshield_core::components::{TrackOverrides, TrackRef};
use airshield_core::constants::{COVERAGE_INTERVAL_MS, PULSE_DURATION_MS};
use airshield_core::enums::{Classification, InterceptState};
use airshield_core::events::SimEvent;
use airshield_core::registry::{default_assets, default_targets, AssetSpec, TargetSpec};
use airshield_core::state::{DashboardSnapshot, EngagementLogEntry, InterceptStats};
use airshield_core::types::SimTime;

use crate::clock::{Clock, SystemClock};
use crate::engagement::{self, Intercept};
use crate::systems;

/// Engine construction parameters. The defaults load the built-in
/// registry and run off the wall clock.
pub struct SimConfig {
    pub assets: Vec<AssetSpec>,
    pub targets: Vec<TargetSpec>,
    pub clock: Box<dyn Clock>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            assets: default_assets(),
            targets: default_targets(),
            clock: Box::new(SystemClock::new()),
        }
    }
}

/// Handle returned by [`SimulationEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type SnapshotCallback = Box<dyn Fn(&DashboardSnapshot) + Send>;

/// A transient highlight on a target, auto-cleared by deadline.
struct PulseFlag {
    target_id: String,
    expires_at_ms: u64,
}

pub struct SimulationEngine {
    world: World,
    assets: Vec<AssetSpec>,
    target_specs: Vec<TargetSpec>,
    /// Entities parallel to `target_specs`, by index.
    entities: Vec<Entity>,
    intercepts: Vec<Intercept>,
    engagement_log: Vec<EngagementLogEntry>,
    /// Targets flagged by coverage detection, in first-flagged order.
    alerted: Vec<String>,
    pulses: Vec<PulseFlag>,
    command_queue: VecDeque<OperatorCommand>,
    /// Events accumulated since the last snapshot.
    events: Vec<SimEvent>,
    clock: Box<dyn Clock>,
    time: SimTime,
    last_drift_ms: u64,
    next_coverage_ms: u64,
    subscribers: Vec<(SubscriptionId, SnapshotCallback)>,
    next_subscription: u64,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let entities = spawn_tracks(&mut world, config.targets.len());
        let last_drift_ms = config.clock.now_ms();
        info!(
            assets = config.assets.len(),
            targets = config.targets.len(),
            "simulation engine initialized"
        );
        Self {
            world,
            assets: config.assets,
            target_specs: config.targets,
            entities,
            intercepts: Vec::new(),
            engagement_log: Vec::new(),
            alerted: Vec::new(),
            pulses: Vec::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            clock: config.clock,
            time: SimTime::default(),
            last_drift_ms,
            next_coverage_ms: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ---- Commands ----

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            debug!(?command, "processing operator command");
            match command {
                OperatorCommand::ReclassifyTarget {
                    target_id,
                    classification,
                } => self.reclassify_target(&target_id, classification),
                OperatorCommand::ConfirmThreat { target_id } => self.confirm_threat(&target_id),
                OperatorCommand::PulseTarget { target_id } => self.add_pulse_target(&target_id),
                OperatorCommand::Reset => self.reset(),
            }
        }
    }

    // ---- Tick ----

    /// Run one simulation step and return the resulting snapshot.
    /// Subscribers are notified once, in registration order.
    pub fn tick(&mut self) -> DashboardSnapshot {
        self.process_commands();

        let now = self.clock.now_ms();
        let delta_hours = now.saturating_sub(self.last_drift_ms) as f64 / 3_600_000.0;
        self.last_drift_ms = now;

        let neutralized = engagement::neutralized_target_ids(&self.intercepts);
        systems::drift::run(&mut self.world, &self.target_specs, &neutralized, delta_hours);

        if now >= self.next_coverage_ms {
            self.next_coverage_ms = now + COVERAGE_INTERVAL_MS;
            let caught = systems::coverage::run(&self.world, &self.target_specs, &self.assets);
            for target_id in caught {
                debug!(%target_id, "target inside active coverage");
                self.confirm_threat_inner(&target_id, true);
                if !self.alerted.iter().any(|id| id == &target_id) {
                    self.alerted.push(target_id);
                }
            }
        }

        systems::intercept::run(
            &mut self.intercepts,
            &mut self.engagement_log,
            now,
            &mut self.events,
        );

        self.pulses.retain(|p| now < p.expires_at_ms);
        self.time.advance(now);

        let events = std::mem::take(&mut self.events);
        let snapshot = self.build_snapshot(events);
        for (_, callback) in &self.subscribers {
            callback(&snapshot);
        }
        snapshot
    }

    // ---- Operations ----

    /// Manually classify a target. Pulses the target so the change is
    /// visible; confirmation state is untouched either way.
    pub fn reclassify_target(&mut self, target_id: &str, classification: Classification) {
        let Some(entity) = self.entity_for(target_id) else {
            return;
        };
        if let Ok(mut overrides) = self.world.get::<&mut TrackOverrides>(entity) {
            overrides.classification = Some(classification);
        }
        self.events.push(SimEvent::TargetReclassified {
            target_id: target_id.to_owned(),
            classification,
        });
        self.add_pulse_target(target_id);
    }

    /// Confirm a target as an active threat and engage it with the
    /// nearest active asset.
    pub fn confirm_threat(&mut self, target_id: &str) {
        self.confirm_threat_inner(target_id, false);
    }

    fn confirm_threat_inner(&mut self, target_id: &str, auto: bool) {
        let Some(entity) = self.entity_for(target_id) else {
            return;
        };
        let newly_confirmed = match self.world.get::<&mut TrackOverrides>(entity) {
            Ok(mut overrides) => {
                if overrides.confirmed {
                    false
                } else {
                    overrides.confirmed = true;
                    true
                }
            }
            Err(_) => false,
        };
        if newly_confirmed {
            info!(%target_id, auto, "threat confirmed");
            self.events.push(SimEvent::ThreatConfirmed {
                target_id: target_id.to_owned(),
                auto,
            });
        }
        self.add_intercept(target_id, None);
    }

    /// Create an intercept against a target. At most one intercept per
    /// target per session; later calls are no-ops. With no explicit
    /// asset the nearest active one is selected, coverage or not.
    pub fn add_intercept(&mut self, target_id: &str, asset_id: Option<&str>) {
        let Some(entity) = self.entity_for(target_id) else {
            return;
        };
        if self.intercepts.iter().any(|i| i.target_id == target_id) {
            return;
        }

        let coordinates = match self.world.get::<&TrackOverrides>(entity) {
            Ok(overrides) => overrides.coordinates,
            Err(_) => None,
        }
        .unwrap_or_else(|| {
            self.target_specs
                .iter()
                .find(|s| s.id == target_id)
                .map(|s| s.coordinates)
                .unwrap_or_default()
        });

        let selected = match asset_id {
            Some(id) => self.assets.iter().find(|a| a.id == id),
            None => systems::intercept::nearest_active_asset(&self.assets, coordinates),
        };
        let Some(asset) = selected else {
            warn!(%target_id, "no asset available to intercept");
            return;
        };
        let asset_id = asset.id.clone();

        let now = self.clock.now_ms();
        info!(%target_id, %asset_id, "intercept created, vectoring");
        self.events.push(SimEvent::InterceptVectoring {
            target_id: target_id.to_owned(),
            asset_id: asset_id.clone(),
        });
        self.intercepts
            .push(Intercept::new(target_id, &asset_id, now));
    }

    /// Force an intercept into a given state, outside the timers. No-op
    /// for unknown targets and for intercepts already neutralized.
    pub fn update_intercept_state(&mut self, target_id: &str, state: InterceptState) {
        let now = self.clock.now_ms();
        if let Some(intercept) = self
            .intercepts
            .iter_mut()
            .find(|i| i.target_id == target_id)
        {
            systems::intercept::transition(
                intercept,
                state,
                now,
                &mut self.engagement_log,
                &mut self.events,
            );
        }
    }

    /// Flash a transient highlight on a target. Duplicate pulses on a
    /// target already pulsing are ignored; unknown ids are no-ops.
    pub fn add_pulse_target(&mut self, target_id: &str) {
        if self.entity_for(target_id).is_none() {
            return;
        }
        if self.pulses.iter().any(|p| p.target_id == target_id) {
            return;
        }
        self.pulses.push(PulseFlag {
            target_id: target_id.to_owned(),
            expires_at_ms: self.clock.now_ms() + PULSE_DURATION_MS,
        });
    }

    /// Restore the initial state: registry positions, no overrides, no
    /// intercepts, empty log. The clock itself is not rewound.
    pub fn reset(&mut self) {
        info!("simulation reset");
        self.world = World::new();
        self.entities = spawn_tracks(&mut self.world, self.target_specs.len());
        self.intercepts.clear();
        self.engagement_log.clear();
        self.alerted.clear();
        self.pulses.clear();
        self.events.clear();
        self.time = SimTime::default();
        self.last_drift_ms = self.clock.now_ms();
        self.next_coverage_ms = 0;
    }

    // ---- Subscriptions ----

    /// Register a snapshot callback, invoked after every tick.
    pub fn subscribe(&mut self, callback: SnapshotCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Remove a subscriber. Unknown ids are no-ops.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    // ---- Queries ----

    /// Current state without advancing the simulation. Events pending
    /// for the next tick are not drained.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.build_snapshot(Vec::new())
    }

    pub fn intercepts(&self) -> &[Intercept] {
        &self.intercepts
    }

    pub fn engagement_log(&self) -> &[EngagementLogEntry] {
        &self.engagement_log
    }

    pub fn intercept_stats(&self) -> InterceptStats {
        engagement::intercept_stats(&self.intercepts)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    // ---- Internals ----

    fn entity_for(&self, target_id: &str) -> Option<Entity> {
        self.target_specs
            .iter()
            .position(|s| s.id == target_id)
            .map(|index| self.entities[index])
    }

    fn build_snapshot(&self, events: Vec<SimEvent>) -> DashboardSnapshot {
        let pulsing: Vec<String> = self.pulses.iter().map(|p| p.target_id.clone()).collect();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.target_specs,
            &self.assets,
            &self.intercepts,
            &self.engagement_log,
            &self.alerted,
            &pulsing,
            self.time,
            events,
        )
    }
}

fn spawn_tracks(world: &mut World, count: usize) -> Vec<Entity> {
    (0..count)
        .map(|index| world.spawn((TrackRef(index), TrackOverrides::default())))
        .collect()
}

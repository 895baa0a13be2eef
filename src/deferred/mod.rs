//! One-shot deferred tasks: attack recovery, boss spawn, narrative delays.
//!
//! Every task is owned by the [`ScheduledTasks`] resource and driven by a
//! Bevy `Timer` ticked from virtual time, so headless tests advance it with
//! `TimeUpdateStrategy::ManualDuration`. Tasks fire in scheduling order and
//! are all cancelled when the app exits.

use bevy::prelude::*;
use std::time::Duration;

use crate::encounter::{show_narrator, spawn_boss, start_cutscene};
use crate::shared::*;

pub struct DeferredPlugin;

impl Plugin for DeferredPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScheduledTasks>();
        // Before the command dispatcher, so a task scheduled this frame
        // first ticks on the next one.
        app.add_systems(PreUpdate, run_deferred_tasks.before(ApplyCommands));
        app.add_systems(Last, cancel_tasks_on_exit);
    }
}

/// What a task does when its timer finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredAction {
    EndAttack,
    SpawnBoss,
    StartCutscene(CutsceneKind),
    ShowNarrator(NarratorMessage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct ScheduledTask {
    handle: TaskHandle,
    timer: Timer,
    action: DeferredAction,
}

#[derive(Resource, Debug, Default)]
pub struct ScheduledTasks {
    next_id: u64,
    pending: Vec<ScheduledTask>,
}

impl ScheduledTasks {
    pub fn schedule(&mut self, delay: Duration, action: DeferredAction) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTask {
            handle,
            timer: Timer::new(delay, TimerMode::Once),
            action,
        });
        handle
    }

    /// Returns false if the task already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|t| t.handle == handle)
    }

    pub fn any_pending(&self, action: &DeferredAction) -> bool {
        self.pending.iter().any(|t| &t.action == action)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance every timer and return the actions that came due, in the
    /// order they were scheduled.
    pub fn tick(&mut self, delta: Duration) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        self.pending.retain_mut(|task| {
            task.timer.tick(delta);
            if task.timer.finished() {
                due.push(task.action.clone());
                false
            } else {
                true
            }
        });
        due
    }
}

/// Fires due tasks against the session resources.
pub fn run_deferred_tasks(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut tasks: ResMut<ScheduledTasks>,
    mut player: ResMut<PlayerState>,
    mut roster: ResMut<EnemyRoster>,
    mut cutscene: ResMut<CutscenePlayer>,
    mut narrator: ResMut<Narrator>,
) {
    if tasks.is_empty() {
        return;
    }

    for action in tasks.tick(time.delta()) {
        match action {
            DeferredAction::EndAttack => {
                player.attacking = false;
            }
            DeferredAction::SpawnBoss => {
                spawn_boss(&mut roster, &config);
            }
            DeferredAction::StartCutscene(kind) => {
                start_cutscene(&mut cutscene, kind);
            }
            DeferredAction::ShowNarrator(message) => {
                show_narrator(&mut narrator, message);
            }
        }
    }
}

/// Session teardown: nothing scheduled may touch state after exit.
fn cancel_tasks_on_exit(mut exits: EventReader<AppExit>, mut tasks: ResMut<ScheduledTasks>) {
    if exits.read().next().is_some() {
        let cancelled = tasks.cancel_all();
        if cancelled > 0 {
            info!("Cancelled {} pending task(s) on exit", cancelled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fires_after_delay() {
        let mut tasks = ScheduledTasks::default();
        tasks.schedule(Duration::from_millis(300), DeferredAction::EndAttack);

        assert!(tasks.tick(Duration::from_millis(200)).is_empty());
        assert_eq!(tasks.tick(Duration::from_millis(100)), vec![DeferredAction::EndAttack]);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_due_tasks_keep_schedule_order() {
        let mut tasks = ScheduledTasks::default();
        tasks.schedule(Duration::from_millis(500), DeferredAction::SpawnBoss);
        tasks.schedule(Duration::from_millis(100), DeferredAction::EndAttack);

        let due = tasks.tick(Duration::from_millis(600));
        assert_eq!(due, vec![DeferredAction::SpawnBoss, DeferredAction::EndAttack]);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut tasks = ScheduledTasks::default();
        let handle = tasks.schedule(Duration::from_millis(100), DeferredAction::SpawnBoss);
        let other = tasks.schedule(Duration::from_millis(100), DeferredAction::EndAttack);

        assert!(tasks.cancel(handle));
        assert!(!tasks.cancel(handle), "second cancel is a no-op");
        assert!(!tasks.is_pending(handle));
        assert!(tasks.is_pending(other));
        assert_eq!(tasks.tick(Duration::from_secs(1)), vec![DeferredAction::EndAttack]);
    }

    #[test]
    fn test_cancel_all_clears_everything() {
        let mut tasks = ScheduledTasks::default();
        tasks.schedule(Duration::from_millis(100), DeferredAction::SpawnBoss);
        tasks.schedule(
            Duration::from_millis(100),
            DeferredAction::StartCutscene(CutsceneKind::Victory),
        );

        assert_eq!(tasks.cancel_all(), 2);
        assert!(tasks.tick(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_zero_delay_fires_on_next_tick() {
        let mut tasks = ScheduledTasks::default();
        tasks.schedule(Duration::ZERO, DeferredAction::EndAttack);
        assert_eq!(tasks.tick(Duration::ZERO), vec![DeferredAction::EndAttack]);
    }
}

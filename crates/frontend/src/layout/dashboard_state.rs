use contracts::dashboards::d100_strategic_optimizer::{dashboard_model, DashboardModel, OperatingMode};
use leptos::prelude::*;

/// Single owner of the operating mode.
///
/// Provided once by `App`; widgets read `mode()` / `model()` and only the
/// header switch writes, through `toggle()` / `set_optimized()`.
#[derive(Clone, Copy)]
pub struct DashboardState {
    mode: RwSignal<OperatingMode>,
    model: Memo<DashboardModel>,
}

impl DashboardState {
    pub fn new() -> Self {
        let mode = RwSignal::new(OperatingMode::default());
        let model = Memo::new(move |_| dashboard_model(mode.get()));
        Self { mode, model }
    }

    pub fn mode(&self) -> Signal<OperatingMode> {
        self.mode.into()
    }

    /// Everything bound to the current mode, recomputed once per toggle.
    pub fn model(&self) -> Memo<DashboardModel> {
        self.model
    }

    pub fn toggle(&self) {
        self.mode.update(|m| *m = m.toggled());
        log::debug!("operating mode switched to {}", self.mode.get_untracked());
    }

    /// Applies a switch position (`true` = Cluster-Optimized) through `toggle()`.
    pub fn set_optimized(&self, on: bool) {
        if self.is_optimized() != on {
            self.toggle();
        }
    }

    pub fn is_optimized(&self) -> bool {
        self.mode.get_untracked() == OperatingMode::Optimized
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_state() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_optimized() {
        let owner = Owner::new();
        owner.with(|| {
            let state = DashboardState::new();
            assert_eq!(state.mode().get_untracked(), OperatingMode::Optimized);
            assert_eq!(state.model().get_untracked().mode, OperatingMode::Optimized);
        });
    }

    #[test]
    fn test_toggle_updates_model_in_one_step() {
        let owner = Owner::new();
        owner.with(|| {
            let state = DashboardState::new();
            state.toggle();
            let model = state.model().get_untracked();
            assert_eq!(state.mode().get_untracked(), OperatingMode::Fragmented);
            assert_eq!(model.mode, OperatingMode::Fragmented);
            assert_eq!(model.snapshot.status, "Operational Loss Risk");
            assert_eq!(model.time_allocation.mode, OperatingMode::Fragmented);
        });
    }

    #[test]
    fn test_double_toggle_restores_model() {
        let owner = Owner::new();
        owner.with(|| {
            let state = DashboardState::new();
            let before = state.model().get_untracked();
            state.toggle();
            state.toggle();
            assert_eq!(state.model().get_untracked(), before);
        });
    }

    #[test]
    fn test_switch_position_maps_to_mode() {
        let owner = Owner::new();
        owner.with(|| {
            let state = DashboardState::new();
            state.set_optimized(true);
            assert_eq!(state.mode().get_untracked(), OperatingMode::Optimized);

            state.set_optimized(false);
            assert_eq!(state.mode().get_untracked(), OperatingMode::Fragmented);
            assert!(!state.is_optimized());

            // Повторная позиция не переключает режим
            state.set_optimized(false);
            assert_eq!(state.model().get_untracked().mode, OperatingMode::Fragmented);

            state.set_optimized(true);
            assert!(state.is_optimized());
            assert_eq!(state.model().get_untracked().snapshot.status, "High Efficiency");
        });
    }
}

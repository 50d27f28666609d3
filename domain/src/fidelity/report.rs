//! Fidelity report types

use crate::course::slot::CourseSlot;
use crate::menu::entities::MenuVariant;
use serde::Serialize;

/// An assigned slot whose produced course lost the host's idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotDrift {
    pub slot: CourseSlot,
    /// The host's idea for this slot
    pub expected: String,
    /// What the menu served there (`None` if the menu is too short)
    pub produced: Option<String>,
}

/// Fidelity result for one generated menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuFidelity {
    pub menu_id: u8,
    pub style: String,
    pub drifts: Vec<SlotDrift>,
}

impl MenuFidelity {
    pub fn passed(&self) -> bool {
        self.drifts.is_empty()
    }
}

/// Fidelity result for a whole candidate set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FidelityReport {
    /// Whether any host ideas constrained the menus
    pub constrained: bool,
    /// Number of assigned slots checked per menu
    pub slots_checked: usize,
    pub menus: Vec<MenuFidelity>,
}

impl FidelityReport {
    /// Report for a request without host ideas: every menu passes.
    pub(crate) fn unconstrained(menus: &[MenuVariant]) -> Self {
        Self {
            constrained: false,
            slots_checked: 0,
            menus: menus
                .iter()
                .map(|m| MenuFidelity {
                    menu_id: m.id,
                    style: m.style.clone(),
                    drifts: Vec::new(),
                })
                .collect(),
        }
    }

    pub(crate) fn constrained(slots_checked: usize, menus: Vec<MenuFidelity>) -> Self {
        Self {
            constrained: true,
            slots_checked,
            menus,
        }
    }

    /// Overall verdict.
    ///
    /// An unconstrained report always passes; a constrained one needs at
    /// least one menu and no drift in any of them.
    pub fn passed(&self) -> bool {
        !self.constrained || (!self.menus.is_empty() && self.menus.iter().all(|m| m.passed()))
    }

    /// Total drifted slots across all menus
    pub fn drift_count(&self) -> usize {
        self.menus.iter().map(|m| m.drifts.len()).sum()
    }

    /// Menus that failed the check
    pub fn failing_menus(&self) -> impl Iterator<Item = &MenuFidelity> {
        self.menus.iter().filter(|m| !m.passed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fidelity(id: u8, drifts: usize) -> MenuFidelity {
        MenuFidelity {
            menu_id: id,
            style: "Classic".to_string(),
            drifts: (0..drifts)
                .map(|_| SlotDrift {
                    slot: CourseSlot::MainCourse,
                    expected: "venison".to_string(),
                    produced: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_unconstrained_passes_even_empty() {
        assert!(FidelityReport::unconstrained(&[]).passed());
    }

    #[test]
    fn test_constrained_requires_menus() {
        assert!(!FidelityReport::constrained(1, vec![]).passed());
        assert!(FidelityReport::constrained(1, vec![fidelity(1, 0)]).passed());
    }

    #[test]
    fn test_drift_counting() {
        let report = FidelityReport::constrained(2, vec![fidelity(1, 0), fidelity(2, 2), fidelity(3, 1)]);
        assert!(!report.passed());
        assert_eq!(report.drift_count(), 3);
        let failing: Vec<u8> = report.failing_menus().map(|m| m.menu_id).collect();
        assert_eq!(failing, vec![2, 3]);
    }
}

//! Role-based navigation menus.
//!
//! Each dashboard role maps to a fixed, ordered list of sidebar entries. The
//! tables are data, not markup: a menu entry carries a label, an icon
//! reference, and a destination path, and the consuming surface owns the
//! rendering.

use hygia_types::Role;
use serde::Serialize;

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Human-readable entry label.
    pub label: &'static str,
    /// Icon reference (Font Awesome class name).
    pub icon: &'static str,
    /// Destination path the entry navigates to.
    pub destination: &'static str,
}

impl MenuItem {
    /// True when this entry points at the given current destination, so the
    /// surface can mark it as the active entry.
    pub fn is_active(&self, current_destination: &str) -> bool {
        self.destination == current_destination
    }
}

const CLINICIAN_MENU: &[MenuItem] = &[
    MenuItem {
        label: "Clinical Records",
        icon: "fas fa-file-medical",
        destination: "/records",
    },
    MenuItem {
        label: "Clinician Dashboard",
        icon: "fas fa-chart-line",
        destination: "/dashboard",
    },
];

const RECEPTIONIST_MENU: &[MenuItem] = &[MenuItem {
    label: "Admissions & Appointments",
    icon: "fas fa-calendar-check",
    destination: "/admissions",
}];

const PHARMACIST_MENU: &[MenuItem] = &[
    MenuItem {
        label: "Pharmacy Inventory",
        icon: "fas fa-pills",
        destination: "/pharmacy/inventory",
    },
    MenuItem {
        label: "Purchase Orders",
        icon: "fas fa-truck-loading",
        destination: "/pharmacy/orders",
    },
];

/// Returns the ordered menu for a role.
pub fn menu_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Clinician => CLINICIAN_MENU,
        Role::Receptionist => RECEPTIONIST_MENU,
        Role::Pharmacist => PHARMACIST_MENU,
    }
}

/// Lenient lookup from a raw role string.
///
/// Unknown roles yield an empty menu rather than an error; the session data
/// feeding this is taken on trust.
pub fn menu_for_role_str(role: &str) -> &'static [MenuItem] {
    role.parse().map(menu_for).unwrap_or(&[])
}

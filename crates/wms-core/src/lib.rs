//! # wms-core
//!
//! Core domain types for the Warehouse Operations Dashboard.
//! Implements Strategy pattern for value formatting.

pub mod inventory;
pub mod metrics;
pub mod records;

pub use inventory::*;
pub use metrics::*;
pub use records::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for formatting dashboard values
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// USD formatter with thousands grouping (`$1,234,567`)
#[derive(Debug, Clone, Default)]
pub struct UsdFormatter;

impl ValueFormatter for UsdFormatter {
    fn format(&self, value: f64) -> String {
        let negative = value < -0.005;
        let cents = (value.abs() * 100.0).round() as u64;

        let mut out = String::from(if negative { "-$" } else { "$" });
        out.push_str(&group_thousands(cents / 100));

        // Cents only when the value is not integral
        if cents % 100 != 0 {
            out.push_str(&format!(".{:02}", cents % 100));
        }

        out
    }
}

/// Compact formatter for large counts (K, M, B suffixes)
#[derive(Debug, Clone, Default)]
pub struct CompactCountFormatter;

impl ValueFormatter for CompactCountFormatter {
    fn format(&self, value: f64) -> String {
        let abs = value.abs();
        let sign = if value < 0.0 { "-" } else { "" };

        if abs >= 1_000_000_000.0 {
            format!("{}{:.2}B", sign, abs / 1_000_000_000.0)
        } else if abs >= 1_000_000.0 {
            format!("{}{:.2}M", sign, abs / 1_000_000.0)
        } else if abs >= 1_000.0 {
            format!("{}{:.2}K", sign, abs / 1_000.0)
        } else {
            format!("{}{:.0}", sign, abs)
        }
    }
}

/// Group an integer with comma separators (`1234567` -> `"1,234,567"`)
pub fn group_thousands(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while n > 0 {
        groups.push(n % 1000);
        n /= 1000;
    }

    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push_str(&format!(",{:03}", g));
    }
    out
}

// ============================================================================
// ENTITY STATUS
// ============================================================================

/// Display status shared by warehouses and staff rows.
///
/// The backend stores free-form strings; anything outside the known set
/// collapses into `Other` and renders with the inactive styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Inactive,
    #[serde(other)]
    #[default]
    Other,
}

impl EntityStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Other => "unknown",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        if self.is_active() {
            "badge badge-active"
        } else {
            "badge badge-inactive"
        }
    }
}

/// Purchase order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    #[serde(other)]
    #[default]
    Other,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Other => "unknown",
        }
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const PRIMARY: &str = "#3b82f6";
    pub const POSITIVE: &str = "#10b981";
    pub const NEGATIVE: &str = "#ef4444";
    pub const WARN: &str = "#f59e0b";
    pub const ACCENT: &str = "#8b5cf6";
    pub const BG_PAGE: &str = "#f9fafb";
    pub const BG_PANEL: &str = "#ffffff";
    pub const BORDER: &str = "#e5e7eb";
    pub const TEXT_PRIMARY: &str = "#111827";
    pub const TEXT_MUTED: &str = "#6b7280";
    pub const GRID: &str = "#f3f4f6";

    /// Slice palette for the zone distribution chart
    pub const ZONE_PALETTE: [&str; 5] = [
        "rgba(59, 130, 246, 0.8)",
        "rgba(16, 185, 129, 0.8)",
        "rgba(245, 158, 11, 0.8)",
        "rgba(239, 68, 68, 0.8)",
        "rgba(139, 92, 246, 0.8)",
    ];

    pub fn primary_alpha(alpha: f64) -> String {
        format!("rgba(59, 130, 246, {:.2})", alpha)
    }

    pub fn negative_alpha(alpha: f64) -> String {
        format!("rgba(239, 68, 68, {:.2})", alpha)
    }
}

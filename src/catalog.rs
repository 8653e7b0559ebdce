//! Static factory catalog.
//!
//! Order matters: record identifiers are derived from the position of each
//! descriptor (`factory_1` is the first entry), so new categories must be
//! appended rather than inserted.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One factory category: the directory name, its display name, and an icon.
pub struct CategoryDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const CATALOG: &[CategoryDescriptor] = &[
    CategoryDescriptor {
        id: "education",
        name: "مصنع التعليم الذكي",
        icon: "🎓",
    },
    CategoryDescriptor {
        id: "creative",
        name: "مصنع الإبداع الرقمي",
        icon: "🎨",
    },
    CategoryDescriptor {
        id: "technology",
        name: "مصنع التقنية المتقدمة",
        icon: "💻",
    },
    CategoryDescriptor {
        id: "corporate",
        name: "مصنع حلول الأعمال",
        icon: "📊",
    },
];

/// The catalog in reporting order.
pub fn catalog() -> &'static [CategoryDescriptor] {
    CATALOG
}

/// Record identifier for the descriptor at `index` (zero-based).
pub fn record_id(index: usize) -> String {
    format!("factory_{}", index + 1)
}

// Fixed lookup data for scoring. Brand membership is an exact, case-sensitive match.

pub const RELIABLE_BRANDS: &[&str] = &[
    "Toyota", "Honda", "Mazda", "Subaru", "Hyundai", "Kia", "Nissan",
];

pub const LUXURY_BRANDS: &[&str] = &[
    "BMW",
    "Mercedes-Benz",
    "Audi",
    "Lexus",
    "Porsche",
    "Jaguar",
    "Land Rover",
    "Volvo",
];

pub const SUPERCAR_BRANDS: &[&str] = &[
    "McLaren",
    "Ferrari",
    "Lamborghini",
    "Bugatti",
    "Koenigsegg",
    "Aston Martin",
];

pub const ELECTRIC_NAME_KEYWORDS: &[&str] = &[
    "electric", "ev", "model", "tesla", "leaf", "ioniq", "bolt", "e-tron",
];

pub const IMMEDIATE_TIMEFRAMES: &[&str] = &["ready now", "immediately", "asap"];

pub const IN_STOCK_LEVELS: &[&str] = &["high", "available", "in stock"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandClass {
    Reliable,
    Luxury,
    Supercar,
}

impl BrandClass {
    pub fn of(brand: &str) -> Option<Self> {
        if RELIABLE_BRANDS.contains(&brand) {
            Some(BrandClass::Reliable)
        } else if LUXURY_BRANDS.contains(&brand) {
            Some(BrandClass::Luxury)
        } else if SUPERCAR_BRANDS.contains(&brand) {
            Some(BrandClass::Supercar)
        } else {
            None
        }
    }
}

/// A budget bucket: quiz budget text containing any trigger selects the
/// bucket, and a vehicle name containing any model keyword earns the points.
#[derive(Debug)]
pub struct BudgetBucket {
    pub label: &'static str,
    pub triggers: &'static [&'static str],
    pub model_keywords: &'static [&'static str],
}

/// Checked in order; the first bucket with a matching trigger is the only one applied.
pub const BUDGET_BUCKETS: [BudgetBucket; 5] = [
    BudgetBucket {
        label: "entry",
        triggers: &["25k", "35k", "entry", "first"],
        model_keywords: &[
            "corolla", "yaris", "micra", "swift", "clio", "polo", "fiesta", "rio", "picanto",
        ],
    },
    BudgetBucket {
        label: "mid",
        triggers: &["35k", "50k", "value", "budget"],
        model_keywords: &["camry", "mazda3", "civic", "golf", "i30", "elantra", "cerato"],
    },
    BudgetBucket {
        label: "family",
        triggers: &["50k", "70k", "family", "spec"],
        model_keywords: &["rav4", "crv", "cx5", "tucson", "sportage", "outlander", "forester"],
    },
    BudgetBucket {
        label: "large",
        triggers: &["70k", "100k", "luxury", "premium"],
        model_keywords: &["highlander", "cx9", "pilot", "pathfinder", "palisade", "carnival"],
    },
    BudgetBucket {
        label: "premium",
        triggers: &["100k", "top", "performance", "prestige"],
        model_keywords: &["lexus", "bmw", "mercedes", "audi", "porsche", "jaguar"],
    },
];

/// Selects the bucket for a budget label; `budget_lower` must already be lowercase.
pub fn budget_bucket(budget_lower: &str) -> Option<&'static BudgetBucket> {
    BUDGET_BUCKETS
        .iter()
        .find(|bucket| bucket.triggers.iter().any(|t| budget_lower.contains(t)))
}

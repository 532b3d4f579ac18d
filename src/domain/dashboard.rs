//! Role-dependent dashboard records and reward arithmetic.
//!
//! All records are static sample data selected by a closed role key, so an
//! unknown role is unrepresentable. The only computation here is the
//! quarterly progress bar and the next-tier milestone.

/// Role selector keys, one per sample customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKey {
    General,
    Trade,
    Plus,
    Elite,
}

impl RoleKey {
    pub const ALL: [RoleKey; 4] = [RoleKey::General, RoleKey::Trade, RoleKey::Plus, RoleKey::Elite];

    pub fn label(&self) -> &'static str {
        match self {
            RoleKey::General => "General",
            RoleKey::Trade => "Trade",
            RoleKey::Plus => "Plus",
            RoleKey::Elite => "Elite",
        }
    }

    pub fn next(self) -> RoleKey {
        match self {
            RoleKey::General => RoleKey::Trade,
            RoleKey::Trade => RoleKey::Plus,
            RoleKey::Plus => RoleKey::Elite,
            RoleKey::Elite => RoleKey::General,
        }
    }
}

/// Customer discount/rewards level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    General,
    Trade,
    TradePlus,
    TradeElite,
}

impl Tier {
    pub fn name(&self) -> &'static str {
        match self {
            Tier::General => "General Customer",
            Tier::Trade => "Trade",
            Tier::TradePlus => "Trade Plus",
            Tier::TradeElite => "Trade Elite",
        }
    }

    /// General customers have no trade dashboard.
    pub fn has_dashboard(&self) -> bool {
        !matches!(self, Tier::General)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub tier: Tier,
    pub points: u32,
    pub vip_status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterlyProgress {
    pub current_spend: u32,
    pub next_tier_threshold: u32,
    pub current_discount: u8,
    pub discount_code: Option<&'static str>,
}

/// Static per-role snapshot shown on the dashboard. Selected, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardRecord {
    pub user: UserProfile,
    pub quarterly: QuarterlyProgress,
}

impl DashboardRecord {
    pub fn for_role(role: RoleKey) -> DashboardRecord {
        match role {
            RoleKey::General => DashboardRecord {
                user: UserProfile {
                    name: "Gary General",
                    tier: Tier::General,
                    points: 50,
                    vip_status: "Member",
                },
                quarterly: QuarterlyProgress {
                    current_spend: 0,
                    next_tier_threshold: 0,
                    current_discount: 0,
                    discount_code: None,
                },
            },
            RoleKey::Trade => DashboardRecord {
                user: UserProfile {
                    name: "Alex Trade",
                    tier: Tier::Trade,
                    points: 1250,
                    vip_status: "Gold Member",
                },
                quarterly: QuarterlyProgress {
                    current_spend: 3200,
                    next_tier_threshold: 5000,
                    current_discount: 30,
                    discount_code: Some("TD30"),
                },
            },
            RoleKey::Plus => DashboardRecord {
                user: UserProfile {
                    name: "Patty Plus",
                    tier: Tier::TradePlus,
                    points: 8500,
                    vip_status: "Platinum Member",
                },
                quarterly: QuarterlyProgress {
                    current_spend: 7500,
                    next_tier_threshold: 10_000,
                    current_discount: 35,
                    discount_code: Some("TD35"),
                },
            },
            RoleKey::Elite => DashboardRecord {
                user: UserProfile {
                    name: "Eli Elite",
                    tier: Tier::TradeElite,
                    points: 25_000,
                    vip_status: "Diamond Member",
                },
                quarterly: QuarterlyProgress {
                    current_spend: 15_000,
                    next_tier_threshold: 10_000,
                    current_discount: 38,
                    discount_code: Some("TD38"),
                },
            },
        }
    }
}

/// Quarterly spend goal that fills the progress bar completely.
pub const QUARTERLY_GOAL: u32 = 10_000;
/// Spend at which Trade Plus unlocks.
pub const PLUS_THRESHOLD: u32 = 5_000;

/// Progress-bar fill, clamped at 100 once spend reaches the goal.
pub fn progress_percent(current_spend: u32) -> f64 {
    ((current_spend as f64 / QUARTERLY_GOAL as f64) * 100.0).min(100.0)
}

/// The next tier a customer can still unlock this quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub threshold: u32,
    pub tier: Tier,
    pub reward: &'static str,
}

/// Next milestone for a spend level, or `None` at the top tier.
pub fn next_milestone(current_spend: u32) -> Option<Milestone> {
    if current_spend < PLUS_THRESHOLD {
        Some(Milestone { threshold: PLUS_THRESHOLD, tier: Tier::TradePlus, reward: "35% OFF" })
    } else if current_spend < QUARTERLY_GOAL {
        Some(Milestone { threshold: QUARTERLY_GOAL, tier: Tier::TradeElite, reward: "38% OFF" })
    } else {
        None
    }
}

/// One row of the current-discounts table. `code` is `None` for a locked
/// next-tier preview row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountRow {
    pub order_value: &'static str,
    pub percent: u8,
    pub code: Option<&'static str>,
}

pub fn discount_rows(tier: Tier) -> &'static [DiscountRow] {
    match tier {
        Tier::General => &[],
        Tier::Trade => &[
            DiscountRow { order_value: "No Minimum", percent: 30, code: Some("TD30") },
            DiscountRow { order_value: "$2,000 - $4,999", percent: 32, code: Some("TD32") },
            DiscountRow { order_value: "$5,000+", percent: 35, code: Some("TD35") },
        ],
        Tier::TradePlus => &[
            DiscountRow { order_value: "No Minimum", percent: 35, code: Some("TD35") },
            DiscountRow { order_value: "Next Tier ($10k+)", percent: 38, code: None },
        ],
        Tier::TradeElite => &[
            DiscountRow { order_value: "No Minimum", percent: 38, code: Some("TD38") },
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub number: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub total: &'static str,
}

pub fn sample_orders() -> &'static [Order] {
    &[
        Order { number: "ORD-24-9012", date: "Oct 24, 2024", status: "Shipped", total: "$3,200.00" },
        Order { number: "ORD-24-8550", date: "Sep 12, 2024", status: "Delivered", total: "$1,500.00" },
        Order { number: "ORD-24-7102", date: "Aug 05, 2024", status: "Delivered", total: "$850.00" },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsEntry {
    pub date: &'static str,
    pub activity: &'static str,
    pub points: i32,
}

pub fn sample_points_history() -> &'static [PointsEntry] {
    &[
        PointsEntry { date: "Oct 24, 2024", activity: "Order #ORD-24-9012", points: 3200 },
        PointsEntry { date: "Sep 01, 2024", activity: "Referral Bonus", points: 500 },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressEntry {
    pub name: &'static str,
    pub lines: [&'static str; 4],
    pub is_default: bool,
}

pub fn sample_addresses() -> &'static [AddressEntry] {
    &[
        AddressEntry {
            name: "Alex Designer",
            lines: [
                "123 Design Avenue, Suite 400",
                "New York, NY 10012",
                "United States",
                "+1 (555) 123-4567",
            ],
            is_default: true,
        },
        AddressEntry {
            name: "Client Site A",
            lines: [
                "456 Park Lane",
                "Greenwich, CT 06830",
                "United States",
                "+1 (555) 987-6543",
            ],
            is_default: false,
        },
    ]
}

//! Cost of buying a skill passion with network skill points.

use crate::config::NetworkConfig;

/// Percent growth applied per passion above the soft cap.
const OVER_CAP_GROWTH_PCT: u64 = 125;

/// Skill points needed to buy one more passion.
///
/// The base cost is scaled inversely by `learning_factor_pct` (100 means
/// normal learning speed) and grows by 25% for every passion the agent
/// already holds above the soft cap, truncating after each step.
///
/// Returns `None` for a zero learning factor or if the cost overflows.
pub fn passion_cost(
    config: &NetworkConfig,
    learning_factor_pct: u32,
    passion_count: u32,
) -> Option<u32> {
    let mut cost = u64::from(config.base_points_for_passion)
        .checked_mul(100)?
        .checked_div(u64::from(learning_factor_pct))?;
    let over_cap = passion_count.saturating_sub(config.passion_soft_cap);
    for _ in 0..over_cap {
        cost = cost.checked_mul(OVER_CAP_GROWTH_PCT)?.checked_div(100)?;
    }
    u32::try_from(cost).ok()
}

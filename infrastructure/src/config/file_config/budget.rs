//! Budget configuration from TOML (`[budget]` section)
//!
//! ```toml
//! [budget]
//! food_cost = "$60-80 per guest"
//! wine_cost = "$40 per guest"
//! ```

use planner_domain::BudgetContext;
use serde::{Deserialize, Serialize};

/// Raw budget configuration from TOML
///
/// Both values are display strings copied onto every menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBudgetConfig {
    pub food_cost: Option<String>,
    pub wine_cost: Option<String>,
}

impl FileBudgetConfig {
    /// Convert to the domain budget, letting CLI values override the file.
    pub fn to_budget_context(
        &self,
        food_override: Option<&str>,
        wine_override: Option<&str>,
    ) -> BudgetContext {
        BudgetContext {
            food_cost: food_override
                .map(str::to_string)
                .or_else(|| self.food_cost.clone()),
            wine_cost: wine_override
                .map(str::to_string)
                .or_else(|| self.wine_cost.clone()),
        }
    }
}

//! Budget category breakdown

use crate::model::{BudgetCategory, CategoryTotal, DerivedMetrics};

/// Annual totals for the six budget categories, in display order
pub fn category_data(metrics: &DerivedMetrics) -> Vec<CategoryTotal> {
    BudgetCategory::ALL
        .iter()
        .map(|&category| CategoryTotal {
            category,
            name: category.label().to_string(),
            value: metrics.costs.categories.get(category),
        })
        .collect()
}

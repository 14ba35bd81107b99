//! Read-side projections of [`ApplicationState`] for whatever renders it.
//! Nothing here mutates state.

use serde::Serialize;

use crate::bill::{Bill, BillId, Category, Filter};
use crate::store::ApplicationState;

pub const CHART_LABEL: &str = "Monthly Billing Cycle";

/// Bills passing the current filter, in list order.
pub fn visible_bills(state: &ApplicationState) -> Vec<&Bill> {
    state.bills.iter().filter(|b| state.filter.matches(b)).collect()
}

pub fn is_highlighted(state: &ApplicationState, id: BillId) -> bool {
    state.highlighted_bills.contains(&id)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    #[serde(with = "crate::bill::amount")]
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    pub points: Vec<ChartPoint>,
}

/// Amount per bill date over every bill. The filter does not apply.
pub fn chart_series(state: &ApplicationState) -> ChartSeries {
    ChartSeries {
        label: CHART_LABEL,
        points: state
            .bills
            .iter()
            .map(|b| ChartPoint {
                date: b.date.clone(),
                amount: b.amount,
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub filter: Filter,
    pub label: &'static str,
}

/// "All" first, then the fixed categories.
pub fn filter_options() -> Vec<FilterOption> {
    let mut options = Vec::with_capacity(Category::ALL.len() + 1);
    options.push(FilterOption {
        filter: Filter::ALL,
        label: Filter::ALL_SENTINEL,
    });
    options.extend(Category::ALL.into_iter().map(|c| FilterOption {
        filter: Filter::from(c),
        label: c.label(),
    }));
    options
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    #[serde(with = "crate::bill::amount")]
    pub monthly_budget: f64,
    #[serde(with = "crate::bill::amount")]
    pub total_billed: f64,
    /// Sum of every bill whose id is highlighted. Ids that no longer
    /// exist add nothing.
    #[serde(with = "crate::bill::amount")]
    pub highlighted_total: f64,
}

pub fn budget_summary(state: &ApplicationState) -> BudgetSummary {
    // Duplicated ids count once per bill.
    let highlighted_total = state
        .bills
        .iter()
        .filter(|b| state.highlighted_bills.contains(&b.id))
        .map(|b| b.amount)
        .sum();

    BudgetSummary {
        monthly_budget: state.monthly_budget,
        total_billed: state.bills.iter().map(|b| b.amount).sum(),
        highlighted_total,
    }
}

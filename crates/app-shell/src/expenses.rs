//! Trip budgets and expense tracking.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, ShellError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Hotel,
    Activities,
    Shopping,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Hotel,
        ExpenseCategory::Activities,
        ExpenseCategory::Shopping,
        ExpenseCategory::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Hotel => "hotel",
            ExpenseCategory::Activities => "activities",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Hotel => "Hotel",
            ExpenseCategory::Activities => "Activities",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "🍛",
            ExpenseCategory::Transport => "🚗",
            ExpenseCategory::Hotel => "🏨",
            ExpenseCategory::Activities => "🎭",
            ExpenseCategory::Shopping => "🛍️",
            ExpenseCategory::Other => "📝",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ShellError;

    /// Accepts either the id or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ExpenseCategory::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s) || c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShellError::InvalidExpense(format!("unknown category: {s}")))
    }
}

/// Budget and running spend for one trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripBudget {
    pub name: String,
    pub budget: u64,
    pub spent: u64,
}

impl TripBudget {
    fn new(name: &str, budget: u64, spent: u64) -> Self {
        Self {
            name: name.to_string(),
            budget,
            spent,
        }
    }

    /// Share of the budget spent, in percent. Not capped at 100.
    pub fn percentage_used(&self) -> f64 {
        percentage(self.spent, self.budget)
    }

    /// Budget left, or zero once overspent.
    pub fn remaining(&self) -> u64 {
        self.budget.saturating_sub(self.spent)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }
}

fn percentage(spent: u64, budget: u64) -> f64 {
    if budget == 0 {
        return 0.0;
    }
    spent as f64 / budget as f64 * 100.0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub trip: String,
    pub category: ExpenseCategory,
    pub amount: u64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Form input for a new expense.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Raw amount as typed.
    pub amount: String,
    pub category: ExpenseCategory,
    pub trip: String,
    pub date: NaiveDate,
    pub description: String,
}

/// In-memory budgets plus the expenses recorded against them.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    budgets: Vec<TripBudget>,
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    /// The mock budgets and recent expenses, dated relative to `today`.
    pub fn sample(today: NaiveDate) -> Self {
        let days_ago = |n: u64| today.checked_sub_days(Days::new(n)).unwrap_or(today);
        let recent = |category, amount, date| Expense {
            trip: "Goa Trip".to_string(),
            category,
            amount,
            date,
            description: None,
        };

        Self {
            budgets: vec![
                TripBudget::new("Goa Trip", 45_000, 32_000),
                TripBudget::new("Kerala Adventure", 38_000, 28_000),
                TripBudget::new("Rajasthan Weekend", 42_000, 35_000),
            ],
            expenses: vec![
                recent(ExpenseCategory::Food, 850, today),
                recent(ExpenseCategory::Transport, 450, today),
                recent(ExpenseCategory::Hotel, 2_500, days_ago(1)),
                recent(ExpenseCategory::Activities, 1_200, days_ago(2)),
            ],
        }
    }

    pub fn budgets(&self) -> &[TripBudget] {
        &self.budgets
    }

    pub fn budget(&self, trip: &str) -> Option<&TripBudget> {
        self.budgets.iter().find(|b| b.name == trip)
    }

    pub fn trip_names(&self) -> Vec<&str> {
        self.budgets.iter().map(|b| b.name.as_str()).collect()
    }

    /// Expenses, most recent first.
    pub fn recent_expenses(&self) -> Vec<&Expense> {
        let mut recent: Vec<&Expense> = self.expenses.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent
    }

    /// Record an expense and add it to the trip's spend.
    pub fn add_expense(&mut self, input: NewExpense) -> Result<&Expense> {
        let amount: u64 = input
            .amount
            .trim()
            .parse()
            .map_err(|_| ShellError::InvalidExpense(format!("amount is not a number: {}", input.amount)))?;
        if amount == 0 {
            return Err(ShellError::InvalidExpense("amount must be positive".to_string()));
        }

        let budget = self
            .budgets
            .iter_mut()
            .find(|b| b.name == input.trip)
            .ok_or_else(|| ShellError::InvalidExpense(format!("unknown trip: {}", input.trip)))?;
        budget.spent += amount;

        let description = input.description.trim();
        info!("Recorded {} expense of {} for {}", input.category, amount, input.trip);
        self.expenses.push(Expense {
            trip: input.trip,
            category: input.category,
            amount,
            date: input.date,
            description: (!description.is_empty()).then(|| description.to_string()),
        });

        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Totals per category over recorded expenses, in category order, zeros omitted.
    pub fn category_totals(&self) -> Vec<(ExpenseCategory, u64)> {
        ExpenseCategory::ALL
            .into_iter()
            .map(|category| {
                let total = self
                    .expenses
                    .iter()
                    .filter(|e| e.category == category)
                    .map(|e| e.amount)
                    .sum();
                (category, total)
            })
            .filter(|(_, total)| *total > 0)
            .collect()
    }

    pub fn total_budget(&self) -> u64 {
        self.budgets.iter().map(|b| b.budget).sum()
    }

    pub fn total_spent(&self) -> u64 {
        self.budgets.iter().map(|b| b.spent).sum()
    }

    pub fn total_remaining(&self) -> u64 {
        self.total_budget().saturating_sub(self.total_spent())
    }

    pub fn percentage_used(&self) -> f64 {
        percentage(self.total_spent(), self.total_budget())
    }
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionKind};
use rust_decimal::Decimal;

/// Sum of income amounts. Empty input sums to zero.
pub fn income_total<'a, I>(txns: I) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    txns.into_iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum()
}

/// Sum of expense magnitudes. The absolute value guards against legacy
/// rows that stored expenses signed.
pub fn expense_total<'a, I>(txns: I) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    txns.into_iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount.abs())
        .sum()
}

pub fn net_total(txns: &[Transaction]) -> Decimal {
    income_total(txns) - expense_total(txns)
}

use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Upper bound of the lower VPB bracket (EUR).
pub const LOWER_BRACKET_CEILING: Money = dec!(200_000);

/// Rate applied up to and including the lower bracket ceiling.
pub const LOWER_RATE: Rate = dec!(0.19);

/// Rate applied to taxable profit above the lower bracket ceiling.
pub const UPPER_RATE: Rate = dec!(0.258);

/// Apply the two-bracket Dutch VPB rate schedule to a taxable profit.
///
/// Total over negative, zero, and positive inputs: a negative profit yields a
/// negative tax figure, and it is the caller's job to floor the result at
/// zero. The same schedule is applied at period level and at annual level.
pub fn apply_rate_schedule(taxable_profit: Money) -> Money {
    if taxable_profit <= LOWER_BRACKET_CEILING {
        taxable_profit * LOWER_RATE
    } else {
        LOWER_BRACKET_CEILING * LOWER_RATE
            + (taxable_profit - LOWER_BRACKET_CEILING) * UPPER_RATE
    }
}

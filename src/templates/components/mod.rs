pub mod city_card;
pub mod error;
pub mod filters;
pub mod stats;

pub use city_card::city_card;
pub use error::error_page;
pub use filters::{category_filters, continent_filters};
pub use stats::stats_panel;

/// `1234567` -> `"1,234,567"`.
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

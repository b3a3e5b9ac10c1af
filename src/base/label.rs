use crate::base;

/// Axis label for a tick at `dt`.
pub fn format(dt: base::Date, resolution: base::Resolution) -> String {
    let fmt = match resolution {
        base::Resolution::Day | base::Resolution::Week => {
            time::macros::format_description!("[day padding:none] [month repr:short]")
        }
        base::Resolution::Month => time::macros::format_description!("[month repr:short]"),
        base::Resolution::Year => time::macros::format_description!("[month repr:short] [year]"),
    };
    dt.format(fmt)
}

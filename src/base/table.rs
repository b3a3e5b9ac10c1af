use crate::base;

/// Plain-text rendering of a [`base::Chart`], one row per bucket.
///
/// The marker after the date shows how the row sits on the axis: `+` for a
/// labelled tick, `|` for an unlabelled gridline and `:` for neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub chart: base::Chart,
    pub color: bool,
}

impl Table {
    fn amount_charlen(&self) -> usize {
        self.chart
            .points
            .iter()
            .map(|p| p.amount)
            .chain(std::iter::once(self.chart.total))
            .map(base::Cents::charlen)
            .max()
            .unwrap_or_default()
    }

    fn draw(
        &self,
        w: &mut impl std::fmt::Write,
        i: usize,
        point: &base::ChartDataPoint,
        width: usize,
    ) -> std::fmt::Result {
        let label = self.chart.ticks.label(i);
        let mark = match label {
            Some(_) => '+',
            None if self.chart.ticks.is_gridline(i) => '|',
            None => ':',
        };
        write!(w, "{} {} {:>width$}", point.date, mark, point.amount)?;
        match label {
            Some(s) if self.color => writeln!(w, " {}", colored::Colorize::bold(s)),
            Some(s) => writeln!(w, " {}", s),
            None => writeln!(w),
        }
    }
}

impl std::fmt::Display for Table {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.amount_charlen();
        for (i, point) in self.chart.points.iter().enumerate() {
            self.draw(f, i, point, width)?;
        }
        let total = if self.color {
            colored::Colorize::bold(self.chart.total.to_string().as_str()).to_string()
        } else {
            self.chart.total.to_string()
        };
        // Padding is applied by hand since escape codes count towards width.
        let pad = width.saturating_sub(self.chart.total.charlen());
        writeln!(f, "{:>10} = {}{}", "total", " ".repeat(pad), total)
    }
}

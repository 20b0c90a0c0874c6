//! Horizontal bar charts for the dashboard.

use colored::Color;

use crate::cli::format::Formatter;
use crate::cli::table::visible_width;

/// Category palette, cycled by position.
pub const PALETTE: [Color; 5] = [
    Color::TrueColor {
        r: 0x63,
        g: 0x66,
        b: 0xf1,
    },
    Color::TrueColor {
        r: 0x8b,
        g: 0x5c,
        b: 0xf6,
    },
    Color::TrueColor {
        r: 0xec,
        g: 0x48,
        b: 0x99,
    },
    Color::TrueColor {
        r: 0xf5,
        g: 0x9e,
        b: 0x0b,
    },
    Color::TrueColor {
        r: 0x10,
        g: 0xb9,
        b: 0x81,
    },
];

pub const INFLOW_COLOR: Color = Color::TrueColor {
    r: 0x10,
    g: 0xb9,
    b: 0x81,
};
pub const OUTFLOW_COLOR: Color = Color::TrueColor {
    r: 0xef,
    g: 0x44,
    b: 0x44,
};

const BAR_GLYPH: char = '█';

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub caption: String,
    pub color: Color,
}

/// Bars scaled against the largest value.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub width: usize,
}

impl BarChart {
    pub fn new(width: usize) -> Self {
        Self {
            bars: Vec::new(),
            width: width.max(1),
        }
    }

    pub fn push(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    /// Number of glyphs drawn for `value`; any positive value gets at least one.
    pub fn bar_length(&self, value: f64) -> usize {
        let max = self
            .bars
            .iter()
            .map(|bar| bar.value)
            .fold(0.0_f64, f64::max);
        if max <= 0.0 || value <= 0.0 {
            return 0;
        }
        let scaled = (value / max * self.width as f64).round() as usize;
        scaled.clamp(1, self.width)
    }

    pub fn render(&self, fmt: &Formatter) -> String {
        let label_width = self
            .bars
            .iter()
            .map(|bar| visible_width(&bar.label))
            .max()
            .unwrap_or(0);

        self.bars
            .iter()
            .map(|bar| {
                let length = self.bar_length(bar.value);
                let glyphs: String = std::iter::repeat(BAR_GLYPH).take(length).collect();
                let padding = " ".repeat(self.width - length);
                let label_pad = " ".repeat(label_width - visible_width(&bar.label));
                format!(
                    "{}{}  {}{}  {}",
                    bar.label,
                    label_pad,
                    fmt.paint(glyphs, bar.color),
                    padding,
                    bar.caption
                )
                .trim_end()
                .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::format::LocaleStyle;

    fn bar(label: &str, value: f64) -> Bar {
        Bar {
            label: label.to_string(),
            value,
            caption: format!("{value}"),
            color: Color::White,
        }
    }

    #[test]
    fn bars_scale_to_the_largest_value() {
        let mut chart = BarChart::new(20);
        chart.push(bar("Entradas", 1000.0));
        chart.push(bar("Saídas", 400.0));
        assert_eq!(chart.bar_length(1000.0), 20);
        assert_eq!(chart.bar_length(400.0), 8);
        assert_eq!(chart.bar_length(0.0), 0);
    }

    #[test]
    fn small_values_still_show() {
        let mut chart = BarChart::new(10);
        chart.push(bar("a", 10_000.0));
        chart.push(bar("b", 1.0));
        assert_eq!(chart.bar_length(1.0), 1);
    }

    #[test]
    fn render_aligns_labels() {
        let mut chart = BarChart::new(4);
        chart.push(bar("In", 4.0));
        chart.push(bar("Out", 2.0));
        let fmt = Formatter::new(LocaleStyle::Brazilian, "BRL", false);
        assert_eq!(chart.render(&fmt), "In   ████  4\nOut  ██    2");
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), palette_color(5));
        assert_ne!(palette_color(0), palette_color(1));
    }
}

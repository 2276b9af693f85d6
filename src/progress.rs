//! Progress bar widget.
//!
//! The bar has no state of its own beyond its look: every frame the caller
//! passes the fraction to draw, usually [`Timer::progress`]. This keeps the
//! bar in lockstep with the countdown instead of animating towards it.
//!
//! ```rust
//! use egg_timer::progress::{new, with_width, with_solid_fill};
//!
//! let bar = new(&[with_width(20), with_solid_fill("#ff0000".to_string())]);
//! let view = bar.view_as(0.5);
//! assert!(view.contains("50%"));
//! ```
//!
//! [`Timer::progress`]: crate::timer::Timer::progress

use lipgloss::blending::blend_1d;
use lipgloss::Color as LGColor;
use lipgloss::Style;
use lipgloss_extras::lipgloss;

const DEFAULT_WIDTH: i32 = 40;
const DEFAULT_RAMP_A: &str = "#5A56E0";
const DEFAULT_RAMP_B: &str = "#EE6FF8";

/// Configuration options for [`new`].
#[derive(Debug, Clone)]
pub enum ProgressOption {
    /// Gradient between the default purple and pink.
    WithDefaultGradient,
    /// Gradient between two hex colors across the whole bar.
    WithGradient(String, String),
    /// Single color for every filled cell.
    WithSolidFill(String),
    /// Characters for filled and empty cells.
    WithFillCharacters(char, char),
    /// Hide the percentage suffix.
    WithoutPercentage,
    /// Total width in cells, percentage included.
    WithWidth(i32),
}

impl ProgressOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ProgressOption::WithDefaultGradient => {
                m.set_ramp(DEFAULT_RAMP_A.to_string(), DEFAULT_RAMP_B.to_string());
            }
            ProgressOption::WithGradient(color_a, color_b) => {
                m.set_ramp(color_a.clone(), color_b.clone());
            }
            ProgressOption::WithSolidFill(color) => {
                m.full_color = color.clone();
                m.use_ramp = false;
            }
            ProgressOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            ProgressOption::WithoutPercentage => {
                m.show_percentage = false;
            }
            ProgressOption::WithWidth(width) => {
                m.width = *width;
            }
        }
    }
}

/// Fills the bar with the default gradient.
pub fn with_default_gradient() -> ProgressOption {
    ProgressOption::WithDefaultGradient
}

/// Fills the bar with a gradient from `color_a` to `color_b`.
pub fn with_gradient(color_a: String, color_b: String) -> ProgressOption {
    ProgressOption::WithGradient(color_a, color_b)
}

/// Fills the bar with a single color.
pub fn with_solid_fill(color: String) -> ProgressOption {
    ProgressOption::WithSolidFill(color)
}

/// Sets the characters used for filled and empty cells.
pub fn with_fill_characters(full: char, empty: char) -> ProgressOption {
    ProgressOption::WithFillCharacters(full, empty)
}

/// Hides the percentage suffix.
pub fn without_percentage() -> ProgressOption {
    ProgressOption::WithoutPercentage
}

/// Sets the total width in cells.
pub fn with_width(w: i32) -> ProgressOption {
    ProgressOption::WithWidth(w)
}

/// A horizontal progress bar.
#[derive(Debug, Clone)]
pub struct Model {
    /// Total width in cells, including the percentage suffix.
    pub width: i32,

    /// Filled cell character.
    pub full: char,
    /// Filled cell color when no gradient is set.
    pub full_color: String,

    /// Empty cell character.
    pub empty: char,
    /// Empty cell color.
    pub empty_color: String,

    /// Whether to append the percentage.
    pub show_percentage: bool,
    /// Style for the percentage suffix.
    pub percentage_style: Style,

    use_ramp: bool,
    ramp_color_a: String,
    ramp_color_b: String,
}

/// Creates a progress bar with the given options applied in order.
pub fn new(opts: &[ProgressOption]) -> Model {
    let mut m = Model {
        width: DEFAULT_WIDTH,
        full: '█',
        full_color: "#7571F9".to_string(),
        empty: '░',
        empty_color: "#606060".to_string(),
        show_percentage: true,
        percentage_style: Style::new(),
        use_ramp: false,
        ramp_color_a: String::new(),
        ramp_color_b: String::new(),
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// Changes the total width, e.g. after a terminal resize.
    pub fn set_width(&mut self, width: i32) {
        self.width = width.max(0);
    }

    /// Renders the bar filled to `percent`, clamped to `[0, 1]`.
    pub fn view_as(&self, percent: f64) -> String {
        let percent = percent.clamp(0.0, 1.0);
        let percent_view = self.percentage_view(percent);
        let percent_width = lipgloss::width_visible(&percent_view) as i32;
        let bar_view = self.bar_view(percent, percent_width);

        format!("{}{}", bar_view, percent_view)
    }

    fn bar_view(&self, percent: f64, text_width: i32) -> String {
        let tw = std::cmp::max(0, self.width - text_width);
        let fw = ((tw as f64) * percent).round() as i32;
        let fw = fw.clamp(0, tw);

        let mut result = String::new();

        if self.use_ramp {
            let grad_len = std::cmp::max(2, tw) as usize;
            let start = LGColor::from(self.ramp_color_a.as_str());
            let end = LGColor::from(self.ramp_color_b.as_str());
            let gradient_colors = blend_1d(grad_len, vec![start, end]);

            for i in 0..fw as usize {
                let color_idx = std::cmp::min(i, grad_len - 1);
                let styled = Style::new()
                    .foreground(gradient_colors[color_idx].clone())
                    .render(&self.full.to_string());
                result.push_str(&styled);
            }
        } else {
            let styled = Style::new()
                .foreground(LGColor::from(self.full_color.as_str()))
                .render(&self.full.to_string());
            result.push_str(&styled.repeat(fw as usize));
        }

        let empty_styled = Style::new()
            .foreground(LGColor::from(self.empty_color.as_str()))
            .render(&self.empty.to_string());
        result.push_str(&empty_styled.repeat((tw - fw) as usize));

        result
    }

    fn percentage_view(&self, percent: f64) -> String {
        if !self.show_percentage {
            return String::new();
        }
        let percentage = format!(" {:3.0}%", percent * 100.0);
        self.percentage_style.render(&percentage)
    }

    fn set_ramp(&mut self, color_a: String, color_b: String) {
        self.use_ramp = true;
        self.ramp_color_a = color_a;
        self.ramp_color_b = color_b;
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(view: &str, c: char) -> usize {
        lipgloss::strip_ansi(view).chars().filter(|&x| x == c).count()
    }

    #[test]
    fn test_new_with_no_options() {
        let progress = new(&[]);

        assert_eq!(progress.width, DEFAULT_WIDTH);
        assert_eq!(progress.full, '█');
        assert_eq!(progress.empty, '░');
        assert_eq!(progress.full_color, "#7571F9");
        assert!(progress.show_percentage);
        assert!(!progress.use_ramp);
    }

    #[test]
    fn test_options_apply_in_order() {
        let progress = new(&[
            with_default_gradient(),
            with_width(80),
            with_solid_fill("#00ff00".to_string()),
            without_percentage(),
            with_fill_characters('=', '-'),
        ]);

        assert_eq!(progress.width, 80);
        assert_eq!(progress.full_color, "#00ff00");
        assert!(!progress.use_ramp); // solid fill came after the gradient
        assert!(!progress.show_percentage);
        assert_eq!(progress.full, '=');
        assert_eq!(progress.empty, '-');
    }

    #[test]
    fn test_new_with_gradient() {
        let progress = new(&[with_gradient("#ff0000".to_string(), "#0000ff".to_string())]);
        assert!(progress.use_ramp);
        assert_eq!(progress.ramp_color_a, "#ff0000");
        assert_eq!(progress.ramp_color_b, "#0000ff");
    }

    #[test]
    fn test_fill_matches_percent() {
        let progress = new(&[with_width(20), without_percentage()]);

        assert_eq!(count(&progress.view_as(0.0), '█'), 0);
        assert_eq!(count(&progress.view_as(0.0), '░'), 20);
        assert_eq!(count(&progress.view_as(0.5), '█'), 10);
        assert_eq!(count(&progress.view_as(1.0), '█'), 20);
        assert_eq!(count(&progress.view_as(1.0), '░'), 0);
    }

    #[test]
    fn test_width_is_constant() {
        let progress = new(&[with_width(30)]);
        for p in [0.0, 0.33, 0.5, 1.0] {
            assert_eq!(lipgloss::width_visible(&progress.view_as(p)), 30);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let progress = new(&[with_width(10), without_percentage()]);
        assert_eq!(count(&progress.view_as(1.7), '█'), 10);
        assert_eq!(count(&progress.view_as(-0.3), '█'), 0);
    }

    #[test]
    fn test_percentage_suffix() {
        let progress = new(&[with_width(20)]);
        let view = lipgloss::strip_ansi(&progress.view_as(0.75));
        assert!(view.ends_with(" 75%"));

        let hidden = new(&[with_width(20), without_percentage()]);
        assert!(!hidden.view_as(0.75).contains('%'));
    }

    #[test]
    fn test_gradient_renders_filled_cells() {
        let progress = new(&[with_default_gradient(), with_width(10), without_percentage()]);
        let view = progress.view_as(0.5);
        assert_eq!(count(&view, '█'), 5);
        assert_eq!(count(&view, '░'), 5);
    }

    #[test]
    fn test_set_width() {
        let mut progress = new(&[]);
        progress.set_width(12);
        assert_eq!(progress.width, 12);
        progress.set_width(-4);
        assert_eq!(progress.width, 0);
        assert_eq!(lipgloss::strip_ansi(&progress.view_as(0.5)), "  50%");
    }
}

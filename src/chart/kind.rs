//! Supported chart kinds and label mapping.

/// Chart kind enumeration.
///
/// The fixed set of kinds the emitter can produce. Free-text labels from
/// the model are mapped onto these by [`ChartKind::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Bar chart with horizontal bars
    BarHorizontal,
    /// Bar chart with vertical bars; the default/fallback kind
    Column,
    /// Line chart
    Line,
    /// Pie chart
    Pie,
    /// Doughnut chart
    Doughnut,
    /// Scatter (XY) chart
    Scatter,
}

/// Label cascade, evaluated in order. The order is significant: a label
/// containing both "pie" and "bar" resolves to pie because pie is checked
/// first. Anything that matches nothing falls through to `Column`.
const LABEL_CASCADE: &[(&str, ChartKind)] = &[
    ("doughnut", ChartKind::Doughnut),
    ("pie", ChartKind::Pie),
    ("line", ChartKind::Line),
    ("scatter", ChartKind::Scatter),
    ("bar", ChartKind::BarHorizontal),
];

impl ChartKind {
    /// Map a lower-cased free-text label onto a chart kind. Never fails.
    pub fn from_label(label: &str) -> ChartKind {
        for (needle, kind) in LABEL_CASCADE {
            if label.contains(needle) {
                return *kind;
            }
        }
        ChartKind::Column
    }

    /// Display name used in the generated chart title.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::BarHorizontal => "Bar",
            Self::Column => "Column",
            Self::Line => "Line",
            Self::Pie => "Pie",
            Self::Doughnut => "Doughnut",
            Self::Scatter => "Scatter",
        }
    }

    /// True for kinds where each row is a share of a whole (pie, doughnut).
    /// These get value+percentage data labels instead of axes.
    #[inline]
    pub const fn is_proportional(&self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut)
    }

    /// Preset chart style applied on emission, when the kind has one.
    #[inline]
    pub const fn preset_style(&self) -> Option<u32> {
        match self {
            Self::BarHorizontal | Self::Column => Some(10),
            Self::Doughnut => Some(26),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_order_decides_ambiguous_labels() {
        assert_eq!(ChartKind::from_label("pie bar chart"), ChartKind::Pie);
        assert_eq!(ChartKind::from_label("bar or line"), ChartKind::Line);
        assert_eq!(ChartKind::from_label("doughnut pie"), ChartKind::Doughnut);
    }

    #[test]
    fn plain_labels_map_directly() {
        assert_eq!(ChartKind::from_label("bar"), ChartKind::BarHorizontal);
        assert_eq!(ChartKind::from_label("scatter plot"), ChartKind::Scatter);
        assert_eq!(ChartKind::from_label("stacked bar"), ChartKind::BarHorizontal);
    }

    #[test]
    fn unknown_or_empty_labels_default_to_column() {
        assert_eq!(ChartKind::from_label("column"), ChartKind::Column);
        assert_eq!(ChartKind::from_label("area"), ChartKind::Column);
        assert_eq!(ChartKind::from_label("table"), ChartKind::Column);
        assert_eq!(ChartKind::from_label(""), ChartKind::Column);
    }
}

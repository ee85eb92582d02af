//! Select-list display data for magnitude pickers.

use serde::{Deserialize, Serialize};

use crate::units::Magnitude;

/// One entry of a magnitude drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectEntry {
    /// Text shown to the user, e.g. `kHz` or `千Hz`.
    pub label: String,
    /// Suffix symbol carried as the widget value.
    pub value: String,
}

/// Build select entries for the given magnitudes and unit label.
///
/// The micro sign is folded onto `u` before labeling, matching the widget
/// grammar's single spelling of micro.
pub fn select_list(units: &[Magnitude], label: &str, chinese: bool) -> Vec<SelectEntry> {
    units
        .iter()
        .map(|unit| unit.fold_micro_sign())
        .map(|unit| SelectEntry {
            label: if chinese {
                format!("{}{}", unit.cjk_prefix(), label)
            } else {
                format!("{}{}", unit.symbol(), label)
            },
            value: unit.symbol().to_string(),
        })
        .collect()
}

/// Select entries for the standard magnitude set, giga through pico.
pub fn default_select_list(label: &str, chinese: bool) -> Vec<SelectEntry> {
    select_list(&Magnitude::DISPLAY, label, chinese)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list() {
        let list = default_select_list("Hz", false);

        let values: Vec<_> = list.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, ["G", "M", "k", "", "m", "u", "n", "p"]);

        assert_eq!(list[0].label, "GHz");
        assert_eq!(list[3].label, "Hz");
        assert_eq!(list[7].label, "pHz");
    }

    #[test]
    fn test_chinese_labels() {
        let list = default_select_list("伏", true);

        assert_eq!(list[2].label, "千伏");
        assert_eq!(list[2].value, "k");
        assert_eq!(list[3].label, "伏");
    }

    #[test]
    fn test_micro_sign_folds() {
        let list = select_list(&[Magnitude::MicroSign], "F", false);

        assert_eq!(list[0].value, "u");
        assert_eq!(list[0].label, "uF");
    }
}

//! Style Props
//!
//! Layout props turned into a class list and inline style.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleProps {
    pub class: Option<String>,
    pub style: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub margin: Option<String>,
    pub flex: Option<String>,
    pub is_hidden: bool,
}

impl StyleProps {
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref().filter(|class| !class.is_empty())
    }

    /// Inline style declarations, `None` when nothing is set
    pub fn style_string(&self) -> Option<String> {
        let mut declarations: Vec<String> = [
            ("width", &self.width),
            ("height", &self.height),
            ("margin", &self.margin),
        ]
        .into_iter()
        .filter_map(|(property, value)| {
            value
                .as_deref()
                .map(|value| format!("{}: {}", property, dimension_value(value)))
        })
        .collect();

        if let Some(flex) = &self.flex {
            declarations.push(format!("flex: {}", flex));
        }
        if self.is_hidden {
            declarations.push("display: none".to_string());
        }
        if let Some(style) = self.style.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            declarations.push(style.trim_end_matches(';').to_string());
        }

        if declarations.is_empty() {
            None
        } else {
            Some(declarations.join("; "))
        }
    }
}

/// Design tokens (`size-100`) become CSS variables, bare numbers become pixels
pub fn dimension_value(value: &str) -> String {
    if value.starts_with("size-") || value.starts_with("static-size-") {
        format!("var(--spectrum-global-dimension-{})", value)
    } else if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.') {
        format!("{}px", value)
    } else {
        value.to_string()
    }
}

/// Join the enabled class names with spaces
pub fn class_names<'a>(classes: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    classes
        .into_iter()
        .filter(|(class, enabled)| *enabled && !class.is_empty())
        .map(|(class, _)| class)
        .collect::<Vec<_>>()
        .join(" ")
}

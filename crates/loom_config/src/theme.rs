use indexmap::indexmap;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// A single palette entry: either a literal color string or a nested group
/// of shades (category -> shade -> RGBA string).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
  Color(String),
  Group(IndexMap<String, ColorValue>),
}

impl ColorValue {
  pub fn color(value: &str) -> ColorValue {
    ColorValue::Color(String::from(value))
  }

  pub fn group(entries: IndexMap<String, ColorValue>) -> ColorValue {
    ColorValue::Group(entries)
  }
}

/// Token extensions layered on top of the host tool's defaults.
///
/// The maps preserve declaration order so the emitted artifact is stable.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeExtend {
  pub background_color: IndexMap<String, String>,
  pub background_image: IndexMap<String, String>,
  pub width: IndexMap<String, String>,
  pub height: IndexMap<String, String>,
  pub transition_property: IndexMap<String, String>,
  pub font_family: IndexMap<String, Vec<String>>,
  pub spacing: IndexMap<String, String>,
  pub min_height: IndexMap<String, String>,
}

/// Breakpoint-overlay settings injected by the debug screens plugin.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugScreens {
  pub position: Vec<String>,
  pub prefix: String,
}

impl Default for DebugScreens {
  fn default() -> Self {
    Self {
      position: vec![String::from("bottom"), String::from("left")],
      prefix: String::from("screen: "),
    }
  }
}

/// The full design-token set: extensions plus the base color palette.
///
/// Pure data, immutable once constructed. `Theme::base()` is deterministic,
/// so assembling the configuration twice yields structurally identical
/// values.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
  pub extend: ThemeExtend,
  pub colors: IndexMap<String, ColorValue>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub debug_screens: Option<DebugScreens>,
}

impl Theme {
  /// The built-in token set.
  pub fn base() -> Theme {
    Theme {
      extend: base_extend(),
      colors: base_colors(),
      debug_screens: None,
    }
  }
}

fn string_map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
  entries
    .iter()
    .map(|(name, value)| (String::from(*name), String::from(*value)))
    .collect()
}

fn base_extend() -> ThemeExtend {
  ThemeExtend {
    background_color: string_map(&[("modal-black-50", "rgba(0, 0, 0, 0.5)")]),
    background_image: string_map(&[
      ("gradient-radial", "radial-gradient(var(--tw-gradient-stops))"),
      (
        "gradient-conic",
        "conic-gradient(from 180deg at 50% 50%, var(--tw-gradient-stops))",
      ),
    ]),
    width: string_map(&[("inherit", "inherit"), ("5/5", "100%")]),
    height: string_map(&[("inherit", "inherit")]),
    transition_property: string_map(&[("height", "height")]),
    font_family: indexmap! {
      String::from("sans") => vec![String::from("Montserrat"), String::from("sans-serif")],
      String::from("mono") => vec![String::from("monospace")],
    },
    spacing: string_map(&[
      ("80%", "80%"),
      ("70%", "70%"),
      ("60%", "60%"),
      ("50%", "50%"),
      // 16:9
      ("56.25%", "56.25%"),
      ("40%", "40%"),
      ("30%", "30%"),
      ("20%", "20%"),
      ("10%", "10%"),
      ("5%", "5%"),
      ("4%", "4%"),
      ("3%", "3%"),
      ("2%", "2%"),
      ("1%", "1%"),
    ]),
    min_height: string_map(&[("128", "32rem")]),
  }
}

fn shades(entries: &[(&str, &str)]) -> ColorValue {
  ColorValue::Group(
    entries
      .iter()
      .map(|(name, value)| (String::from(*name), ColorValue::color(value)))
      .collect(),
  )
}

fn base_colors() -> IndexMap<String, ColorValue> {
  indexmap! {
    String::from("website") => shades(&[("bg", "#F3F3F3")]),
    String::from("transparent") => ColorValue::color("transparent"),
    String::from("primary") => shades(&[("hover", "rgba(1, 115, 163, 1)")]),
    String::from("accent") => shades(&[("hover", "rgba(58, 142, 177, 1)")]),
    String::from("highcontrast") => shades(&[("hover", "rgba(0, 159, 193, 1)")]),
    String::from("quorum") => ColorValue::group(indexmap! {
      String::from("blue") => shades(&[
        ("150", "rgba(18, 90, 119, 1)"),
        ("100", "rgba(6, 149, 208, 1)"),
        ("50", "rgba(117, 189, 219, 1)"),
        ("25", "rgba(172, 209, 223, 1)"),
        ("10", "rgba(238, 250, 254, 1)"),
      ]),
    }),
    String::from("neutral") => ColorValue::group(indexmap! {
      String::from("black") => ColorValue::color("rgba(0, 0, 0, 1)"),
      String::from("grey") => shades(&[
        ("95", "rgba(32, 32, 32, 1)"),
        ("85", "rgba(43, 43, 43, 1)"),
        ("75", "rgba(54, 54, 55, 1)"),
        ("65", "rgba(64, 64, 64, 1)"),
        ("50", "rgba(101, 101, 101, 1)"),
        ("40", "rgba(114, 114, 114, 1)"),
        ("25", "rgba(215, 215, 215, 1)"),
        ("15", "rgba(229, 230, 230, 1)"),
        ("10", "rgba(246, 246, 247, 1)"),
      ]),
      String::from("white") => ColorValue::color("rgba(255, 255, 255, 1)"),
    }),
    String::from("text") => ColorValue::group(indexmap! {
      String::from("neutral") => ColorValue::group(indexmap! {
        String::from("black") => ColorValue::color("rgba(0, 0, 0, 1)"),
        String::from("grey") => shades(&[
          ("95", "rgba(32, 32, 32, 1)"),
          ("10", "rgba(246, 246, 247, 1)"),
        ]),
        String::from("white") => ColorValue::color("rgba(255, 255, 255, 1)"),
      }),
      String::from("hico") => shades(&[
        ("red", "rgba(190, 11, 0, 1)"),
        ("blue", "rgba(58, 220, 255, 1)"),
        ("yellow", "rgba(255, 230, 0, 1)"),
        ("orange", "rgba(255, 168, 0, 1)"),
        ("green", "rgba(0, 255, 148, 1)"),
        ("pink", "rgba(254, 124, 217, 1)"),
        ("gray", "rgba(229, 230, 230, 1)"),
      ]),
      String::from("dark") => shades(&[
        ("green", "rgba(175, 254, 217, 1)"),
        ("yellow", "rgba(255, 244, 149, 1)"),
        ("blue", "rgba(172, 209, 223, 1)"),
        ("pink", "rgba(249, 161, 198, 1)"),
        ("orange", "rgba(249, 161, 198, 1)"),
        ("gray", "rgba(173, 173, 173, 1)"),
        ("purple", "rgba(215, 154, 253, 1)"),
      ]),
      String::from("light") => shades(&[
        ("purple", "rgba(130, 0, 101, 1)"),
        ("blue", "rgba(16, 69, 172, 1)"),
        ("pink", "rgba(204, 5, 55, 1)"),
        ("orange", "rgba(157, 75, 0, 1)"),
        ("green", "rgba(41, 116, 6, 1)"),
        ("red", "rgba(107,0,0,1)"),
        ("gray", "rgba(101, 101, 101, 1)"),
      ]),
    }),
    String::from("secondary") => ColorValue::group(indexmap! {
      String::from("red") => shades(&[
        ("100", "rgba(148, 9, 1, 1)"),
        ("50", "rgba(188, 118, 114, 1)"),
      ]),
      String::from("orange") => ColorValue::color("rgba(255, 136, 17, 1)"),
      String::from("green") => ColorValue::color("rgba(5, 134, 45, 1)"),
      String::from("hover") => shades(&[
        ("grey", "rgba(199, 197, 197, 1)"),
        ("red", "rgba(115, 7, 1, 1)"),
      ]),
    }),
    String::from("attention") => ColorValue::group(indexmap! {
      String::from("red") => shades(&[
        ("25", "rgba(255, 116, 116, 1)"),
        ("100", "rgba(255, 0, 0, 1)"),
      ]),
    }),
    String::from("header") => ColorValue::group(indexmap! {
      String::from("green") => shades(&[("100", "rgba(50, 148, 65, 1)")]),
      String::from("purple") => shades(&[("100", "rgba(33, 30, 147, 1)")]),
      String::from("yellow") => shades(&[("100", "rgba(228, 184, 25)")]),
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn base_theme_is_deterministic() {
    assert_eq!(Theme::base(), Theme::base());
  }

  #[test]
  fn base_theme_carries_no_debug_screens() {
    assert_eq!(Theme::base().debug_screens, None);
  }

  #[test]
  fn spacing_tokens_include_aspect_ratio_entry() {
    let theme = Theme::base();
    assert_eq!(theme.extend.spacing.get("56.25%").map(String::as_str), Some("56.25%"));
    assert_eq!(theme.extend.spacing.len(), 14);
  }

  #[test]
  fn font_stacks_match_declared_order() {
    let theme = Theme::base();
    assert_eq!(
      theme.extend.font_family.get("sans"),
      Some(&vec![String::from("Montserrat"), String::from("sans-serif")])
    );
    assert_eq!(
      theme.extend.font_family.get("mono"),
      Some(&vec![String::from("monospace")])
    );
  }

  #[test]
  fn serializes_with_camel_case_keys() {
    let value = serde_json::to_value(Theme::base()).unwrap();
    assert_eq!(
      value["extend"]["backgroundColor"]["modal-black-50"],
      "rgba(0, 0, 0, 0.5)"
    );
    assert_eq!(value["extend"]["minHeight"]["128"], "32rem");
    assert!(value["debugScreens"].is_null());
  }

  #[test]
  fn palette_nests_shade_groups() {
    let theme = Theme::base();
    let Some(ColorValue::Group(quorum)) = theme.colors.get("quorum") else {
      panic!("expected quorum group");
    };
    let Some(ColorValue::Group(blue)) = quorum.get("blue") else {
      panic!("expected quorum.blue group");
    };
    assert_eq!(blue.get("150"), Some(&ColorValue::color("rgba(18, 90, 119, 1)")));
    assert_eq!(
      theme.colors.get("transparent"),
      Some(&ColorValue::color("transparent"))
    );
  }

  #[test]
  fn palette_round_trips_through_serde() {
    let theme = Theme::base();
    let json = serde_json::to_string(&theme).unwrap();
    let parsed: Theme = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, theme);
  }
}

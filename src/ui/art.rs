//! Terminal stand-ins for dessert images.

/// Glyph for an image reference; unknown references get a generic cake.
pub fn glyph(image_ref: &str) -> &'static str {
    match image_ref {
        "cupcake" => "🧁",
        "donut" => "🍩",
        "eclair" => "🥖",
        "froyo" => "🍦",
        "gingerbread" => "🍪",
        "honeycomb" => "🍯",
        "icecreamsandwich" => "🍨",
        "jellybean" => "🫘",
        "kitkat" => "🍫",
        "lollipop" => "🍭",
        "marshmallow" => "🍡",
        "nougat" => "🥜",
        "oreo" => "🥮",
        _ => "🍰",
    }
}

/// Human-readable name: "cupcake" -> "Cupcake", "ice_cream" -> "Ice Cream".
pub fn display_name(image_ref: &str) -> String {
    image_ref
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_title_cases_words() {
        assert_eq!(display_name("cupcake"), "Cupcake");
        assert_eq!(display_name("ice_cream-sandwich"), "Ice Cream Sandwich");
    }

    #[test]
    fn unknown_image_uses_fallback_glyph() {
        assert_eq!(glyph("mystery"), "🍰");
        assert_eq!(glyph("donut"), "🍩");
    }
}

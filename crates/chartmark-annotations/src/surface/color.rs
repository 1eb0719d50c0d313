use tiny_skia::Color;

/// Parses the CSS color forms annotations use: `#rgb`, `#rgba`, `#rrggbb`,
/// `#rrggbbaa`, `rgb(r, g, b)`, `rgba(r, g, b, a)` and a few keywords.
pub fn parse_color(input: &str) -> Option<Color> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_args(args);
    }
    match lower.as_str() {
        "transparent" => Some(Color::TRANSPARENT),
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "red" => Some(Color::from_rgba8(255, 0, 0, 255)),
        "green" => Some(Color::from_rgba8(0, 128, 0, 255)),
        "blue" => Some(Color::from_rgba8(0, 0, 255, 255)),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b, a) = match hex.len() {
        3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
        4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
        6 => (byte(0)?, byte(2)?, byte(4)?, 255),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };
    Some(Color::from_rgba8(r, g, b, a))
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |s: &str| -> Option<u8> {
        let v = match s.strip_suffix('%') {
            Some(pct) => pct.parse::<f32>().ok()? * 2.55,
            None => s.parse::<f32>().ok()?,
        };
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    let alpha = match parts.get(3) {
        Some(a) => a.parse::<f32>().ok()?.clamp(0.0, 1.0),
        None => 1.0,
    };
    let (r, g, b) = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    Color::from_rgba(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba8(c: Color) -> [u8; 4] {
        let c = c.to_color_u8();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!(rgba8(parse_color("#38bdf8").unwrap()), [0x38, 0xbd, 0xf8, 255]);
        assert_eq!(rgba8(parse_color("#fff").unwrap()), [255, 255, 255, 255]);
        assert_eq!(rgba8(parse_color("#ff000080").unwrap()), [255, 0, 0, 0x80]);
    }

    #[test]
    fn parses_rgba_function() {
        let c = parse_color("rgba(56, 189, 248, 0.15)").unwrap();
        assert_eq!(rgba8(c)[..3], [56, 189, 248]);
        assert!((c.alpha() - 0.15).abs() < 1e-6);
        assert_eq!(rgba8(parse_color("rgb(0,0,0)").unwrap()), [0, 0, 0, 255]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_color("#12345").is_none());
        assert!(parse_color("#ggg").is_none());
        assert!(parse_color("rgb(1,2)").is_none());
        assert!(parse_color("chartreuse-ish").is_none());
    }
}
